mod coach;
mod wizard;

pub use coach::{StarSession, SubmitOutcome};
pub use wizard::{Advance, StarDraft, StarWizard, WizardError, WizardStage};
