use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The six stages of the STAR answer wizard.
///
/// Progression is strictly linear:
/// START → SITUATION → TASK → ACTION → RESULT → DONE.
/// There are no backward transitions and no branching; the wizard only
/// advances on an explicit submit of non-empty input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStage {
    /// Collecting the behavioral question to practice.
    Start,
    Situation,
    Task,
    Action,
    Result,
    Done,
}

impl WizardStage {
    /// The prompt shown to the user while this stage awaits input.
    pub fn prompt(&self) -> &'static str {
        match self {
            WizardStage::Start => "What behavioral question would you like to practice?",
            WizardStage::Situation => {
                "Describe the **Situation**. What was the context or background?"
            }
            WizardStage::Task => {
                "What was your specific **Task** or responsibility in that situation?"
            }
            WizardStage::Action => "What **Actions** did you take to address the task?",
            WizardStage::Result => "What was the **Result** of your actions?",
            WizardStage::Done => "Your STAR answer is complete.",
        }
    }

    /// Short field label for input prompts ("Question", "Situation", ...).
    pub fn label(&self) -> &'static str {
        match self {
            WizardStage::Start => "Question",
            WizardStage::Situation => "Situation",
            WizardStage::Task => "Task",
            WizardStage::Action => "Action",
            WizardStage::Result => "Result",
            WizardStage::Done => "Done",
        }
    }
}

impl Default for WizardStage {
    fn default() -> Self {
        WizardStage::Start
    }
}

impl fmt::Display for WizardStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardStage::Start => write!(f, "START"),
            WizardStage::Situation => write!(f, "SITUATION"),
            WizardStage::Task => write!(f, "TASK"),
            WizardStage::Action => write!(f, "ACTION"),
            WizardStage::Result => write!(f, "RESULT"),
            WizardStage::Done => write!(f, "DONE"),
        }
    }
}

/// Why a submit was rejected. The stage never advances on rejection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    /// Empty or whitespace-only input.
    #[error("input must not be empty")]
    EmptyInput,

    /// The wizard already reached DONE; there is nothing left to submit.
    #[error("the answer is already complete")]
    AlreadyDone,
}

/// The draft answer accumulated by the wizard.
///
/// Fields are written exactly once, one per transition, and never
/// revised afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarDraft {
    /// The originating free-text question being practiced.
    pub question: String,
    pub situation: Option<String>,
    pub task: Option<String>,
    pub action: Option<String>,
    pub result: Option<String>,
}

impl StarDraft {
    /// True once all four STAR fields are populated.
    pub fn is_complete(&self) -> bool {
        self.situation.is_some()
            && self.task.is_some()
            && self.action.is_some()
            && self.result.is_some()
    }

    /// Assemble the four fields into the formatted composite answer.
    /// Returns `None` unless the draft is complete.
    pub fn compose(&self) -> Option<String> {
        let situation = self.situation.as_deref()?;
        let task = self.task.as_deref()?;
        let action = self.action.as_deref()?;
        let result = self.result.as_deref()?;
        Some(format!(
            "**S**ituation: {situation}\n**T**ask: {task}\n**A**ction: {action}\n**R**esult: {result}"
        ))
    }
}

/// The outcome of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The wizard moved to the given stage; the driver should fetch one
    /// guidance tip for it.
    NextStage(WizardStage),
    /// All four fields are populated; carries the composite answer.
    Completed(String),
}

/// The STAR wizard: an explicit state object advanced by [`StarWizard::submit`].
#[derive(Debug, Clone, Default)]
pub struct StarWizard {
    stage: WizardStage,
    draft: StarDraft,
}

impl StarWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    pub fn draft(&self) -> &StarDraft {
        &self.draft
    }

    /// Submit the input for the current stage and advance the wizard.
    ///
    /// Exactly one draft field is written per successful call. Empty
    /// input is rejected without advancing. Submitting after DONE is an
    /// error.
    pub fn submit(&mut self, input: &str) -> Result<Advance, WizardError> {
        let text = input.trim();
        if self.stage == WizardStage::Done {
            return Err(WizardError::AlreadyDone);
        }
        if text.is_empty() {
            return Err(WizardError::EmptyInput);
        }

        let next = match self.stage {
            WizardStage::Start => {
                self.draft.question = text.to_string();
                WizardStage::Situation
            }
            WizardStage::Situation => {
                self.draft.situation = Some(text.to_string());
                WizardStage::Task
            }
            WizardStage::Task => {
                self.draft.task = Some(text.to_string());
                WizardStage::Action
            }
            WizardStage::Action => {
                self.draft.action = Some(text.to_string());
                WizardStage::Result
            }
            WizardStage::Result => {
                self.draft.result = Some(text.to_string());
                WizardStage::Done
            }
            WizardStage::Done => unreachable!("checked above"),
        };

        self.stage = next;
        if next == WizardStage::Done {
            let composite = self
                .draft
                .compose()
                .expect("draft is complete when DONE is reached");
            Ok(Advance::Completed(composite))
        } else {
            Ok(Advance::NextStage(next))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_walks_all_stages() {
        let mut wizard = StarWizard::new();
        assert_eq!(wizard.stage(), WizardStage::Start);

        let t = wizard.submit("Tell me about a conflict you resolved").unwrap();
        assert_eq!(t, Advance::NextStage(WizardStage::Situation));

        let t = wizard.submit("Two teams disagreed on the rollout plan").unwrap();
        assert_eq!(t, Advance::NextStage(WizardStage::Task));

        let t = wizard.submit("I had to broker an agreement").unwrap();
        assert_eq!(t, Advance::NextStage(WizardStage::Action));

        let t = wizard.submit("I ran a joint planning session").unwrap();
        assert_eq!(t, Advance::NextStage(WizardStage::Result));

        let t = wizard.submit("Both teams shipped on time").unwrap();
        assert!(matches!(t, Advance::Completed(_)));
        assert_eq!(wizard.stage(), WizardStage::Done);
    }

    #[test]
    fn done_requires_exactly_four_field_submissions() {
        let mut wizard = StarWizard::new();
        wizard.submit("the question").unwrap();

        // Four field submissions after the question, in S/T/A/R order.
        for (i, input) in ["s", "t", "a", "r"].iter().enumerate() {
            assert_ne!(wizard.stage(), WizardStage::Done, "done too early at {i}");
            wizard.submit(input).unwrap();
        }
        assert_eq!(wizard.stage(), WizardStage::Done);

        let draft = wizard.draft();
        assert_eq!(draft.question, "the question");
        assert_eq!(draft.situation.as_deref(), Some("s"));
        assert_eq!(draft.task.as_deref(), Some("t"));
        assert_eq!(draft.action.as_deref(), Some("a"));
        assert_eq!(draft.result.as_deref(), Some("r"));
    }

    #[test]
    fn empty_input_is_rejected_without_advancing() {
        let mut wizard = StarWizard::new();
        assert_eq!(wizard.submit(""), Err(WizardError::EmptyInput));
        assert_eq!(wizard.stage(), WizardStage::Start);

        assert_eq!(wizard.submit("   \t  "), Err(WizardError::EmptyInput));
        assert_eq!(wizard.stage(), WizardStage::Start);

        wizard.submit("question").unwrap();
        assert_eq!(wizard.submit("  "), Err(WizardError::EmptyInput));
        assert_eq!(wizard.stage(), WizardStage::Situation);
        assert!(wizard.draft().situation.is_none());
    }

    #[test]
    fn submit_after_done_is_rejected() {
        let mut wizard = StarWizard::new();
        for input in ["q", "s", "t", "a", "r"] {
            wizard.submit(input).unwrap();
        }
        assert_eq!(wizard.submit("extra"), Err(WizardError::AlreadyDone));
        assert_eq!(wizard.stage(), WizardStage::Done);
    }

    #[test]
    fn compose_is_deterministic_star_order() {
        let mut wizard = StarWizard::new();
        wizard.submit("q").unwrap();
        wizard.submit("A").unwrap();
        wizard.submit("B").unwrap();
        wizard.submit("C").unwrap();
        let t = wizard.submit("D").unwrap();

        let expected = "**S**ituation: A\n**T**ask: B\n**A**ction: C\n**R**esult: D";
        assert_eq!(t, Advance::Completed(expected.to_string()));
        assert_eq!(wizard.draft().compose().as_deref(), Some(expected));
    }

    #[test]
    fn compose_requires_all_four_fields() {
        let draft = StarDraft {
            question: "q".into(),
            situation: Some("s".into()),
            task: Some("t".into()),
            action: None,
            result: Some("r".into()),
        };
        assert!(!draft.is_complete());
        assert_eq!(draft.compose(), None);
    }

    #[test]
    fn input_is_trimmed_before_storage() {
        let mut wizard = StarWizard::new();
        wizard.submit("  the question  ").unwrap();
        assert_eq!(wizard.draft().question, "the question");
    }

    #[test]
    fn stage_display() {
        assert_eq!(WizardStage::Start.to_string(), "START");
        assert_eq!(WizardStage::Situation.to_string(), "SITUATION");
        assert_eq!(WizardStage::Done.to_string(), "DONE");
    }

    #[test]
    fn draft_serialization_roundtrip() {
        let draft = StarDraft {
            question: "q".into(),
            situation: Some("s".into()),
            task: Some("t".into()),
            action: Some("a".into()),
            result: Some("r".into()),
        };
        let json = serde_json::to_string(&draft).unwrap();
        let parsed: StarDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, draft);
    }
}
