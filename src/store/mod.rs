mod client;
mod error;
mod types;

pub use client::{StoreClient, INTERVIEWS, STAR_ANSWERS};
pub use error::StoreError;
pub use types::{InterviewRecord, SaveAck, SavedDocument, StarRecord};
