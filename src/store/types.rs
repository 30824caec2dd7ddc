//! Persisted record shapes for the remote document store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::feedback::FeedbackReport;
use crate::interview::Turn;
use crate::star::StarDraft;

/// One completed mock interview: transcript, feedback and the job
/// context it ran against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewRecord {
    pub transcript: Vec<Turn>,
    pub feedback: FeedbackReport,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub document_context: Option<String>,
}

/// One completed STAR answer. All four fields are present by
/// construction: the wizard only persists complete drafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRecord {
    pub question: String,
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
}

impl StarRecord {
    /// Builds a record from a wizard draft. Returns `None` unless the
    /// draft is complete.
    pub fn from_draft(draft: &StarDraft) -> Option<Self> {
        Some(Self {
            question: draft.question.clone(),
            situation: draft.situation.clone()?,
            task: draft.task.clone()?,
            action: draft.action.clone()?,
            result: draft.result.clone()?,
        })
    }

    /// The formatted composite answer, same shape the wizard produces.
    pub fn composite(&self) -> String {
        format!(
            "**S**ituation: {}\n**T**ask: {}\n**A**ction: {}\n**R**esult: {}",
            self.situation, self.task, self.action, self.result
        )
    }
}

/// A stored document: the record plus the client-assigned id and the
/// server-assigned creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedDocument<T> {
    pub id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: T,
}

/// Acknowledgement returned by a successful save.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveAck {
    pub id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Wire shape of a collection listing.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub documents: Vec<SavedDocument<T>>,
}

/// Sorts documents newest first. Listings are small; sorting in memory
/// keeps the store free of index requirements.
pub fn sort_newest_first<T>(documents: &mut [SavedDocument<T>]) {
    documents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::star::StarWizard;

    #[test]
    fn star_record_requires_complete_draft() {
        let mut wizard = StarWizard::new();
        wizard.submit("q").unwrap();
        wizard.submit("s").unwrap();
        assert!(StarRecord::from_draft(wizard.draft()).is_none());

        wizard.submit("t").unwrap();
        wizard.submit("a").unwrap();
        wizard.submit("r").unwrap();
        let record = StarRecord::from_draft(wizard.draft()).unwrap();
        assert_eq!(record.question, "q");
        assert_eq!(record.result, "r");
    }

    #[test]
    fn star_record_composite_matches_wizard_output() {
        let mut wizard = StarWizard::new();
        for input in ["q", "A", "B", "C", "D"] {
            wizard.submit(input).unwrap();
        }
        let record = StarRecord::from_draft(wizard.draft()).unwrap();
        assert_eq!(
            Some(record.composite()),
            wizard.draft().compose()
        );
    }

    #[test]
    fn saved_document_flattens_the_record() {
        let json = r#"{
            "id": "doc-1",
            "createdAt": "2025-04-02T10:00:00Z",
            "question": "q",
            "situation": "s",
            "task": "t",
            "action": "a",
            "result": "r"
        }"#;
        let doc: SavedDocument<StarRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(doc.id, "doc-1");
        assert_eq!(doc.record.situation, "s");

        let back = serde_json::to_string(&doc).unwrap();
        assert!(back.contains(r#""createdAt""#));
        assert!(back.contains(r#""question":"q""#));
    }

    #[test]
    fn sort_newest_first_orders_descending() {
        fn doc(id: &str, ts: &str) -> SavedDocument<StarRecord> {
            SavedDocument {
                id: id.into(),
                created_at: ts.parse().unwrap(),
                record: StarRecord {
                    question: "q".into(),
                    situation: "s".into(),
                    task: "t".into(),
                    action: "a".into(),
                    result: "r".into(),
                },
            }
        }

        let mut docs = vec![
            doc("old", "2025-01-01T00:00:00Z"),
            doc("new", "2025-06-01T00:00:00Z"),
            doc("mid", "2025-03-01T00:00:00Z"),
        ];
        sort_newest_first(&mut docs);
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn list_response_defaults_to_empty() {
        let list: ListResponse<StarRecord> = serde_json::from_str("{}").unwrap();
        assert!(list.documents.is_empty());
    }
}
