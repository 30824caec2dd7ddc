//! History dashboard: renders saved interviews and STAR answers.
//!
//! Pure text rendering over documents fetched from the store; the
//! command layer decides colors. Lists arrive newest first and the
//! score trend runs oldest to newest.

use crate::feedback::render_report;
use crate::interview::Turn;
use crate::store::{InterviewRecord, SavedDocument, StarRecord};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A ten-slot bar for a 1-10 score, e.g. `███████░░░` for 7.
pub fn score_bar(score: u8) -> String {
    let filled = usize::from(score.min(10));
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(10 - filled));
    bar
}

/// First `max` characters of the question, always followed by "...".
fn excerpt(text: &str, max: usize) -> String {
    let head: String = text.chars().take(max).collect();
    format!("\"{head}...\"")
}

/// Renders the full dashboard: score trend plus both saved lists.
pub fn render_dashboard(
    interviews: &[SavedDocument<InterviewRecord>],
    stars: &[SavedDocument<StarRecord>],
) -> String {
    let mut out = String::new();

    out.push_str("Interview Score Trends\n");
    if interviews.is_empty() {
        out.push_str("  Complete mock interviews to see your progress here.\n");
    } else {
        // Oldest to newest, so the trend reads left to right in time.
        for doc in interviews.iter().rev() {
            out.push_str(&format!(
                "  {}  {} {}/10\n",
                doc.created_at.format(TIMESTAMP_FORMAT),
                score_bar(doc.record.feedback.score),
                doc.record.feedback.score,
            ));
        }
    }

    out.push_str("\nSaved Interviews\n");
    if interviews.is_empty() {
        out.push_str("  No saved interviews found.\n");
    }
    for doc in interviews {
        out.push_str(&format!(
            "  [{}] Interview on {} — Score: {}/10\n",
            doc.id,
            doc.created_at.format(TIMESTAMP_FORMAT),
            doc.record.feedback.score,
        ));
    }

    out.push_str("\nSaved STAR Answers\n");
    if stars.is_empty() {
        out.push_str("  No saved STAR answers found.\n");
    }
    for doc in stars {
        out.push_str(&format!(
            "  [{}] {} — {}\n",
            doc.id,
            doc.created_at.format(TIMESTAMP_FORMAT),
            excerpt(&doc.record.question, 30),
        ));
    }

    out
}

/// Renders one saved interview in full: transcript then feedback.
pub fn render_interview_detail(doc: &SavedDocument<InterviewRecord>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Interview on {}\n\n",
        doc.created_at.format(TIMESTAMP_FORMAT)
    ));
    if let Some(context) = &doc.record.document_context {
        out.push_str(&format!("Job Description Context:\n{context}\n\n"));
    }
    out.push_str("Transcript:\n");
    for Turn { speaker, text } in &doc.record.transcript {
        out.push_str(&format!("  {speaker}: {text}\n"));
    }
    out.push('\n');
    out.push_str(&render_report(&doc.record.feedback));
    out
}

/// Renders one saved STAR answer in full.
pub fn render_star_detail(doc: &SavedDocument<StarRecord>) -> String {
    format!(
        "STAR answer from {}\n\nQuestion: {}\n\n{}\n",
        doc.created_at.format(TIMESTAMP_FORMAT),
        doc.record.question,
        doc.record.composite(),
    )
}
