//! Interview feedback: structured performance analysis of a transcript.
//!
//! The model is asked for a JSON object with a fixed schema (score,
//! strengths, improvements, ideal answers). Models occasionally wrap
//! JSON in markdown fences, so the parser strips them before
//! deserializing, and the score is validated against the 1-10 scale.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::gemini::{
    generate_with_retry, GenerateRequest, GenerationConfig, GeminiError, RetryPolicy,
    TextGenerator, TEXT_MODEL,
};
use crate::interview::InterviewSession;

/// Structured feedback for one completed mock interview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReport {
    /// Overall score from 1 to 10.
    pub score: u8,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    /// Ideal answer per question asked.
    #[serde(default)]
    pub ideal_answers: BTreeMap<String, String>,
}

/// Builds the analysis prompt over the session transcript.
pub fn feedback_prompt(session: &InterviewSession) -> String {
    format!(
        "Analyze the following mock interview transcript for a candidate applying for \
         the {role} position.\n\
         \n\
         Provide a detailed analysis in a JSON object with the following schema:\n\
         {{\n\
           \"score\": number, // A score from 1-10, with 10 being the best.\n\
           \"strengths\": string[], // Specific examples of strengths.\n\
           \"improvements\": string[], // Areas for improvement.\n\
           \"ideal_answers\": {{\n\
             [question: string]: string // Ideal answer for each question.\n\
           }}\n\
         }}\n\
         \n\
         Transcript:\n\
         {transcript}",
        role = session.target_role(),
        transcript = session.transcript_block(),
    )
}

/// Parses the model output into a [`FeedbackReport`].
pub fn parse_report(text: &str) -> Result<FeedbackReport, GeminiError> {
    let stripped = strip_json_fences(text);
    let report: FeedbackReport =
        serde_json::from_str(stripped).map_err(|e| GeminiError::ParseError(e.to_string()))?;
    if !(1..=10).contains(&report.score) {
        return Err(GeminiError::ParseError(format!(
            "score out of range: {}",
            report.score
        )));
    }
    Ok(report)
}

/// Requests and parses a feedback report for the session.
pub async fn analyze(
    client: &impl TextGenerator,
    policy: &RetryPolicy,
    session: &InterviewSession,
) -> Result<FeedbackReport, GeminiError> {
    let req = GenerateRequest::from_text(feedback_prompt(session))
        .with_config(GenerationConfig::json());
    let response = generate_with_retry(client, TEXT_MODEL, &req, policy).await?;
    let text = response
        .text()
        .ok_or_else(|| GeminiError::ParseError("model returned no feedback".into()))?;
    parse_report(text)
}

/// Renders the report as plain terminal text.
pub fn render_report(report: &FeedbackReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Overall Score: {}/10\n", report.score));

    out.push_str("\nStrengths:\n");
    if report.strengths.is_empty() {
        out.push_str("  (none listed)\n");
    }
    for s in &report.strengths {
        out.push_str(&format!("  - {s}\n"));
    }

    out.push_str("\nAreas for Improvement:\n");
    if report.improvements.is_empty() {
        out.push_str("  (none listed)\n");
    }
    for i in &report.improvements {
        out.push_str(&format!("  - {i}\n"));
    }

    if !report.ideal_answers.is_empty() {
        out.push_str("\nIdeal Answers:\n");
        for (question, answer) in &report.ideal_answers {
            out.push_str(&format!("  Question: {question}\n  {answer}\n\n"));
        }
    }
    out
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
