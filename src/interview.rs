//! Mock interview session: transcript state and interviewer prompts.
//!
//! The remote model plays the interviewer under a persona; this module
//! owns the transcript and builds the three prompts the session needs
//! (opening question, next question, real-time coaching tip). All
//! remote calls go through the bounded-retry wrapper.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::gemini::{generate_with_retry, GenerateRequest, GeminiError, RetryPolicy, TextGenerator, TEXT_MODEL};
use crate::persona::Persona;

/// Who produced a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Interviewer,
    Candidate,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::Interviewer => write!(f, "Interviewer"),
            Speaker::Candidate => write!(f, "Candidate"),
        }
    }
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

/// State of one mock interview: persona, target role, optional job
/// context and the running transcript.
#[derive(Debug, Clone)]
pub struct InterviewSession {
    persona: Persona,
    target_role: String,
    job_context: Option<String>,
    transcript: Vec<Turn>,
}

impl InterviewSession {
    pub fn new(persona: Persona, target_role: impl Into<String>, job_context: Option<String>) -> Self {
        Self {
            persona,
            target_role: target_role.into(),
            job_context,
            transcript: Vec::new(),
        }
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn job_context(&self) -> Option<&str> {
        self.job_context.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    pub fn target_role(&self) -> &str {
        &self.target_role
    }

    fn context_block(&self) -> &str {
        self.job_context.as_deref().unwrap_or(
            "No specific job description provided. Proceed with general questions for the role.",
        )
    }

    /// The transcript rendered as "Interviewer: ..." / "Candidate: ..." lines.
    pub fn transcript_block(&self) -> String {
        self.transcript
            .iter()
            .map(|t| format!("{}: {}", t.speaker, t.text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Prompt that opens the interview with an introduction question.
    pub fn opening_prompt(&self) -> String {
        format!(
            "You are a professional interviewer for the {role} position. Your persona is \
             **{persona}**. You are {tone}. You will ask one question at a time. Do not \
             provide commentary or feedback. Your first question should be an introduction, \
             such as \"Thank you for coming in today. Can you start by telling me a little \
             about your background and why you are interested in this position?\".\n\
             \n\
             Job Description Context:\n\
             {context}",
            role = self.target_role,
            persona = self.persona,
            tone = self.persona.tone(),
            context = self.context_block(),
        )
    }

    /// Prompt that asks for the next question given the transcript so far.
    pub fn next_question_prompt(&self) -> String {
        format!(
            "You are a professional interviewer for the {role} position. Your persona is \
             **{persona}**. You are {tone}. You ask one question at a time. Do not provide \
             commentary or feedback.\n\
             \n\
             Here is the conversation so far:\n\
             {transcript}\n\
             \n\
             Based on the conversation and the following job context, provide the next \
             logical interview question.\n\
             \n\
             Job Description Context:\n\
             {context}",
            role = self.target_role,
            persona = self.persona,
            tone = self.persona.tone(),
            transcript = self.transcript_block(),
            context = self.context_block(),
        )
    }

    /// Prompt requesting one short coaching tip for the given answer.
    pub fn tip_prompt(&self, answer: &str) -> String {
        format!(
            "Analyze the following interview answer from a candidate. Provide a very short, \
             actionable tip for improvement. Focus on a single point like conciseness, \
             clarity, relevance, or using the STAR method. Do not provide a long explanation.\n\
             \n\
             User's last answer: \"{answer}\"\n\
             \n\
             Interview context so far:\n\
             {transcript}\n\
             \n\
             Example tips:\n\
             - Try to be more concise.\n\
             - Provide a more specific example.\n\
             - Elaborate on the \"Action\" you took.\n\
             - Connect your answer back to the job requirements.",
            transcript = self.transcript_block(),
        )
    }

    /// Ask the model for the opening question and record it.
    pub async fn start(
        &mut self,
        client: &impl TextGenerator,
        policy: &RetryPolicy,
    ) -> Result<String, GeminiError> {
        let req = GenerateRequest::from_text(self.opening_prompt());
        let response = generate_with_retry(client, TEXT_MODEL, &req, policy).await?;
        let question = response
            .text()
            .ok_or_else(|| GeminiError::ParseError("model returned no question".into()))?
            .trim()
            .to_string();
        self.transcript.push(Turn {
            speaker: Speaker::Interviewer,
            text: question.clone(),
        });
        Ok(question)
    }

    /// Record the candidate's answer and ask for the next question.
    ///
    /// The answer stays on the transcript even if the follow-up request
    /// fails, matching the conversational model: what was said was said.
    pub async fn submit_answer(
        &mut self,
        client: &impl TextGenerator,
        policy: &RetryPolicy,
        answer: &str,
    ) -> Result<String, GeminiError> {
        self.transcript.push(Turn {
            speaker: Speaker::Candidate,
            text: answer.trim().to_string(),
        });
        let req = GenerateRequest::from_text(self.next_question_prompt());
        let response = generate_with_retry(client, TEXT_MODEL, &req, policy).await?;
        let question = response
            .text()
            .ok_or_else(|| GeminiError::ParseError("model returned no question".into()))?
            .trim()
            .to_string();
        self.transcript.push(Turn {
            speaker: Speaker::Interviewer,
            text: question.clone(),
        });
        Ok(question)
    }

    /// Fetch a coaching tip for the most recent candidate answer.
    /// Informational only — any failure collapses to `None`.
    pub async fn realtime_tip(
        &self,
        client: &impl TextGenerator,
        policy: &RetryPolicy,
    ) -> Option<String> {
        let answer = self
            .transcript
            .iter()
            .rev()
            .find(|t| t.speaker == Speaker::Candidate)?;
        let req = GenerateRequest::from_text(self.tip_prompt(&answer.text));
        let response = generate_with_retry(client, TEXT_MODEL, &req, policy)
            .await
            .ok()?;
        response.text().map(|t| t.trim().to_string())
    }
}
