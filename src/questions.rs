//! Generates strategic questions for the candidate to ask the interviewer.

use crate::gemini::{
    generate_with_retry, GenerateRequest, GeminiError, RetryPolicy, TextGenerator, TEXT_MODEL,
};

/// Builds the question-generation prompt for the given role and context.
pub fn questions_prompt(target_role: &str, job_context: Option<&str>) -> String {
    format!(
        "Generate a list of 5 insightful and strategic questions for a candidate to ask \
         their interviewer for the {target_role} position. The questions should demonstrate \
         a deep understanding of the role's challenges, responsibilities, and future \
         direction. Do not provide any conversational text, only the list of questions.\n\
         \n\
         Job Description Context:\n\
         {context}",
        context = job_context.unwrap_or("No specific job description provided."),
    )
}

/// Asks the model for the question list, returning the raw text.
pub async fn generate(
    client: &impl TextGenerator,
    policy: &RetryPolicy,
    target_role: &str,
    job_context: Option<&str>,
) -> Result<String, GeminiError> {
    let req = GenerateRequest::from_text(questions_prompt(target_role, job_context));
    let response = generate_with_retry(client, TEXT_MODEL, &req, policy).await?;
    response
        .text()
        .map(|t| t.trim().to_string())
        .ok_or_else(|| GeminiError::ParseError("model returned no questions".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::types::{Candidate, Content, GenerateResponse, Part};

    #[test]
    fn prompt_names_role_and_falls_back_without_context() {
        let prompt = questions_prompt("Engineering Manager", None);
        assert!(prompt.contains("Engineering Manager position"));
        assert!(prompt.contains("No specific job description provided."));
    }

    #[test]
    fn prompt_embeds_context_when_present() {
        let prompt = questions_prompt("Engineering Manager", Some("Leads a team of 12."));
        assert!(prompt.contains("Leads a team of 12."));
    }

    struct OneShotClient;

    impl TextGenerator for OneShotClient {
        async fn generate(
            &self,
            _model: &str,
            _req: &GenerateRequest,
        ) -> Result<GenerateResponse, GeminiError> {
            Ok(GenerateResponse {
                candidates: vec![Candidate {
                    content: Content {
                        role: "model".into(),
                        parts: vec![Part::text("1. How is success measured?\n")],
                    },
                    finish_reason: Some("STOP".into()),
                }],
                usage_metadata: None,
            })
        }
    }

    #[tokio::test]
    async fn generate_returns_trimmed_text() {
        let policy = RetryPolicy {
            max_retries: 0,
            base_delay_ms: 1,
            backoff_multiplier: 2,
        };
        let text = generate(&OneShotClient, &policy, "Engineering Manager", None)
            .await
            .unwrap();
        assert_eq!(text, "1. How is success measured?");
    }
}
