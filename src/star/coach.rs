//! Drives the STAR wizard against the remote model.
//!
//! [`StarSession`] wraps the pure [`StarWizard`] and issues exactly one
//! auxiliary guidance request per stage transition. Guidance is
//! informational only: a failed tip request never affects wizard
//! control flow.

use crate::gemini::{generate_with_retry, GenerateRequest, RetryPolicy, TextGenerator, TEXT_MODEL};

use super::wizard::{Advance, StarDraft, StarWizard, WizardError, WizardStage};

/// What the terminal loop should show after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The wizard advanced; show the next stage prompt plus an optional
    /// guidance tip from the model.
    Prompted {
        stage: WizardStage,
        tip: Option<String>,
    },
    /// The wizard reached DONE; carries the composite answer.
    Completed { composite: String },
}

/// A STAR wizard session bound to the remote guidance coach.
#[derive(Debug, Default)]
pub struct StarSession {
    wizard: StarWizard,
}

impl StarSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> WizardStage {
        self.wizard.stage()
    }

    pub fn draft(&self) -> &StarDraft {
        self.wizard.draft()
    }

    /// Submit the current field and, on a stage transition, fetch one
    /// guidance tip for the next stage. Tip failures are swallowed.
    pub async fn submit(
        &mut self,
        client: &impl TextGenerator,
        policy: &RetryPolicy,
        input: &str,
    ) -> Result<SubmitOutcome, WizardError> {
        match self.wizard.submit(input)? {
            Advance::NextStage(stage) => {
                let tip =
                    guidance_tip(client, policy, stage, &self.wizard.draft().question).await;
                Ok(SubmitOutcome::Prompted { stage, tip })
            }
            Advance::Completed(composite) => Ok(SubmitOutcome::Completed { composite }),
        }
    }
}

/// Builds the guidance prompt for the given stage.
fn guidance_prompt(stage: WizardStage, question: &str) -> String {
    format!(
        "You are a STAR method assistant. Guide the user to structure their behavioral \
         interview answer. The user has provided the following prompt:\n\
         \"{question}\"\n\
         \n\
         Current stage: {label}\n\
         \n\
         Provide a simple, clear, and encouraging prompt to help the user articulate the \
         next part of their answer based on the STAR method. For example, if the user has \
         entered a situation, ask them to describe the task.",
        label = stage.label()
    )
}

/// Requests one guidance tip, returning `None` on any failure.
async fn guidance_tip(
    client: &impl TextGenerator,
    policy: &RetryPolicy,
    stage: WizardStage,
    question: &str,
) -> Option<String> {
    let req = GenerateRequest::from_text(guidance_prompt(stage, question));
    let response = generate_with_retry(client, TEXT_MODEL, &req, policy)
        .await
        .ok()?;
    response.text().map(|t| t.trim().to_string())
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use super::*;
    use crate::gemini::types::{Candidate, Content, GenerateResponse, Part};
    use crate::gemini::GeminiError;

    struct ScriptedClient {
        script: RefCell<VecDeque<Result<String, GeminiError>>>,
        calls: Cell<u32>,
        prompts: RefCell<Vec<String>>,
    }

    impl ScriptedClient {
        fn always_ok(tip: &str) -> Self {
            Self {
                script: RefCell::new(
                    std::iter::repeat_with(|| Ok(tip.to_string()))
                        .take(16)
                        .collect(),
                ),
                calls: Cell::new(0),
                prompts: RefCell::new(Vec::new()),
            }
        }

        fn always_err() -> Self {
            Self {
                script: RefCell::new(VecDeque::new()),
                calls: Cell::new(0),
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    impl TextGenerator for ScriptedClient {
        async fn generate(
            &self,
            _model: &str,
            req: &GenerateRequest,
        ) -> Result<GenerateResponse, GeminiError> {
            self.calls.set(self.calls.get() + 1);
            if let Some(text) = req.contents[0].parts[0].text.clone() {
                self.prompts.borrow_mut().push(text);
            }
            match self.script.borrow_mut().pop_front() {
                Some(Ok(text)) => Ok(GenerateResponse {
                    candidates: vec![Candidate {
                        content: Content {
                            role: "model".into(),
                            parts: vec![Part::text(text)],
                        },
                        finish_reason: Some("STOP".into()),
                    }],
                    usage_metadata: None,
                }),
                _ => Err(GeminiError::ApiError {
                    status: 500,
                    message: "scripted failure".into(),
                }),
            }
        }
    }

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_retries: 0,
            base_delay_ms: 1,
            backoff_multiplier: 2,
        }
    }

    #[tokio::test]
    async fn one_tip_request_per_transition() {
        let client = ScriptedClient::always_ok("Describe the task next.");
        let policy = fast_policy();
        let mut session = StarSession::new();

        for input in ["q", "s", "t", "a"] {
            let outcome = session.submit(&client, &policy, input).await.unwrap();
            assert!(matches!(outcome, SubmitOutcome::Prompted { tip: Some(_), .. }));
        }
        // Four transitions into SITUATION/TASK/ACTION/RESULT → four tips.
        assert_eq!(client.calls.get(), 4);

        // The final submission completes without a tip request.
        let outcome = session.submit(&client, &policy, "r").await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Completed { .. }));
        assert_eq!(client.calls.get(), 4);
    }

    #[tokio::test]
    async fn tip_failure_does_not_block_progress() {
        let client = ScriptedClient::always_err();
        let policy = fast_policy();
        let mut session = StarSession::new();

        let outcome = session.submit(&client, &policy, "q").await.unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Prompted {
                stage: WizardStage::Situation,
                tip: None,
            }
        );
        assert_eq!(session.stage(), WizardStage::Situation);
    }

    #[tokio::test]
    async fn empty_input_makes_no_remote_call() {
        let client = ScriptedClient::always_ok("tip");
        let policy = fast_policy();
        let mut session = StarSession::new();

        let result = session.submit(&client, &policy, "   ").await;
        assert_eq!(result, Err(WizardError::EmptyInput));
        assert_eq!(client.calls.get(), 0);
    }

    #[tokio::test]
    async fn guidance_prompt_names_the_stage_and_question() {
        let client = ScriptedClient::always_ok("tip");
        let policy = fast_policy();
        let mut session = StarSession::new();

        session
            .submit(&client, &policy, "Tell me about a failure")
            .await
            .unwrap();

        let prompts = client.prompts.borrow();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Current stage: Situation"));
        assert!(prompts[0].contains("\"Tell me about a failure\""));
    }

    #[tokio::test]
    async fn completed_outcome_carries_composite() {
        let client = ScriptedClient::always_ok("tip");
        let policy = fast_policy();
        let mut session = StarSession::new();

        for input in ["q", "A", "B", "C"] {
            session.submit(&client, &policy, input).await.unwrap();
        }
        let outcome = session.submit(&client, &policy, "D").await.unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Completed {
                composite: "**S**ituation: A\n**T**ask: B\n**A**ction: C\n**R**esult: D".into(),
            }
        );
    }
}
