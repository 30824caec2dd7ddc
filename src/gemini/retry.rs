use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use super::client::TextGenerator;
use super::error::GeminiError;
use super::types::{GenerateRequest, GenerateResponse};

/// Configuration for retry behavior. Immutable per call.
///
/// Only the rate-limit signal is treated as transient; every other
/// failure propagates on the first occurrence. No jitter, no cap on
/// the delay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt.
    pub max_retries: u32,
    /// Base delay in milliseconds before the first retry.
    pub base_delay_ms: u64,
    /// Multiplier applied to the delay on each subsequent retry.
    pub backoff_multiplier: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 1000,
            backoff_multiplier: 2,
        }
    }
}

impl RetryPolicy {
    /// Calculate the delay for a given retry attempt.
    /// delay = base_delay_ms * backoff_multiplier^(attempt - 1)
    pub fn delay_for_attempt(&self, attempt: u32) -> u64 {
        self.base_delay_ms * self.backoff_multiplier.pow(attempt.saturating_sub(1))
    }
}

/// Perform a generate-content call with a bounded retry budget.
///
/// On a rate-limit error the call waits the current backoff delay and
/// retries; once the budget is exhausted it fails with a terminal
/// [`GeminiError::ApiError`] carrying status 429. Any other error
/// propagates immediately. Implemented as an explicit counted loop so
/// stack use stays bounded regardless of the budget.
pub async fn generate_with_retry(
    client: &impl TextGenerator,
    model: &str,
    req: &GenerateRequest,
    policy: &RetryPolicy,
) -> Result<GenerateResponse, GeminiError> {
    let mut attempt: u32 = 0;
    loop {
        match client.generate(model, req).await {
            Ok(response) => return Ok(response),
            Err(GeminiError::RateLimited { .. }) if attempt < policy.max_retries => {
                attempt += 1;
                let delay_ms = policy.delay_for_attempt(attempt);
                sleep(Duration::from_millis(delay_ms)).await;
            }
            Err(GeminiError::RateLimited { .. }) => {
                return Err(GeminiError::ApiError {
                    status: 429,
                    message: format!("rate limit budget exhausted after {} retries", attempt),
                });
            }
            Err(e) => return Err(e),
        }
    }
}
