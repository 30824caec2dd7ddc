use std::time::Duration;

use reqwest::Client;

use super::error::GeminiError;
use super::types::{GenerateRequest, GenerateResponse};

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model used for every text generation call.
pub const TEXT_MODEL: &str = "gemini-2.5-flash-preview-05-20";
/// Model used for speech synthesis calls.
pub const TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Abstraction over the generate-content call so callers can be tested
/// with scripted mock clients.
pub trait TextGenerator {
    async fn generate(
        &self,
        model: &str,
        req: &GenerateRequest,
    ) -> Result<GenerateResponse, GeminiError>;
}

pub struct GeminiClient {
    api_key: String,
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, API_BASE_URL.to_string())
    }

    /// Create a client pointing at a custom base URL (useful for testing).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to build HTTP client");
        Self {
            api_key,
            client,
            base_url,
        }
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        model: &str,
        req: &GenerateRequest,
    ) -> Result<GenerateResponse, GeminiError> {
        let url = format!("{}/{}:generateContent", self.base_url, model);
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("content-type", "application/json")
            .json(req)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(|secs| secs * 1000)
                .unwrap_or(1000);
            return Err(GeminiError::RateLimited {
                retry_after_ms: retry_after,
            });
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(GeminiError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<GenerateResponse>(&body)
            .map_err(|e| GeminiError::ParseError(e.to_string()))
    }
}
