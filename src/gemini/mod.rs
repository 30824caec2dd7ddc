pub mod client;
pub mod error;
pub mod retry;
pub mod types;

pub use client::{GeminiClient, TextGenerator, TEXT_MODEL, TTS_MODEL};
pub use error::GeminiError;
pub use retry::{generate_with_retry, RetryPolicy};
pub use types::{GenerateRequest, GenerateResponse, GenerationConfig};
