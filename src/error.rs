use thiserror::Error;

use crate::store::StoreError;

/// Errors that abort a command. Remote generative failures never land
/// here — they surface as transient notices and the user retries.
#[derive(Debug, Error)]
pub enum EnsaioError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = EnsaioError::Config("GEMINI_API_KEY is not set".into());
        assert_eq!(err.to_string(), "Config error: GEMINI_API_KEY is not set");
    }

    #[test]
    fn store_error_converts() {
        let err: EnsaioError = StoreError::ApiError {
            status: 500,
            message: "boom".into(),
        }
        .into();
        assert!(err.to_string().contains("status 500"));
    }
}
