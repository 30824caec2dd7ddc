use thiserror::Error;

/// Errors from the remote document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store returned a non-success HTTP status.
    #[error("store error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("failed to parse store response: {0}")]
    ParseError(String),

    /// Underlying network failure.
    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = StoreError::ApiError {
            status: 403,
            message: "forbidden".into(),
        };
        assert_eq!(err.to_string(), "store error (status 403): forbidden");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StoreError>();
    }
}
