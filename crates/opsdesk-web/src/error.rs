/// Error types for the web interface
///
/// None of these reach the user: callers log them and fall back to the
/// unauthenticated view or carry on with the remaining steps.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WebError>;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WebError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WebError::storage("localStorage unavailable");
        assert_eq!(err.to_string(), "Storage error: localStorage unavailable");

        let err = WebError::config("bad json");
        assert_eq!(err.to_string(), "Configuration error: bad json");
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: WebError = parse.unwrap_err().into();
        assert!(matches!(err, WebError::Serialization(_)));
    }
}
