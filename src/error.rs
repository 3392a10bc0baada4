//! Error handling
//!
//! Nothing here reaches the caller of `log`/`check`/`scope`. These errors
//! travel between a `Sink` and the logger, which reports and drops them, or
//! come back from one-time setup (`global::init`, `Level::from_str`).

use thiserror::Error;

pub type ForensicResult<T> = Result<T, ForensicError>;

#[derive(Debug, Error)]
pub enum ForensicError {
    /// Writing an encoded record to the sink failed
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding a record failed
    #[error("Serialization Error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Unknown level label
    #[error("Parse Error: {0}")]
    Parse(String),

    /// The process-wide logger was configured after first use
    #[error("forensic logger already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ForensicError = io.into();
        assert!(matches!(err, ForensicError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = ForensicError::Parse("unknown level 'LOUD'".to_string());
        assert_eq!(err.to_string(), "Parse Error: unknown level 'LOUD'");
    }
}
