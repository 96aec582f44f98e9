//! Error taxonomy for the transform engine.
//!
//! Every failure is detected synchronously and returned as a normal value;
//! nothing in this crate panics across the dispatch boundary. Adapters that
//! need a platform error code can use [`ProcessingError::code`], which maps
//! each variant to a stable string.

/// Error returned by the codec, the transforms, and the dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    /// A required argument is missing or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested method name is not part of the operation set.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The input bytes are empty, truncated, or not a recognized image.
    #[error("decode failed: {0}")]
    Decode(String),

    /// A numeric parameter is out of range (e.g. sigma <= 0).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The result buffer cannot be serialized into the target format.
    #[error("encode failed: {0}")]
    Encode(String),
}

impl ProcessingError {
    /// Stable error-code string for platform adapters.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::UnsupportedOperation(_) => "UNSUPPORTED_OPERATION",
            Self::Decode(_) => "DECODE_ERROR",
            Self::InvalidParameter(_) => "INVALID_PARAMETER",
            Self::Encode(_) => "ENCODE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(
            ProcessingError::InvalidArgument("x".into()).code(),
            "INVALID_ARGUMENT"
        );
        assert_eq!(
            ProcessingError::UnsupportedOperation("x".into()).code(),
            "UNSUPPORTED_OPERATION"
        );
        assert_eq!(ProcessingError::Decode("x".into()).code(), "DECODE_ERROR");
        assert_eq!(
            ProcessingError::InvalidParameter("x".into()).code(),
            "INVALID_PARAMETER"
        );
        assert_eq!(ProcessingError::Encode("x".into()).code(), "ENCODE_ERROR");
    }

    #[test]
    fn test_display_includes_message() {
        let err = ProcessingError::InvalidParameter("sigma must be positive".into());
        assert_eq!(err.to_string(), "invalid parameter: sigma must be positive");
    }
}
