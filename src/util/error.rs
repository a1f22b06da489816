//! Error types for findit.

use thiserror::Error;

/// Result alias for findit operations.
pub type FinditResult<T> = std::result::Result<T, FinditError>;

/// Errors that can occur when preparing images or aggregating points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinditError {
    /// The image could not be read or decoded.
    #[error("failed to load image {path}: {reason}")]
    ImageIo { path: String, reason: String },
    /// An argument is outside the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The image has no pixels to operate on.
    #[error("empty image: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::FinditError;

    #[test]
    fn messages_include_context() {
        let err = FinditError::ImageIo {
            path: "a.png".to_string(),
            reason: "missing".to_string(),
        };
        assert_eq!(err.to_string(), "failed to load image a.png: missing");

        let err = FinditError::InvalidArgument("scale must be positive");
        assert_eq!(err.to_string(), "invalid argument: scale must be positive");

        let err = FinditError::EmptyImage {
            width: 0,
            height: 3,
        };
        assert_eq!(err.to_string(), "empty image: 0x3");
    }
}
