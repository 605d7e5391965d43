//! Error types for mediaman.

use thiserror::Error;

/// Common error type for mediaman.
#[derive(Error, Debug)]
pub enum MediaError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Storage backend error.
    #[error("storage error: {0}")]
    Storage(String),

    /// Image decode/encode error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Validation error for caller input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for mediaman operations.
pub type Result<T> = std::result::Result<T, MediaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = MediaError::NotFound("file images/photo.jpg".to_string());
        assert_eq!(err.to_string(), "file images/photo.jpg not found");
    }

    #[test]
    fn test_config_error_display() {
        let err = MediaError::Config("no icon mapped for type 'video'".to_string());
        assert_eq!(
            err.to_string(),
            "configuration error: no icon mapped for type 'video'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: MediaError = io_err.into();
        assert!(matches!(err, MediaError::Io(_)));
    }
}
