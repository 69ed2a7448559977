use thiserror::Error;

/// Unified error type for isis-version operations
#[derive(Error, Debug)]
pub enum IsisVersionError {
    #[error("Malformed version text: {0}")]
    Malformed(String),

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in isis-version
pub type Result<T> = std::result::Result<T, IsisVersionError>;

impl IsisVersionError {
    /// Create a malformed-version error with context
    pub fn malformed(msg: impl Into<String>) -> Self {
        IsisVersionError::Malformed(msg.into())
    }

    /// Create a missing-configuration error with context
    pub fn missing_configuration(msg: impl Into<String>) -> Self {
        IsisVersionError::MissingConfiguration(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        IsisVersionError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IsisVersionError::malformed("no triple found");
        assert_eq!(err.to_string(), "Malformed version text: no triple found");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: IsisVersionError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(IsisVersionError::malformed("test")
            .to_string()
            .contains("Malformed"));
        assert!(IsisVersionError::missing_configuration("test")
            .to_string()
            .contains("Missing configuration"));
        assert!(IsisVersionError::config("test")
            .to_string()
            .contains("Configuration"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (IsisVersionError::malformed("x"), "Malformed version text"),
            (
                IsisVersionError::missing_configuration("x"),
                "Missing configuration",
            ),
            (IsisVersionError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_errors = vec![
            std::io::Error::new(std::io::ErrorKind::NotFound, "Not found"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied"),
        ];

        for io_err in io_errors {
            let err: IsisVersionError = io_err.into();
            assert!(err.to_string().contains("I/O error"));
        }
    }
}
