use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for apptemplate operations
#[derive(Error, Debug)]
pub enum AppTemplateError {
    #[error("Invalid segment value '{value}': {reason}")]
    SegmentValueInvalid { value: String, reason: String },

    #[error("Segment kind '{value}' is a deprecated synonym, use '{expected}' instead")]
    SegmentKindSynonym {
        value: String,
        expected: &'static str,
    },

    #[error("Unknown segment kind '{value}'")]
    SegmentKindUnknown { value: String },

    #[error("Value '{value}' for field '{field}' is not a non-negative integer: {reason}")]
    PositiveIntegerValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid integer literal: {0}")]
    IntLiteral(#[from] std::num::ParseIntError),

    #[error("Cannot parse version '{value}': too many components")]
    TooManyComponents { value: String },

    #[error("Unknown environment '{requested}', available: {available:?}")]
    UnknownEnvironment {
        requested: String,
        available: Vec<String>,
    },

    #[error("Bad file extension for {path:?}: expected '.{expected}'")]
    BadFileExtension {
        path: PathBuf,
        expected: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parsing failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in apptemplate
pub type Result<T> = std::result::Result<T, AppTemplateError>;

impl AppTemplateError {
    /// Create a segment value error with context
    pub fn segment_value(value: impl Into<String>, reason: impl Into<String>) -> Self {
        AppTemplateError::SegmentValueInvalid {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a non-negative-integer violation for a named field
    pub fn positive_integer(
        field: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        AppTemplateError::PositiveIntegerValue {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AppTemplateError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppTemplateError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AppTemplateError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_positive_integer_names_field() {
        let err = AppTemplateError::positive_integer("major", -1, "Negative");
        let msg = err.to_string();
        assert!(msg.contains("major"));
        assert!(msg.contains("-1"));
        assert!(msg.contains("Negative"));
    }

    #[test]
    fn test_synonym_error_cites_expected() {
        let err = AppTemplateError::SegmentKindSynonym {
            value: "a".to_string(),
            expected: "alpha",
        };
        assert!(err.to_string().contains("alpha"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (AppTemplateError::config("x"), "Configuration error"),
            (
                AppTemplateError::segment_value("x", "y"),
                "Invalid segment value",
            ),
            (
                AppTemplateError::SegmentKindUnknown {
                    value: "x".to_string(),
                },
                "Unknown segment kind",
            ),
            (
                AppTemplateError::TooManyComponents {
                    value: "1.2.3.4.5".to_string(),
                },
                "Cannot parse version",
            ),
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
}
