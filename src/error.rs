//! Error types for examplan

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for examplan
#[derive(Debug, Error)]
pub enum ExamError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Exam name cannot be empty")]
    EmptyName,

    #[error("Exam not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Corrupt data file {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExamError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ExamError::Corrupt { .. } => 2,
            ExamError::InvalidFormat(_) | ExamError::EmptyName => 3,
            ExamError::NotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ExamError::InvalidFormat(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: DD.MM.YYYY\n\
                    Example: examplan add \"Linear Algebra\" 03.09.2025",
                    input
                )
            }
            ExamError::NotFound(id) => {
                format!(
                    "No exam with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'examplan list' to see exam ids",
                    id
                )
            }
            ExamError::Corrupt { path, .. } => {
                format!(
                    "{}\n\n\
                    The file was left untouched. Fix or move {} and try again.",
                    self,
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ExamError
pub type Result<T> = std::result::Result<T, ExamError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{not json").unwrap_err()
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExamError::InvalidFormat("x".to_string()).exit_code(), 3);
        assert_eq!(ExamError::EmptyName.exit_code(), 3);
        assert_eq!(ExamError::NotFound("x".to_string()).exit_code(), 4);
        assert_eq!(
            ExamError::Corrupt {
                path: PathBuf::from("exams.json"),
                source: json_error(),
            }
            .exit_code(),
            2
        );
        assert_eq!(ExamError::Config("x".to_string()).exit_code(), 1);
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(ExamError::Storage(io).exit_code(), 1);
    }

    #[test]
    fn test_invalid_format_suggestions() {
        let msg = ExamError::InvalidFormat("3.9.25".to_string()).display_with_suggestions();
        assert!(msg.contains("3.9.25"));
        assert!(msg.contains("DD.MM.YYYY"));
    }

    #[test]
    fn test_not_found_suggestions() {
        let msg = ExamError::NotFound("abc".to_string()).display_with_suggestions();
        assert!(msg.contains("'abc'"));
        assert!(msg.contains("examplan list"));
    }

    #[test]
    fn test_corrupt_names_path() {
        let err = ExamError::Corrupt {
            path: PathBuf::from("/tmp/exams.json"),
            source: json_error(),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.starts_with("Corrupt data file /tmp/exams.json"));
        assert!(msg.contains("left untouched"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = ExamError::Config("Refusing to clear".to_string());
        assert_eq!(
            err.display_with_suggestions(),
            "Configuration error: Refusing to clear"
        );
    }
}
