use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Playlist parse error: {0}")]
    PlaylistParseError(#[from] toml::de::Error),

    #[error("Unknown lesson: {name}")]
    UnknownLessonError { name: String },

    #[error("Unknown level: {value}")]
    UnknownLevelError { value: String },

    #[error("Configuration field '{field}' is missing")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Lesson '{name}' failed: {message}")]
    LessonError { name: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Lesson,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl JournalError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            JournalError::UnknownLessonError { .. }
            | JournalError::UnknownLevelError { .. }
            | JournalError::MissingConfigError { .. }
            | JournalError::InvalidConfigValueError { .. }
            | JournalError::PlaylistParseError(_) => ErrorCategory::Config,
            JournalError::LessonError { .. } | JournalError::RegexError(_) => {
                ErrorCategory::Lesson
            }
            JournalError::IoError(_) | JournalError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            JournalError::UnknownLessonError { .. }
            | JournalError::UnknownLevelError { .. }
            | JournalError::MissingConfigError { .. }
            | JournalError::InvalidConfigValueError { .. }
            | JournalError::PlaylistParseError(_) => ErrorSeverity::Medium,
            JournalError::LessonError { .. } | JournalError::RegexError(_) => ErrorSeverity::High,
            JournalError::IoError(_) | JournalError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            JournalError::UnknownLessonError { name } => {
                format!("No lesson named '{}' in the journal", name)
            }
            JournalError::UnknownLevelError { value } => format!(
                "'{}' is not a level (expected basics, intermediate or advanced)",
                value
            ),
            JournalError::MissingConfigError { field } => {
                format!("The playlist is missing the '{}' field", field)
            }
            JournalError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad value for '{}': {}", field, reason)
            }
            JournalError::PlaylistParseError(e) => format!("The playlist is not valid TOML: {}", e),
            JournalError::LessonError { name, .. } => {
                format!("Lesson '{}' did not finish cleanly", name)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Config => {
                "Run with --list to see the lesson names and levels the journal knows".to_string()
            }
            ErrorCategory::Lesson => {
                "Re-run the single lesson with --verbose to see its trace output".to_string()
            }
            ErrorCategory::System => {
                "Check file permissions and free disk space, then retry".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, JournalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_medium_severity() {
        let err = JournalError::UnknownLessonError {
            name: "decorators".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Config);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("decorators"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = JournalError::from(io);
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
