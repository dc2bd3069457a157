use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid birth date {born}: it is after the current date {today}")]
    InvalidBirthDate {
        born: chrono::NaiveDate,
        today: chrono::NaiveDate,
    },

    #[error("Failed to launch card command '{program}': {source}")]
    CardLaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Card command '{program}' exited with {status}: {stderr}")]
    CardGenerationFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Document not found: {}", path.display())]
    DocumentNotFound { path: PathBuf },

    #[error("Pattern for '{label}' not found in {}", path.display())]
    PatternNotFound { path: PathBuf, label: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Card,
    Document,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ProfileError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProfileError::IoError(_) => ErrorCategory::Io,
            ProfileError::ConfigError { .. }
            | ProfileError::InvalidConfigValueError { .. }
            | ProfileError::InvalidBirthDate { .. } => ErrorCategory::Config,
            ProfileError::CardLaunchFailed { .. } | ProfileError::CardGenerationFailed { .. } => {
                ErrorCategory::Card
            }
            ProfileError::DocumentNotFound { .. } | ProfileError::PatternNotFound { .. } => {
                ErrorCategory::Document
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Card => ErrorSeverity::Medium,
            ErrorCategory::Config | ErrorCategory::Document => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ProfileError::IoError(e) => format!("File system error: {}", e),
            ProfileError::ConfigError { message } => format!("Invalid configuration: {}", message),
            ProfileError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            ProfileError::InvalidBirthDate { born, .. } => {
                format!("Birth date {} lies in the future", born)
            }
            ProfileError::CardLaunchFailed { program, .. } => {
                format!("Could not start the card generator '{}'", program)
            }
            ProfileError::CardGenerationFailed { program, status, .. } => {
                format!("Card generator '{}' failed ({})", program, status)
            }
            ProfileError::DocumentNotFound { path } => {
                format!("README not found at {}", path.display())
            }
            ProfileError::PatternNotFound { label, .. } => {
                format!("No age marker for '{}' found in the README", label)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ProfileError::IoError(_) => "Check file permissions and available disk space",
            ProfileError::ConfigError { .. } | ProfileError::InvalidConfigValueError { .. } => {
                "Fix the flag or config file value and run again"
            }
            ProfileError::InvalidBirthDate { .. } => "Use a YYYY-MM-DD birth date in the past",
            ProfileError::CardLaunchFailed { .. } => {
                "Make sure the card program is installed and on PATH"
            }
            ProfileError::CardGenerationFailed { .. } => {
                "Inspect the card command output, or pass --on-card-failure continue"
            }
            ProfileError::DocumentNotFound { .. } => {
                "Run from the repository root or pass --readme <PATH>"
            }
            ProfileError::PatternNotFound { .. } => {
                "Add the marker `<name>** ([**<age>**]` to the README or fix --name-label"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_category() {
        let io = ProfileError::IoError(std::io::Error::other("disk"));
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_eq!(io.exit_code(), 3);

        let missing = ProfileError::DocumentNotFound {
            path: PathBuf::from("README.md"),
        };
        assert_eq!(missing.category(), ErrorCategory::Document);
        assert_eq!(missing.exit_code(), 1);

        let config = ProfileError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 1);
    }

    #[test]
    fn test_messages_mention_subject() {
        let err = ProfileError::PatternNotFound {
            path: PathBuf::from("README.md"),
            label: "Kiizuha Kanazawa".to_string(),
        };
        assert!(err.to_string().contains("README.md"));
        assert!(err.user_friendly_message().contains("Kiizuha Kanazawa"));
    }
}
