use thiserror::Error;

/// Local input problems. These never reach the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing operand")]
    MissingOperand,

    #[error("not a number")]
    NotANumber,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("HTTP {status}: {status_text}")]
    Remote { status: u16, status_text: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Remote,
    Transport,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::Validation(_) => ErrorCategory::Validation,
            ClientError::Remote { .. } => ErrorCategory::Remote,
            ClientError::Transport { .. } => ErrorCategory::Transport,
            ClientError::ConfigError { .. }
            | ClientError::InvalidConfigValueError { .. }
            | ClientError::IoError(_) => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Remote => ErrorSeverity::Medium,
            ErrorCategory::Transport => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// Text shown to the user in place of a result.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::Validation(ValidationError::MissingOperand) => {
                "Please enter both numbers".to_string()
            }
            ClientError::Validation(ValidationError::NotANumber) => {
                "Please enter valid numbers".to_string()
            }
            ClientError::Remote {
                status,
                status_text,
            } if status_text.is_empty() => format!("Failed to calculate: HTTP {}", status),
            ClientError::Remote {
                status,
                status_text,
            } => format!("Failed to calculate: HTTP {}: {}", status, status_text),
            ClientError::Transport { message } => format!(
                "Failed to calculate. Please check if the backend server is running: {}",
                message
            ),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Correct the input and try again",
            ErrorCategory::Remote => "Retry the calculation or check the backend logs",
            ErrorCategory::Transport => "Check that the backend is reachable at the configured base URL",
            ErrorCategory::Configuration => "Check the command line arguments and the config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
