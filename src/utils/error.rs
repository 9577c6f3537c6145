use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntervalError {
    #[error("Unknown time unit: {unit}")]
    InvalidUnit { unit: String },

    #[error("Wrong format, expected [-]h:m[:s]: '{input}'")]
    InvalidFormat { input: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Failed to parse '{input}': {reason}")]
    ParseError { input: String, reason: String },

    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
    Configuration,
    System,
}

impl IntervalError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::ParseError {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn overflow(operation: &str) -> Self {
        Self::Overflow {
            operation: operation.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidUnit { .. }
            | Self::InvalidFormat { .. }
            | Self::InvalidArgument { .. }
            | Self::ParseError { .. } => ErrorCategory::Input,
            Self::Overflow { .. } => ErrorCategory::Arithmetic,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidUnit { .. } => "Use one of: day, hour, minute, second",
            Self::InvalidFormat { .. } => "Write the value as [-]h:m[:s], e.g. -01:30 or 2:05:09",
            Self::InvalidArgument { .. } => {
                "Express years and months as days; they have no fixed length in seconds"
            }
            Self::ParseError { .. } => {
                "Use an interval spec like P1DT12H or a phrase like '1 day + 12 hours'"
            }
            Self::Overflow { .. } => "Keep the total within the signed 64-bit seconds range",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line flags"
            }
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::SerializationError(_) => "Retry without --json",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not read the time interval: {}", self),
            ErrorCategory::Arithmetic => format!("The time interval is out of range: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, IntervalError>;
