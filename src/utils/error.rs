use thiserror::Error;

#[derive(Error, Debug)]
pub enum SegmentError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    #[error("No valid number after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },

    #[error("Segment endpoint must be finite, got {value}")]
    NonFiniteEndpoint { value: f64 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SegmentError {
    /// Short message suitable for printing to the user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SegmentError::IoError(e) => format!("Could not read or write the console: {}", e),
            SegmentError::InputClosed { .. } => {
                "Input ended before all four coordinates were entered".to_string()
            }
            SegmentError::ConfigError { .. } | SegmentError::InvalidConfigValueError { .. } => {
                format!("Settings are invalid: {}", self)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SegmentError::IoError(_) => "Check that stdin and stdout are attached",
            SegmentError::SerializationError(_) => "Retry with --output text",
            SegmentError::InputClosed { .. } => "Provide four numbers, e.g. `echo 0 10 5 15 |`",
            SegmentError::AttemptsExhausted { .. } => {
                "Enter a decimal number such as 2.5, or raise max_attempts"
            }
            SegmentError::NonFiniteEndpoint { .. } => "Use finite numbers for endpoints",
            SegmentError::ConfigError { .. } => "Make sure the settings file exists and is valid TOML",
            SegmentError::InvalidConfigValueError { .. } => "Fix the reported field and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, SegmentError>;
