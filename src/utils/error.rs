use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {endpoint}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    #[error("Failed to decode time slots from {endpoint}: {source}")]
    DecodeError {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Notification delivery failed: {message}")]
    NotificationError { message: String },

    #[error("Cycle aborted at location '{location}': {source}")]
    CycleAborted {
        location: String,
        #[source]
        source: Box<WatchError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Notification,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl WatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WatchError::HttpError(_) | WatchError::UnexpectedStatus { .. } => ErrorCategory::Network,
            WatchError::DecodeError { .. } => ErrorCategory::Data,
            WatchError::IoError(_) => ErrorCategory::System,
            WatchError::ConfigValidationError { .. }
            | WatchError::InvalidConfigValueError { .. }
            | WatchError::MissingConfigError { .. } => ErrorCategory::Configuration,
            WatchError::NotificationError { .. } => ErrorCategory::Notification,
            WatchError::CycleAborted { source, .. } => source.category(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 通知失敗只影響單一訊息
            WatchError::NotificationError { .. } => ErrorSeverity::Low,
            WatchError::HttpError(_) | WatchError::UnexpectedStatus { .. } => {
                ErrorSeverity::Medium
            }
            WatchError::DecodeError { .. }
            | WatchError::ConfigValidationError { .. }
            | WatchError::InvalidConfigValueError { .. }
            | WatchError::MissingConfigError { .. } => ErrorSeverity::High,
            WatchError::IoError(_) => ErrorSeverity::Critical,
            WatchError::CycleAborted { source, .. } => source.severity(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check network connectivity and that the booking API is reachable"
            }
            ErrorCategory::Data => {
                "The booking API returned an unexpected payload; verify the poll_url of the location"
            }
            ErrorCategory::Configuration => {
                "Review the configuration file and command line flags"
            }
            ErrorCategory::Notification => {
                "Verify the SMS gateway endpoint and credentials"
            }
            ErrorCategory::System => "Check file permissions and available system resources",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            WatchError::HttpError(e) if e.is_timeout() => {
                "The booking service did not answer in time".to_string()
            }
            WatchError::HttpError(_) => "Could not reach the booking service".to_string(),
            WatchError::UnexpectedStatus { endpoint, status } => {
                format!("{} answered with HTTP {}", endpoint, status)
            }
            WatchError::DecodeError { endpoint, .. } => {
                format!("Could not read the availability list from {}", endpoint)
            }
            WatchError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
            WatchError::CycleAborted { location, source } => {
                format!("Polling stopped at {}: {}", location, source.user_friendly_message())
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WatchError>;
