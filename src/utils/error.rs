use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Template error: {0}")]
    TemplateError(#[from] minijinja::Error),

    #[error("Route table error: {message}")]
    RouteTableError { message: String },

    #[error("Validation error in '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("A contact submission is already in flight")]
    SubmissionInFlight,

    #[error("Message relay rejected the submission: {message}")]
    RelayRejected { message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::RouteTableError { .. } => ErrorCategory::Configuration,
            SiteError::HttpError(_) | SiteError::RelayRejected { .. } => ErrorCategory::Network,
            SiteError::ValidationError { .. } | SiteError::SubmissionInFlight => {
                ErrorCategory::Input
            }
            SiteError::IoError(_)
            | SiteError::SerializationError(_)
            | SiteError::TemplateError(_)
            | SiteError::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SiteError::ValidationError { .. } | SiteError::SubmissionInFlight => ErrorSeverity::Low,
            SiteError::HttpError(_) | SiteError::RelayRejected { .. } => ErrorSeverity::Medium,
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::SerializationError(_) => ErrorSeverity::High,
            SiteError::RouteTableError { .. }
            | SiteError::TemplateError(_)
            | SiteError::IoError(_)
            | SiteError::ServerError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::ConfigValidationError { field, .. }
            | SiteError::InvalidConfigValueError { field, .. } => {
                format!("The configuration value '{}' is not valid", field)
            }
            SiteError::ValidationError { field, .. } => {
                format!("Please fill in the '{}' field", field)
            }
            SiteError::SubmissionInFlight => {
                "Your message is still being sent, please wait".to_string()
            }
            SiteError::HttpError(_) | SiteError::RelayRejected { .. } => {
                "The message relay could not be reached".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the site configuration file and CLI flags",
            ErrorCategory::Network => "Check network connectivity and the contact endpoint",
            ErrorCategory::Input => "Correct the submitted form fields and try again",
            ErrorCategory::System => "Check file permissions and that the listen address is free",
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
