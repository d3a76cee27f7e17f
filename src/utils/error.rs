use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Dynamic link provider returned {status}: {message}")]
    ProviderError { status: u16, message: String },

    #[error("Malformed provider response: {message}")]
    MalformedResponse { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid {field}: {message}")]
    ValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Provider,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LinkError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LinkError::ApiError(_) => ErrorCategory::Network,
            LinkError::ProviderError { .. } | LinkError::MalformedResponse { .. } => {
                ErrorCategory::Provider
            }
            LinkError::ValidationError { .. } => ErrorCategory::Input,
            LinkError::ConfigError { .. }
            | LinkError::MissingConfigError { .. }
            | LinkError::InvalidConfigValueError { .. }
            | LinkError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            LinkError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 供應商失敗會退回備用連結
            ErrorCategory::Network | ErrorCategory::Provider => ErrorSeverity::Low,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 是否可以以備用連結繼續
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Network | ErrorCategory::Provider
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LinkError::ApiError(e) if e.is_timeout() => {
                "Increase the request timeout or check connectivity to the dynamic link provider"
            }
            LinkError::ApiError(_) => "Check network connectivity to the dynamic link provider",
            LinkError::ProviderError { status, .. } if *status == 401 || *status == 403 => {
                "Verify the FIREBASE_API_KEY and that the Dynamic Links API is enabled"
            }
            LinkError::ProviderError { .. } => {
                "Verify the domain URI prefix and Android package name registered with the provider"
            }
            LinkError::MalformedResponse { .. } => {
                "Check the provider endpoint; the response did not contain a short link"
            }
            LinkError::ValidationError { .. } => "Send a non-empty invite code",
            LinkError::MissingConfigError { .. } => "Set the missing environment variable or config key",
            LinkError::ConfigError { .. }
            | LinkError::InvalidConfigValueError { .. }
            | LinkError::ConfigValidationError { .. } => "Fix the configuration and try again",
            LinkError::IoError(_) => "Check that the config file exists and is readable",
        }
    }

    /// 回傳給呼叫端的訊息：供應商失敗時只保留供應商本身的說明，不加前綴
    pub fn provider_message(&self) -> String {
        match self {
            LinkError::ProviderError { message, .. } | LinkError::MalformedResponse { message } => {
                message.clone()
            }
            LinkError::ApiError(e) => e.to_string(),
            other => other.to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the link service: {}", self),
            ErrorCategory::Provider => format!("The link service rejected the request: {}", self),
            ErrorCategory::Input => format!("Invalid request: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, LinkError>;
