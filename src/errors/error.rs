use crate::errors::categories::{
    AuthenticationError, ConfigurationError, NetworkError, RateLimitError, ServerError,
    ValidationError,
};
use thiserror::Error;

pub type GatewayResult<T> = Result<T, GatewayError>;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Rate limit error: {0}")]
    RateLimit(#[from] RateLimitError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    #[error("Request error: {status_code} - {message}")]
    Request {
        status_code: u16,
        message: String,
        error_type: Option<String>,
        error_code: Option<String>,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Timeout error: operation timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl GatewayError {
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GatewayError::RateLimit(_)
                | GatewayError::Network(_)
                | GatewayError::Server(ServerError::ServiceUnavailable(_))
                | GatewayError::Server(ServerError::InternalError(_))
                | GatewayError::Timeout { .. }
        )
    }

    pub fn is_authentication_error(&self) -> bool {
        matches!(self, GatewayError::Authentication(_))
    }

    pub fn is_rate_limit_error(&self) -> bool {
        matches!(self, GatewayError::RateLimit(_))
    }

    /// A deliberate abort is not a failure; callers must not surface it.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GatewayError::Cancelled)
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            GatewayError::Request { status_code, .. } => Some(*status_code),
            GatewayError::Authentication(_) => Some(401),
            GatewayError::RateLimit(_) => Some(429),
            GatewayError::Server(ServerError::InternalError(_)) => Some(500),
            GatewayError::Server(ServerError::ServiceUnavailable(_)) => Some(503),
            _ => None,
        }
    }

    /// Short text for the UI side-channel. Expected failure classes get an
    /// actionable message; everything else collapses to a generic one.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Authentication(AuthenticationError::MissingSession(_)) => {
                "Please sign in to use the architecture assistant.".to_string()
            }
            GatewayError::Authentication(_) => {
                "Your session has expired. Please sign in again.".to_string()
            }
            GatewayError::RateLimit(_) => {
                "You're sending requests too quickly. Please wait a moment and try again."
                    .to_string()
            }
            GatewayError::Network(_) | GatewayError::Timeout { .. } => {
                "Could not reach the generation service. Check your connection and try again."
                    .to_string()
            }
            GatewayError::Server(_) => {
                "The generation service is temporarily unavailable. Please try again.".to_string()
            }
            GatewayError::Request { message, .. } if !message.is_empty() => message.clone(),
            _ => "Something went wrong while generating a response.".to_string(),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout { timeout_ms: 60000 }
        } else if err.is_connect() {
            GatewayError::Network(NetworkError::ConnectionFailed(err.to_string()))
        } else {
            GatewayError::Network(NetworkError::RequestFailed(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            GatewayError::Deserialization(err.to_string())
        } else {
            GatewayError::Serialization(err.to_string())
        }
    }
}

impl From<url::ParseError> for GatewayError {
    fn from(err: url::ParseError) -> Self {
        GatewayError::Configuration(ConfigurationError::InvalidBaseUrl(err.to_string()))
    }
}
