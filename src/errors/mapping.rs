use crate::errors::{
    AuthenticationError, GatewayError, RateLimitError, ServerError, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Error body shape emitted by the gateway on non-2xx responses.
#[derive(Debug, Deserialize, Serialize)]
pub struct GatewayErrorResponse {
    pub error: GatewayErrorDetail,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GatewayErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<String>,
}

pub struct ErrorMapper;

impl ErrorMapper {
    /// Maps an HTTP status code and parsed error response to a GatewayError
    pub fn map_status_code(
        status_code: u16,
        error_response: Option<GatewayErrorResponse>,
    ) -> GatewayError {
        let error_detail = error_response.map(|r| r.error);
        let message = error_detail
            .as_ref()
            .map(|d| d.message.clone())
            .unwrap_or_else(|| format!("HTTP error: {}", status_code));
        let error_type = error_detail.as_ref().and_then(|d| d.error_type.clone());
        let error_code = error_detail.as_ref().and_then(|d| d.code.clone());

        match status_code {
            400 => GatewayError::Validation(ValidationError::InvalidRequest(message)),
            401 => {
                if message.contains("expired") {
                    GatewayError::Authentication(AuthenticationError::ExpiredSession(message))
                } else {
                    GatewayError::Authentication(AuthenticationError::InvalidToken(message))
                }
            }
            403 => {
                if message.contains("permission") {
                    GatewayError::Authentication(AuthenticationError::InsufficientPermissions(
                        message,
                    ))
                } else {
                    GatewayError::Authentication(AuthenticationError::Unauthorized(message))
                }
            }
            429 => GatewayError::RateLimit(RateLimitError::RateLimitExceeded { message }),
            500 => GatewayError::Server(ServerError::InternalError(message)),
            502 => GatewayError::Server(ServerError::BadGateway(message)),
            503 => GatewayError::Server(ServerError::ServiceUnavailable(message)),
            504 => GatewayError::Server(ServerError::GatewayTimeout(message)),
            _ => GatewayError::Request {
                status_code,
                message,
                error_type,
                error_code,
            },
        }
    }

    /// Maps status code and headers together, upgrading 429 with retry-after
    pub fn map_status_with_headers(
        status_code: u16,
        headers: &http::HeaderMap,
        body: &str,
    ) -> GatewayError {
        let error_response: Option<GatewayErrorResponse> = serde_json::from_str(body).ok();

        let mut error = Self::map_status_code(status_code, error_response);

        if status_code == 429 {
            if let Some(retry_after) = Self::extract_retry_after(headers) {
                let msg = match &error {
                    GatewayError::RateLimit(RateLimitError::RateLimitExceeded { message }) => {
                        message.clone()
                    }
                    _ => "Rate limit exceeded".to_string(),
                };
                error = GatewayError::RateLimit(RateLimitError::TooManyRequests {
                    message: msg,
                    retry_after_secs: Some(retry_after),
                });
            }
        }

        error
    }

    /// Extracts the retry-after header value in seconds
    pub fn extract_retry_after(headers: &http::HeaderMap) -> Option<u64> {
        headers
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
    }

    pub fn parse_error_response(body: &str) -> Option<GatewayErrorResponse> {
        serde_json::from_str(body).ok()
    }
}
