//! Gateway error-body fixtures

use serde_json::json;

pub fn error_body(message: &str, error_type: &str, code: &str) -> serde_json::Value {
    json!({
        "error": {
            "message": message,
            "type": error_type,
            "code": code
        }
    })
}

pub fn rate_limit_error_body() -> serde_json::Value {
    error_body(
        "Rate limit exceeded. Try again shortly.",
        "rate_limit_error",
        "rate_limit_exceeded",
    )
}

pub fn auth_error_body() -> serde_json::Value {
    error_body("Invalid or expired token", "authentication_error", "invalid_token")
}
