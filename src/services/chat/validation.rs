use crate::errors::{GatewayError, GatewayResult, ValidationError};
use crate::services::chat::ChatRequest;

pub struct ChatRequestValidator;

impl ChatRequestValidator {
    pub fn validate(request: &ChatRequest) -> GatewayResult<()> {
        if request.messages.is_empty() {
            return Err(GatewayError::Validation(
                ValidationError::MissingRequiredField("messages".to_string()),
            ));
        }

        if request.messages.iter().any(|m| m.content.trim().is_empty()) {
            return Err(GatewayError::Validation(ValidationError::InvalidMessages(
                "message content must not be empty".to_string(),
            )));
        }

        Ok(())
    }
}
