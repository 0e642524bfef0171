use crate::errors::{GatewayError, GatewayResult};
use serde::de::DeserializeOwned;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse_json<T: DeserializeOwned>(data: &[u8]) -> GatewayResult<T> {
        serde_json::from_slice(data).map_err(|e| {
            GatewayError::Deserialization(format!(
                "Failed to deserialize response: {}. Body: {}",
                e,
                String::from_utf8_lossy(data)
            ))
        })
    }
}
