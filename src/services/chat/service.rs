use crate::auth::AuthManager;
use crate::errors::GatewayResult;
use crate::resilience::RetryPolicy;
use crate::services::chat::{
    ChatRequest, ChatRequestValidator, ChatResponse, ChatStream,
};
use crate::transport::{HttpTransport, ResponseParser};
use async_trait::async_trait;
use http::HeaderMap;
use std::sync::Arc;

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Single-shot generation: the whole reply in one response body.
    async fn create(&self, request: ChatRequest) -> GatewayResult<ChatResponse>;

    /// Streaming generation: deltas as the gateway produces them.
    async fn create_stream(&self, request: ChatRequest) -> GatewayResult<ChatStream>;
}

pub struct ChatServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    retry: RetryPolicy,
}

impl ChatServiceImpl {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            transport,
            auth_manager,
            retry,
        }
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    async fn create(&self, mut request: ChatRequest) -> GatewayResult<ChatResponse> {
        ChatRequestValidator::validate(&request)?;
        request.stream = false;

        let mut headers = HeaderMap::new();
        self.auth_manager.apply_auth(&mut headers).await?;

        let body = serde_json::to_value(&request)?;
        let bytes = self
            .retry
            .run(|| {
                self.transport
                    .post_json(CHAT_COMPLETIONS_PATH, body.clone(), headers.clone())
            })
            .await?;

        ResponseParser::parse_json(&bytes)
    }

    async fn create_stream(&self, mut request: ChatRequest) -> GatewayResult<ChatStream> {
        ChatRequestValidator::validate(&request)?;
        request.stream = true;

        let mut headers = HeaderMap::new();
        self.auth_manager.apply_auth(&mut headers).await?;

        // Streaming calls are never retried; a reconnect would replay deltas.
        let body = serde_json::to_value(&request)?;
        let stream = self
            .transport
            .post_stream(CHAT_COMPLETIONS_PATH, body, headers)
            .await?;

        Ok(ChatStream::new(stream))
    }
}
