use crate::auth::AuthManager;
use crate::client::{GatewayClient, GatewayConfig};
use crate::resilience::RetryPolicy;
use crate::services::chat::{ChatService, ChatServiceImpl};
use crate::transport::HttpTransport;
use std::sync::Arc;

pub struct GatewayClientImpl {
    config: GatewayConfig,
    chat_service: Arc<ChatServiceImpl>,
}

impl GatewayClientImpl {
    pub fn new(
        config: GatewayConfig,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        retry: RetryPolicy,
    ) -> Self {
        let chat_service = Arc::new(ChatServiceImpl::new(transport, auth_manager, retry));

        Self {
            config,
            chat_service,
        }
    }
}

impl GatewayClient for GatewayClientImpl {
    fn chat(&self) -> Arc<dyn ChatService> {
        self.chat_service.clone()
    }

    fn config(&self) -> &GatewayConfig {
        &self.config
    }
}
