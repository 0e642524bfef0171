use crate::auth::{AuthManager, EnvSessionStore, GatewayAuthManager, SessionStore};
use crate::client::{GatewayClient, GatewayClientImpl, GatewayConfig};
use crate::errors::{ConfigurationError, GatewayError, GatewayResult};
use crate::resilience::RetryPolicy;
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;

pub struct GatewayClientBuilder {
    config: Option<GatewayConfig>,
    session_store: Option<Arc<dyn SessionStore>>,
    transport: Option<Arc<dyn HttpTransport>>,
    retry: Option<RetryPolicy>,
}

impl GatewayClientBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            session_store: None,
            transport: None,
            retry: None,
        }
    }

    pub fn with_config(mut self, config: GatewayConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_session_store(mut self, session_store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(session_store);
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn build(self) -> GatewayResult<Arc<dyn GatewayClient>> {
        let config = self.config.ok_or_else(|| {
            GatewayError::Configuration(ConfigurationError::MissingConfiguration(
                "gateway configuration must be provided".to_string(),
            ))
        })?;
        config.validate()?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&config)?),
        };

        let session_store = self
            .session_store
            .unwrap_or_else(|| Arc::new(EnvSessionStore::new()));
        let auth_manager: Arc<dyn AuthManager> =
            Arc::new(GatewayAuthManager::new(session_store));

        let retry = self.retry.unwrap_or_default();

        Ok(Arc::new(GatewayClientImpl::new(
            config,
            transport,
            auth_manager,
            retry,
        )))
    }
}

impl Default for GatewayClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
