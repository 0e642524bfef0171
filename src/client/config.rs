use crate::errors::{ConfigurationError, GatewayError, GatewayResult};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the SolsArch LLM gateway, e.g. `https://gateway.solsarch.io/v1`.
    pub base_url: Url,
    pub timeout: Duration,
    pub max_connections: usize,
    pub proxy: Option<Url>,
    pub user_agent: String,
}

impl GatewayConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: default_timeout(),
            max_connections: default_max_connections(),
            proxy: None,
            user_agent: default_user_agent(),
        }
    }

    /// Creates a GatewayConfig from environment variables
    ///
    /// Reads the following environment variables:
    /// - SOLSARCH_GATEWAY_URL (required)
    /// - SOLSARCH_TIMEOUT_SECS (optional, defaults to 120)
    /// - SOLSARCH_PROXY_URL (optional)
    pub fn from_env() -> GatewayResult<Self> {
        let base_url = std::env::var("SOLSARCH_GATEWAY_URL").map_err(|_| {
            GatewayError::Configuration(ConfigurationError::MissingBaseUrl(
                "SOLSARCH_GATEWAY_URL environment variable not found".to_string(),
            ))
        })?;

        let base_url = Url::parse(&base_url).map_err(|e| {
            GatewayError::Configuration(ConfigurationError::InvalidBaseUrl(format!(
                "Invalid SOLSARCH_GATEWAY_URL: {}",
                e
            )))
        })?;

        let mut config = Self::new(base_url);

        if let Ok(timeout) = std::env::var("SOLSARCH_TIMEOUT_SECS") {
            let secs: u64 = timeout.parse().map_err(|_| {
                GatewayError::Configuration(ConfigurationError::InvalidTimeout(format!(
                    "Invalid SOLSARCH_TIMEOUT_SECS: {}",
                    timeout
                )))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Ok(proxy) = std::env::var("SOLSARCH_PROXY_URL") {
            config.proxy = Some(Url::parse(&proxy)?);
        }

        Ok(config)
    }

    pub fn validate(&self) -> GatewayResult<()> {
        if self.timeout.as_secs() == 0 {
            return Err(GatewayError::Configuration(
                ConfigurationError::InvalidTimeout("Timeout must be greater than 0".to_string()),
            ));
        }

        if self.max_connections == 0 {
            return Err(GatewayError::Configuration(
                ConfigurationError::MissingConfiguration(
                    "max_connections must be greater than 0".to_string(),
                ),
            ));
        }

        Ok(())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_connections(mut self, max_connections: usize) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_proxy(mut self, proxy: Url) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn default_timeout() -> Duration {
    // Long generations stream for a while; the timeout covers the whole body.
    Duration::from_secs(120)
}

fn default_max_connections() -> usize {
    100
}

fn default_user_agent() -> String {
    format!("solsarch-gateway/{}", env!("CARGO_PKG_VERSION"))
}
