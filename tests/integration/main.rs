//! Integration tests using WireMock
//!
//! Exercise the full client stack (builder, auth manager, reqwest transport,
//! frame reader, delta stream) against a real HTTP server.

mod streaming;

use solsarch_gateway::auth::StaticSessionStore;
use solsarch_gateway::resilience::RetryPolicy;
use solsarch_gateway::{GatewayClient, GatewayClientBuilder, GatewayConfig};
use std::sync::Arc;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-access-token";

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn config_for(server: &MockServer) -> GatewayConfig {
    GatewayConfig::new(server.uri().parse().expect("mock server URI"))
}

/// Client with a signed-in session and retries disabled.
pub fn client_for(server: &MockServer) -> Arc<dyn GatewayClient> {
    GatewayClientBuilder::new()
        .with_config(config_for(server))
        .with_session_store(Arc::new(StaticSessionStore::signed_in(TEST_TOKEN)))
        .with_retry_policy(RetryPolicy::none())
        .build()
        .expect("build client")
}

/// Client with no session at all.
pub fn signed_out_client_for(server: &MockServer) -> Arc<dyn GatewayClient> {
    GatewayClientBuilder::new()
        .with_config(config_for(server))
        .with_session_store(Arc::new(StaticSessionStore::signed_out()))
        .with_retry_policy(RetryPolicy::none())
        .build()
        .expect("build client")
}
