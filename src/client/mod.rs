mod client_impl;
mod config;
mod factory;

pub use client_impl::GatewayClientImpl;
pub use config::GatewayConfig;
pub use factory::GatewayClientBuilder;

use crate::services::chat::ChatService;
use std::sync::Arc;

pub trait GatewayClient: Send + Sync {
    /// The chat service. Returned as an `Arc` so callers can hand it to a
    /// spawned streaming session.
    fn chat(&self) -> Arc<dyn ChatService>;

    fn config(&self) -> &GatewayConfig;
}
