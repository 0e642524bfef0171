//! SolsArch LLM gateway client.
//!
//! Streams chat completions from the SolsArch gateway over Server-Sent
//! Events, decoding incremental `choices[0].delta.content` fragments as they
//! arrive (including frames split across transport chunk boundaries) and
//! exposing a per-call handle with cancellation.
//!
//! ```no_run
//! use solsarch_gateway::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() -> GatewayResult<()> {
//! let config = GatewayConfig::from_env()?;
//! let client = GatewayClientBuilder::new().with_config(config).build()?;
//!
//! let mut stream = client
//!     .chat()
//!     .create_stream(ChatRequest::streaming(vec![ChatMessage::user(
//!         "Design a multi-region API backend",
//!     )]))
//!     .await?;
//!
//! use futures::StreamExt;
//! while let Some(delta) = stream.next().await {
//!     print!("{}", delta?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod errors;
pub mod resilience;
pub mod services;
pub mod transport;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mocks;

pub use client::{GatewayClient, GatewayClientBuilder, GatewayClientImpl, GatewayConfig};
pub use errors::{GatewayError, GatewayResult};

pub use services::chat::{
    ChatMessage, ChatRequest, ChatResponse, ChatService, ChatStream, Role, StreamCallbacks,
    StreamHandle, StreamSession,
};

pub mod prelude {
    pub use crate::auth::{Session, SessionStore, StaticSessionStore};
    pub use crate::client::{GatewayClient, GatewayClientBuilder, GatewayConfig};
    pub use crate::errors::{GatewayError, GatewayResult};
    pub use crate::services::chat::{
        ChatMessage, ChatRequest, ChatService, StreamCallbacks, StreamHandle, StreamSession,
    };
}
