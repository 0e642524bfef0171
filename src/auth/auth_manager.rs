use crate::auth::SessionStore;
use crate::errors::{AuthenticationError, GatewayError, GatewayResult};
use async_trait::async_trait;
use http::HeaderMap;
use std::sync::Arc;

/// Trait for attaching authentication to outbound requests
#[async_trait]
pub trait AuthManager: Send + Sync {
    /// Applies authentication headers to the request. Fails before any
    /// network I/O when no valid session exists.
    async fn apply_auth(&self, headers: &mut HeaderMap) -> GatewayResult<()>;
}

pub struct GatewayAuthManager {
    store: Arc<dyn SessionStore>,
}

impl GatewayAuthManager {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AuthManager for GatewayAuthManager {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> GatewayResult<()> {
        let session = self.store.current_session().await.ok_or_else(|| {
            GatewayError::Authentication(AuthenticationError::MissingSession(
                "sign in required before contacting the gateway".to_string(),
            ))
        })?;

        if !session.is_valid() {
            return Err(GatewayError::Authentication(
                AuthenticationError::InvalidToken("access token is empty".to_string()),
            ));
        }

        let auth_value = format!("Bearer {}", session.access_token());
        headers.insert(
            http::header::AUTHORIZATION,
            auth_value.parse().map_err(|_| {
                GatewayError::Authentication(AuthenticationError::InvalidToken(
                    "access token is not a valid header value".to_string(),
                ))
            })?,
        );

        Ok(())
    }
}
