use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

/// An authenticated user session, as handed out by the session-management
/// collaborator. Holds the bearer credential used for gateway calls.
#[derive(Clone)]
pub struct Session {
    access_token: SecretString,
    user_id: Option<String>,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: SecretString::new(access_token.into()),
            user_id: None,
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        !self.access_token.expose_secret().is_empty()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Source of the current session. Implemented outside this crate by whatever
/// owns sign-in state; `None` means the user is signed out.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn current_session(&self) -> Option<Session>;
}

/// Fixed session store, for tools and tests.
pub struct StaticSessionStore {
    session: Option<Session>,
}

impl StaticSessionStore {
    pub fn signed_in(access_token: impl Into<String>) -> Self {
        Self {
            session: Some(Session::new(access_token)),
        }
    }

    pub fn signed_out() -> Self {
        Self { session: None }
    }
}

#[async_trait]
impl SessionStore for StaticSessionStore {
    async fn current_session(&self) -> Option<Session> {
        self.session.clone()
    }
}

/// Reads the access token from an environment variable on every call, so a
/// token refreshed by an outer process is picked up without a restart.
pub struct EnvSessionStore {
    var_name: String,
}

impl EnvSessionStore {
    pub const DEFAULT_VAR: &'static str = "SOLSARCH_ACCESS_TOKEN";

    pub fn new() -> Self {
        Self {
            var_name: Self::DEFAULT_VAR.to_string(),
        }
    }

    pub fn from_var(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
        }
    }
}

impl Default for EnvSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for EnvSessionStore {
    async fn current_session(&self) -> Option<Session> {
        match std::env::var(&self.var_name) {
            Ok(token) if !token.is_empty() => Some(Session::new(token)),
            _ => None,
        }
    }
}
