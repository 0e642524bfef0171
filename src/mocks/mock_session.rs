//! Mock session store with call counting

use crate::auth::{Session, SessionStore};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone)]
pub struct MockSessionStore {
    session: Option<Session>,
    calls: Arc<AtomicUsize>,
}

impl MockSessionStore {
    pub fn signed_in(access_token: impl Into<String>) -> Self {
        Self {
            session: Some(Session::new(access_token)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            session: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times the session was looked up.
    pub fn lookup_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn current_session(&self) -> Option<Session> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.session.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_count() {
        let store = MockSessionStore::signed_in("tok");
        assert_eq!(store.lookup_count(), 0);
        store.current_session().await;
        store.current_session().await;
        assert_eq!(store.lookup_count(), 2);
    }
}
