//! Session tokens and the session provider boundary.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::{distributions::Alphanumeric, thread_rng, Rng};
use tokio::sync::RwLock;

/// Generate a cryptographically secure random session token.
pub fn generate_session_token() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// An authenticated session.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Issue a fresh session for `username` with a new random token.
    #[must_use]
    pub fn issue(username: &str, ttl: Duration) -> Self {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::hours(1));
        Self {
            token: generate_session_token(),
            username: username.to_string(),
            expires_at: Utc::now() + ttl,
        }
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}

/// Lookup boundary for the external session provider.
///
/// `get` must return `None` for unknown and expired tokens; whether an
/// expired entry is pruned eagerly or lazily is the store's business.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, token: &str) -> Option<Session>;
    async fn insert(&self, session: Session);
    async fn remove(&self, token: &str);
}

/// In-process session store. Suitable for a single-instance deployment and
/// for tests; a multi-instance deployment would put a shared store behind
/// the same trait.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, token: &str) -> Option<Session> {
        let expired = {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(session) if !session.is_expired() => return Some(session.clone()),
                Some(_) => true,
                None => false,
            }
        };
        if expired {
            self.sessions.write().await.remove(token);
        }
        None
    }

    async fn insert(&self, session: Session) {
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session);
    }

    async fn remove(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }
}
