//! Opaque session tokens issued by the admin login endpoint.
//!
//! Tokens are random UUIDs held in memory with an absolute expiry. There is
//! no refresh flow; clients log in again once a token lapses.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use imagiq_core::auth::{AdminUser, LoginResponse};
use imagiq_core::types::Timestamp;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct IssuedSession {
    user: AdminUser,
    expires_at: Timestamp,
}

#[derive(Debug)]
pub struct SessionRegistry {
    ttl: Duration,
    sessions: RwLock<HashMap<String, IssuedSession>>,
}

impl SessionRegistry {
    pub fn new(ttl_mins: i64) -> Self {
        Self {
            ttl: Duration::minutes(ttl_mins),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Issue a new token for `user`, dropping every lapsed session first.
    pub async fn issue(&self, user: AdminUser) -> LoginResponse {
        let token = Uuid::new_v4().to_string();
        let now = Utc::now();
        let expires_at = now + self.ttl;

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at > now);
        if sessions.len() < before {
            tracing::debug!(evicted = before - sessions.len(), "Swept expired sessions");
        }
        sessions.insert(
            token.clone(),
            IssuedSession {
                user: user.clone(),
                expires_at,
            },
        );
        drop(sessions);

        LoginResponse {
            token,
            user,
            expires_at,
        }
    }

    /// Resolve a token to its user. Expired tokens are evicted.
    pub async fn resolve(&self, token: &str) -> Option<AdminUser> {
        let now = Utc::now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(s) if s.expires_at > now => return Some(s.user.clone()),
                Some(_) => {}
                None => return None,
            }
        }
        self.sessions.write().await.remove(token);
        None
    }

    pub async fn revoke(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    /// Number of tokens currently held, lapsed or not.
    pub async fn held(&self) -> usize {
        self.sessions.read().await.len()
    }
}
