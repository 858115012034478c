//! Explicit session context and token lifecycle.
//!
//! A [`SessionContext`] is created by login and handed to every
//! authenticated call. Nothing is stored globally; dropping the context is
//! logging out locally.

use chrono::Duration;
use imagiq_core::auth::{AdminUser, LoginResponse};
use imagiq_core::types::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub token: String,
    pub user: AdminUser,
    pub expires_at: Timestamp,
}

impl From<LoginResponse> for SessionContext {
    fn from(login: LoginResponse) -> Self {
        Self {
            token: login.token,
            user: login.user,
            expires_at: login.expires_at,
        }
    }
}

/// Decides whether a session may still be used.
///
/// Sessions are treated as expired `skew` early so a request never leaves
/// with a token that lapses in flight.
/// Upper bound on the expiry skew: one day.
pub const MAX_SKEW_SECS: i64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLifecycle {
    skew: Duration,
}

impl Default for TokenLifecycle {
    fn default() -> Self {
        Self::new(60)
    }
}

impl TokenLifecycle {
    /// `skew_secs` is clamped to `0..=MAX_SKEW_SECS`.
    pub fn new(skew_secs: i64) -> Self {
        Self {
            skew: Duration::seconds(skew_secs.clamp(0, MAX_SKEW_SECS)),
        }
    }

    /// A `now` too close to the end of the calendar range counts as expired.
    pub fn is_expired(&self, session: &SessionContext, now: Timestamp) -> bool {
        now.checked_add_signed(self.skew)
            .map_or(true, |deadline| deadline >= session.expires_at)
    }

    /// The session if it is still usable.
    pub fn check<'a>(
        &self,
        session: Option<&'a SessionContext>,
        now: Timestamp,
    ) -> Result<&'a SessionContext, ClientError> {
        let session = session.ok_or(ClientError::MissingSession)?;
        if self.is_expired(session, now) {
            tracing::warn!(
                user_id = %session.user.id,
                expires_at = %session.expires_at,
                "Session expired"
            );
            return Err(ClientError::SessionExpired);
        }
        Ok(session)
    }

    /// Time left before the session must be renewed, or zero.
    pub fn remaining(&self, session: &SessionContext, now: Timestamp) -> Duration {
        session
            .expires_at
            .checked_sub_signed(self.skew)
            .map_or(Duration::zero(), |deadline| (deadline - now).max(Duration::zero()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;

    use super::*;

    fn session(expires_at: Timestamp) -> SessionContext {
        SessionContext {
            token: "tok".into(),
            user: AdminUser {
                id: "admin-1".into(),
                email: "admin@imagiq.com".into(),
                name: "Admin".into(),
                role: "admin".into(),
            },
            expires_at,
        }
    }

    #[test]
    fn test_skew_expires_early() {
        let now = Utc::now();
        let lifecycle = TokenLifecycle::new(60);
        let s = session(now + Duration::seconds(30));
        assert!(lifecycle.is_expired(&s, now));
        assert_matches!(lifecycle.check(Some(&s), now), Err(ClientError::SessionExpired));

        let s = session(now + Duration::minutes(10));
        assert!(lifecycle.check(Some(&s), now).is_ok());
        assert_eq!(lifecycle.remaining(&s, now), Duration::minutes(9));
    }

    #[test]
    fn test_extreme_skew_and_clock_never_panic() {
        let lifecycle = TokenLifecycle::new(i64::MAX);
        let now = Utc::now();
        let s = session(now + Duration::days(2));
        assert!(!lifecycle.is_expired(&s, now));
        assert_eq!(lifecycle.remaining(&s, now), Duration::days(1));

        let end_of_time = chrono::DateTime::<Utc>::MAX_UTC;
        assert!(lifecycle.is_expired(&session(end_of_time), end_of_time));
        let start_of_time = chrono::DateTime::<Utc>::MIN_UTC;
        assert_eq!(
            lifecycle.remaining(&session(start_of_time), now),
            Duration::zero()
        );
    }

    #[test]
    fn test_missing_session() {
        let lifecycle = TokenLifecycle::default();
        assert_matches!(lifecycle.check(None, Utc::now()), Err(ClientError::MissingSession));
    }
}
