use std::time::Duration;

use crate::error::ClientError;
use crate::session::MAX_SKEW_SECS;

const DEFAULT_API_URL: &str = "http://localhost:3001";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;
const DEFAULT_SESSION_SKEW_SECS: i64 = 60;
const MAX_POLL_INTERVAL_SECS: u64 = 86_400;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the remote API, without a trailing slash.
    pub api_url: String,
    /// Fixed cadence for polling subscriptions.
    pub poll_interval: Duration,
    /// Sessions are treated as expired this many seconds early.
    pub session_skew_secs: i64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            session_skew_secs: DEFAULT_SESSION_SKEW_SECS,
        }
    }
}

impl ClientConfig {
    /// Defaults with a different base URL.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: normalize_url(&api_url.into()),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                 |
    /// |-----------------------------|-------------------------|
    /// | `IMAGIQ_API_URL`            | `http://localhost:3001` |
    /// | `IMAGIQ_POLL_INTERVAL_SECS` | `30`                    |
    /// | `IMAGIQ_SESSION_SKEW_SECS`  | `60`                    |
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let api_url = lookup("IMAGIQ_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());
        let api_url = normalize_url(&api_url);
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "IMAGIQ_API_URL must be an http(s) URL, got '{api_url}'"
            )));
        }

        let poll_secs: u64 = match lookup("IMAGIQ_POLL_INTERVAL_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ClientError::Config(format!(
                    "IMAGIQ_POLL_INTERVAL_SECS must be a positive integer, got '{raw}'"
                ))
            })?,
            None => DEFAULT_POLL_INTERVAL_SECS,
        };
        if poll_secs == 0 || poll_secs > MAX_POLL_INTERVAL_SECS {
            return Err(ClientError::Config(format!(
                "IMAGIQ_POLL_INTERVAL_SECS must be between 1 and {MAX_POLL_INTERVAL_SECS}"
            )));
        }

        let session_skew_secs: i64 = match lookup("IMAGIQ_SESSION_SKEW_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ClientError::Config(format!(
                    "IMAGIQ_SESSION_SKEW_SECS must be an integer, got '{raw}'"
                ))
            })?,
            None => DEFAULT_SESSION_SKEW_SECS,
        };
        if !(0..=MAX_SKEW_SECS).contains(&session_skew_secs) {
            return Err(ClientError::Config(format!(
                "IMAGIQ_SESSION_SKEW_SECS must be between 0 and {MAX_SKEW_SECS}"
            )));
        }

        Ok(Self {
            api_url,
            poll_interval: Duration::from_secs(poll_secs),
            session_skew_secs,
        })
    }
}

fn normalize_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
