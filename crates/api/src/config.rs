/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Credentials accepted by `/api/auth/login`.
    pub admin_email: String,
    pub admin_password: String,
    /// Lifetime of an issued session token in minutes (default: `480`).
    pub session_ttl_mins: i64,
    /// Seed for the mock warehouse orders (default: `42`).
    pub warehouse_seed: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3001`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ADMIN_EMAIL`          | `admin@imagiq.com`         |
    /// | `ADMIN_PASSWORD`       | `admin123`                 |
    /// | `SESSION_TTL_MINS`     | `480`                      |
    /// | `WAREHOUSE_SEED`       | `42`                       |
    pub fn from_env() -> Self {
        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: parsed_env("PORT", 3001),
            cors_origins,
            request_timeout_secs: parsed_env("REQUEST_TIMEOUT_SECS", 30),
            admin_email: env_or("ADMIN_EMAIL", "admin@imagiq.com"),
            admin_password: env_or("ADMIN_PASSWORD", "admin123"),
            session_ttl_mins: parsed_env("SESSION_TTL_MINS", 480),
            warehouse_seed: parsed_env("WAREHOUSE_SEED", 42),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Numeric setting; a present but unparsable value aborts startup.
fn parsed_env<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} must be a valid number, got '{raw}': {e}")),
        Err(_) => default,
    }
}
