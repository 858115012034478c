use imagiq_core::error::CoreError;

/// Errors surfaced by the client layer.
///
/// Network failures and API-reported business failures are distinct
/// variants but reach the user the same way, through [`ClientError::user_message`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (connection, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with `success: false` or a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        errors: Option<serde_json::Value>,
    },

    /// The body was not a `{ success, data?, message?, errors? }` envelope,
    /// or `data` did not match the expected type.
    #[error("Malformed response envelope: {0}")]
    MalformedEnvelope(String),

    #[error("Session expired, log in again")]
    SessionExpired,

    #[error("No active session")]
    MissingSession,

    /// Rejected locally before anything was sent.
    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Text suitable for a toast. Server-supplied messages pass through;
    /// transport problems get a generic message.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network(_) => {
                "No se pudo conectar con el servidor. Intenta de nuevo.".to_string()
            }
            ClientError::Api { message, .. } => message.clone(),
            ClientError::MalformedEnvelope(_) => {
                "Respuesta inesperada del servidor".to_string()
            }
            ClientError::SessionExpired | ClientError::MissingSession => {
                "Tu sesión expiró. Inicia sesión nuevamente.".to_string()
            }
            ClientError::Validation(CoreError::Validation(msg)) => msg.clone(),
            ClientError::Validation(other) => other.to_string(),
            ClientError::Config(msg) => msg.clone(),
        }
    }

    /// HTTP status for API failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
