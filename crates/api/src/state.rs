use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::SessionRegistry;
use crate::config::ServerConfig;
use crate::store::MemoryStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory catalog, filters and warehouse orders.
    pub store: Arc<RwLock<MemoryStore>>,
    /// Issued admin session tokens.
    pub sessions: Arc<SessionRegistry>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: MemoryStore, config: ServerConfig) -> Self {
        let sessions = SessionRegistry::new(config.session_ttl_mins);
        Self {
            store: Arc::new(RwLock::new(store)),
            sessions: Arc::new(sessions),
            config: Arc::new(config),
        }
    }
}
