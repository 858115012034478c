#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use chrono::Utc;
use tokio::net::TcpListener;

use imagiq_api::config::ServerConfig;
use imagiq_api::router::build_app_router;
use imagiq_api::state::AppState;
use imagiq_api::store::MemoryStore;
use imagiq_client::notify::Notifier;
use imagiq_client::{ApiClient, ClientConfig, SessionContext};
use imagiq_core::auth::LoginRequest;

pub const ADMIN_EMAIL: &str = "admin@imagiq.com";
pub const ADMIN_PASSWORD: &str = "admin123";

fn server_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        admin_email: ADMIN_EMAIL.to_string(),
        admin_password: ADMIN_PASSWORD.to_string(),
        session_ttl_mins: 60,
        warehouse_seed: 42,
    }
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Start the mock API over a freshly seeded store.
pub async fn spawn_api() -> ApiClient {
    let config = server_config();
    let store = MemoryStore::seeded(Utc::now(), config.warehouse_seed);
    let state = AppState::new(store, config.clone());
    let base_url = serve(build_app_router(state, &config)).await;
    ApiClient::new(&ClientConfig::with_api_url(base_url))
}

pub fn admin_credentials() -> LoginRequest {
    LoginRequest {
        email: ADMIN_EMAIL.to_string(),
        password: ADMIN_PASSWORD.to_string(),
    }
}

pub async fn login(api: &ApiClient) -> SessionContext {
    api.auth().login(&admin_credentials()).await.unwrap()
}

/// Notifier that keeps every toast for later assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    pub successes: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn error_count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }

    pub fn success_count(&self) -> usize {
        self.successes.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
