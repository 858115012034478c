//! Client-side application layer for the imagiq admin dashboard.
//!
//! * [`http::ApiClient`] and its endpoint groups talk to the remote API,
//!   decoding every response through [`envelope::parse_envelope`].
//! * [`session`] holds the explicit login context and its expiry rules.
//! * [`store::FilterStore`] caches filters and only mutates after success.
//! * [`warehouse::WarehouseBoard`] drives the order status machine.
//! * [`polling::spawn_poller`] refreshes data on a cancellable timer.

pub mod backend;
pub mod config;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod http;
pub mod notify;
pub mod polling;
pub mod session;
pub mod store;
pub mod warehouse;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::ApiClient;
pub use session::{SessionContext, TokenLifecycle};
