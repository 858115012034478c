//! imagiq mock API server library.
//!
//! Serves the JSON envelope and endpoints the admin client consumes, backed
//! by seeded in-memory data. Exposes config, state, routes and the router
//! builder so integration tests and the binary entrypoint share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;
