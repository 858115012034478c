//! Domain model for the imagiq admin dashboard.
//!
//! Holds the dynamic product-filter model (column catalog, operators,
//! validation, scope ordering), the warehouse order status machine, the
//! campaign flow vocabulary, and the wire types shared by the client and the
//! mock API. Nothing in this crate performs I/O.

pub mod auth;
pub mod campaign_flow;
pub mod catalog;
pub mod coverage;
pub mod envelope;
pub mod error;
pub mod filters;
pub mod marketing;
pub mod types;
pub mod warehouse;
