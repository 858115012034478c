//! Typed endpoint groups, one per remote resource.
//!
//! Each group borrows the [`ApiClient`](crate::http::ApiClient) and maps
//! its methods one-to-one onto HTTP routes. Authenticated methods take the
//! caller's [`SessionContext`](crate::session::SessionContext).

mod auth;
mod banners;
mod catalog;
mod coverage_zones;
mod filters;
mod product_notifications;
mod products;
mod warehouse;

pub use auth::AuthEndpoints;
pub use banners::BannerEndpoints;
pub use catalog::{CategoryEndpoints, MenuEndpoints, SubmenuEndpoints};
pub use coverage_zones::CoverageZoneEndpoints;
pub use filters::FilterEndpoints;
pub use product_notifications::ProductNotificationEndpoints;
pub use products::ProductEndpoints;
pub use warehouse::WarehouseEndpoints;
