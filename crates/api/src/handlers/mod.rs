pub mod auth;
pub mod catalog;
pub mod filters;
pub mod warehouse;
