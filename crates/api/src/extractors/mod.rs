//! Request extractors.

pub mod admin_auth;

pub use admin_auth::AdminAuth;
