//! Application services.

pub mod applications;
pub mod email;
pub mod seed;

pub use applications::ApplicationService;
pub use email::EmailService;
