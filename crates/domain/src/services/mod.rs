//! Domain service traits.

pub mod notification;

pub use notification::{InviteNotifier, NotificationResult};
