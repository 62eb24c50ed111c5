//! Push channel module for ding
//!
//! Maintains the long-lived WebSocket connection to the notification server
//! on a background thread and decodes inbound events at the boundary.

pub mod protocol;
pub mod worker;

pub use protocol::{ClientEvent, NotificationEvent, ServerEvent};
pub use worker::{PushUpdate, spawn_worker};
