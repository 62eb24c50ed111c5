//! Notification banner module for ding
//!
//! A one-shot toast driven by inbound push events. Repeated deliveries of
//! the same logical notification are suppressed; each display lives for a
//! fixed window and then dismisses itself.

mod banner_render;
mod banner_state;

pub use banner_render::render_banner;
pub use banner_state::{BannerState, DISPLAY_WINDOW};
