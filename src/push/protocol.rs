//! Push channel wire protocol
//!
//! Frames are JSON text messages shaped `{"event": <name>, "data": <payload>}`.
//! Inbound payloads are decoded into explicit records at the boundary;
//! frames that don't decode are dropped by the caller, never propagated.

use serde::{Deserialize, Serialize};

use crate::error::DingError;

/// An in-app notification delivered over the push channel.
///
/// `id` is opaque and only ever compared for equality; it detects
/// re-delivery of the same logical event. Extra payload fields are
/// passthrough data and are ignored here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationEvent {
    pub id: String,
    pub message: String,
}

/// Events the server sends to the client
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// An in-app notification to display
    Notification(NotificationEvent),
    /// The server asks whether this client can take an in-app delivery;
    /// the payload is forwarded back untouched as `request-notif`.
    CheckInApp(serde_json::Value),
    /// Connection greeting, logged only
    Message(serde_json::Value),
}

/// Events the client sends to the server
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    RequestNotif(serde_json::Value),
}

/// Decode one inbound text frame
pub fn decode_frame(text: &str) -> Result<ServerEvent, DingError> {
    serde_json::from_str(text).map_err(|e| DingError::Payload(e.to_string()))
}

/// Encode one outbound frame
pub fn encode_frame(event: &ClientEvent) -> Result<String, DingError> {
    serde_json::to_string(event).map_err(|e| DingError::Payload(e.to_string()))
}

/// Forward a `check-in-app` payload back out as `request-notif`.
/// Pure forwarding, the payload is not inspected.
pub fn forward_check_in_app(payload: serde_json::Value) -> ClientEvent {
    ClientEvent::RequestNotif(payload)
}
