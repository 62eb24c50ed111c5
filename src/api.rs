//! REST API module for ding
//!
//! Thin fetch-and-render glue over the notification server's two HTTP
//! endpoints. Single attempt per request, no retry or backoff; failures are
//! logged and surfaced as an error line in the results pane.

pub mod client;
pub mod types;
pub mod worker;

pub use client::ApiClient;
pub use types::{NewNotification, NotificationRecord, NotificationsResponse};
pub use worker::{ApiRequest, ApiResponse, spawn_worker};
