//! API worker thread
//!
//! Runs the REST calls in a background thread to avoid blocking the UI.
//! Receives requests via channel, makes the HTTP call, and sends the
//! outcome back to the main thread.
//!
//! Uses a tokio runtime for the async HTTP client. Includes panic handling
//! to prevent TUI corruption.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};

use super::client::ApiClient;
use super::types::{NewNotification, NotificationsResponse};
use crate::error::DingError;

/// Requests from the main thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    FetchNotifications { user_id: u64 },
    SendNotification(NewNotification),
}

/// Outcomes sent back to the main thread
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Notifications {
        user_id: u64,
        result: Result<NotificationsResponse, DingError>,
    },
    SendOutcome {
        result: Result<serde_json::Value, DingError>,
    },
}

/// Spawn the API worker thread
///
/// Processes requests one at a time until the request channel closes.
pub fn spawn_worker(base_url: &str, request_rx: Receiver<ApiRequest>, response_tx: Sender<ApiResponse>) {
    let client = ApiClient::new(base_url);

    std::thread::spawn(move || {
        // The default panic hook prints to stderr which corrupts the TUI
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            log::error!("API worker panic at {:?}", panic_info.location());
        }));

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime");

            rt.block_on(worker_loop(client, request_rx, response_tx));
        }));

        panic::set_hook(prev_hook);

        if result.is_err() {
            log::error!("API worker thread panicked");
        }
    });
}

/// Process requests until the channel is closed
///
/// Blocking `recv()` is fine here since we're in a dedicated thread.
async fn worker_loop(
    client: ApiClient,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let response = match request {
            ApiRequest::FetchNotifications { user_id } => ApiResponse::Notifications {
                user_id,
                result: client.fetch_notifications(user_id).await,
            },
            ApiRequest::SendNotification(new_notification) => ApiResponse::SendOutcome {
                result: client.send_notification(&new_notification).await,
            },
        };

        if response_tx.send(response).is_err() {
            // Main thread disconnected
            return;
        }
    }
}
