//! Push channel worker thread
//!
//! Owns the WebSocket connection to the notification server in a background
//! thread so the UI never blocks on network I/O. Decoded events are handed
//! to the main thread over a channel in transport order. `check-in-app`
//! frames are answered inline with a `request-notif` emission on the same
//! connection; nothing else is written.
//!
//! Uses a tokio runtime for the async connection with cancellation support.
//! Includes panic handling to prevent TUI corruption.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::Sender;

use futures::{SinkExt, StreamExt};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tokio_util::sync::CancellationToken;

use super::protocol::{self, NotificationEvent, ServerEvent};

/// Updates delivered to the main thread
#[derive(Debug, Clone, PartialEq)]
pub enum PushUpdate {
    /// The connection is established
    Connected,
    /// An in-app notification arrived
    Notification(NotificationEvent),
    /// The connection ended (failed to open, closed, or errored).
    /// Single attempt only, the worker does not reconnect.
    Disconnected(String),
}

/// Spawn the push channel worker thread
///
/// Connects to `endpoint` and forwards decoded events to `update_tx` until
/// the connection ends or `cancel_token` is tripped (app shutdown).
pub fn spawn_worker(endpoint: String, update_tx: Sender<PushUpdate>, cancel_token: CancellationToken) {
    std::thread::spawn(move || {
        // The default panic hook prints to stderr which corrupts the TUI
        let update_tx_clone = update_tx.clone();
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let panic_msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic in push worker".to_string()
            };

            log::error!(
                "Push worker panic: {} at {:?}",
                panic_msg,
                panic_info.location()
            );

            let _ = update_tx_clone.send(PushUpdate::Disconnected(format!(
                "push worker crashed: {}",
                panic_msg
            )));
        }));

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime");

            rt.block_on(connection_loop(&endpoint, update_tx, cancel_token));
        }));

        panic::set_hook(prev_hook);

        if let Err(e) = result {
            let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("Push worker thread panicked: {}", panic_msg);
        }
    });
}

/// Connect and pump frames until the connection ends or the app shuts down
async fn connection_loop(
    endpoint: &str,
    update_tx: Sender<PushUpdate>,
    cancel_token: CancellationToken,
) {
    let ws_stream = tokio::select! {
        biased;

        _ = cancel_token.cancelled() => return,

        connected = connect_async(endpoint) => match connected {
            Ok((ws_stream, _response)) => ws_stream,
            Err(e) => {
                let _ = update_tx.send(PushUpdate::Disconnected(e.to_string()));
                return;
            }
        },
    };

    if update_tx.send(PushUpdate::Connected).is_err() {
        // Main thread is gone
        return;
    }

    let (mut write, mut read) = ws_stream.split();

    loop {
        tokio::select! {
            biased;

            // Check shutdown first (biased mode)
            _ = cancel_token.cancelled() => {
                let _ = write.send(Message::Close(None)).await;
                return;
            }

            frame = read.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        handle_frame(&text, &mut write, &update_tx).await;
                    }
                    // Pings are answered by the transport; other frame
                    // types carry nothing we recognize
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        let _ = update_tx.send(PushUpdate::Disconnected(e.to_string()));
                        return;
                    }
                    None => {
                        let _ = update_tx.send(PushUpdate::Disconnected(
                            "connection closed by server".to_string(),
                        ));
                        return;
                    }
                }
            }
        }
    }
}

/// Decode one text frame and act on it
///
/// Undecodable frames (missing id/message, malformed JSON, unknown event
/// names) are dropped with a debug diagnostic, matching the policy of
/// treating them as non-novel.
async fn handle_frame<S>(text: &str, write: &mut S, update_tx: &Sender<PushUpdate>)
where
    S: SinkExt<Message> + Unpin,
    <S as futures::Sink<Message>>::Error: std::fmt::Display,
{
    match protocol::decode_frame(text) {
        Ok(ServerEvent::Notification(event)) => {
            let _ = update_tx.send(PushUpdate::Notification(event));
        }
        Ok(ServerEvent::CheckInApp(payload)) => {
            // Pure forwarding: the payload goes back out untouched
            let reply = protocol::forward_check_in_app(payload);
            match protocol::encode_frame(&reply) {
                Ok(encoded) => {
                    if let Err(e) = write.send(Message::Text(encoded)).await {
                        log::error!("Failed to emit request-notif: {}", e);
                    }
                }
                Err(e) => log::error!("Failed to encode request-notif: {}", e),
            }
        }
        Ok(ServerEvent::Message(greeting)) => {
            log::debug!("Server greeting: {}", greeting);
        }
        Err(e) => {
            log::debug!("Dropping undecodable push frame: {}", e);
        }
    }
}
