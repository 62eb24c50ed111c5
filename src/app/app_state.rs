use std::sync::mpsc::{Receiver, Sender};
use std::time::Instant;

use crate::api::{ApiRequest, ApiResponse, NewNotification};
use crate::banner::BannerState;
use crate::config::Config;
use crate::form::FieldState;
use crate::push::PushUpdate;
use crate::results::ResultsState;

/// Notification type sent when the send form's type field is left empty
const DEFAULT_NOTIFICATION_TYPE: &str = "in-app";

/// Which widget has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    FetchUserId,
    SendUserId,
    SendType,
    SendContent,
    ResultsPane,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::FetchUserId => Focus::SendUserId,
            Focus::SendUserId => Focus::SendType,
            Focus::SendType => Focus::SendContent,
            Focus::SendContent => Focus::ResultsPane,
            Focus::ResultsPane => Focus::FetchUserId,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::FetchUserId => Focus::ResultsPane,
            Focus::SendUserId => Focus::FetchUserId,
            Focus::SendType => Focus::SendUserId,
            Focus::SendContent => Focus::SendType,
            Focus::ResultsPane => Focus::SendContent,
        }
    }
}

/// Push channel connection state shown in the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    Disconnected(String),
}

/// Application state
pub struct App {
    pub focus: Focus,
    pub fetch_user_id: FieldState,
    pub send_user_id: FieldState,
    pub send_type: FieldState,
    pub send_content: FieldState,
    pub results: ResultsState,
    pub banner: BannerState,
    pub connection: ConnectionStatus,
    pub status_message: Option<String>,
    pub should_quit: bool,
    dirty: bool,
    api_tx: Option<Sender<ApiRequest>>,
    api_rx: Option<Receiver<ApiResponse>>,
    push_rx: Option<Receiver<PushUpdate>>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            focus: Focus::FetchUserId,
            fetch_user_id: FieldState::new("User Id", "7"),
            send_user_id: FieldState::new("To User Id", "7"),
            send_type: FieldState::new("Type", DEFAULT_NOTIFICATION_TYPE),
            send_content: FieldState::new("Content", "message text"),
            results: ResultsState::new(),
            banner: BannerState::from_config(&config.banner),
            connection: ConnectionStatus::Connecting,
            status_message: None,
            should_quit: false,
            dirty: true,
            api_tx: None,
            api_rx: None,
            push_rx: None,
        }
    }

    /// Wire up the API worker channels
    pub fn set_api_channels(&mut self, tx: Sender<ApiRequest>, rx: Receiver<ApiResponse>) {
        self.api_tx = Some(tx);
        self.api_rx = Some(rx);
    }

    /// Wire up the push worker channel
    pub fn set_push_channel(&mut self, rx: Receiver<PushUpdate>) {
        self.push_rx = Some(rx);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Render when something changed, or while a toast is up so its
    /// dismissal is repainted promptly
    pub fn should_render(&self) -> bool {
        self.dirty || self.banner.has_active()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Drain both worker channels (non-blocking) and fold the updates into
    /// UI state. Events are applied in delivery order.
    pub fn poll_workers(&mut self) {
        let push_updates: Vec<PushUpdate> = match &self.push_rx {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        };
        for update in push_updates {
            self.apply_push_update(update);
            self.dirty = true;
        }

        let api_responses: Vec<ApiResponse> = match &self.api_rx {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        };
        for response in api_responses {
            self.apply_api_response(response);
            self.dirty = true;
        }
    }

    pub fn apply_push_update(&mut self, update: PushUpdate) {
        match update {
            PushUpdate::Connected => {
                self.connection = ConnectionStatus::Connected;
            }
            PushUpdate::Notification(event) => {
                self.banner.on_notification(&event, Instant::now());
            }
            PushUpdate::Disconnected(reason) => {
                log::error!("Push channel disconnected: {}", reason);
                self.connection = ConnectionStatus::Disconnected(reason);
            }
        }
    }

    pub fn apply_api_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::Notifications { user_id, result } => {
                self.results.apply_fetch(user_id, result);
            }
            ApiResponse::SendOutcome { result } => match result {
                Ok(body) => {
                    // The result body is arbitrary JSON, logged only
                    log::info!("Notification sent: {}", body);
                    self.status_message = Some("Notification queued".to_string());
                }
                Err(e) => {
                    log::error!("Error sending notification: {}", e);
                    self.status_message = Some("Send failed".to_string());
                }
            },
        }
    }

    /// Submit the fetch form: read the user id field and request that
    /// user's notifications
    pub fn submit_fetch(&mut self) {
        let raw = self.fetch_user_id.value().trim().to_string();
        match raw.parse::<u64>() {
            Ok(user_id) => {
                self.results.begin_fetch(user_id);
                self.send_api_request(ApiRequest::FetchNotifications { user_id });
            }
            Err(_) => {
                self.status_message = Some("User id must be a number".to_string());
            }
        }
    }

    /// Submit the send form
    pub fn submit_send(&mut self) {
        let raw = self.send_user_id.value().trim().to_string();
        let user_id = match raw.parse::<u64>() {
            Ok(user_id) => user_id,
            Err(_) => {
                self.status_message = Some("User id must be a number".to_string());
                return;
            }
        };

        let notification_type = match self.send_type.value().trim() {
            "" => DEFAULT_NOTIFICATION_TYPE.to_string(),
            t => t.to_string(),
        };

        self.status_message = Some("Sending...".to_string());
        self.send_api_request(ApiRequest::SendNotification(NewNotification {
            user_id,
            notification_type,
            content: self.send_content.value().to_string(),
        }));
    }

    fn send_api_request(&mut self, request: ApiRequest) {
        if let Some(tx) = &self.api_tx
            && tx.send(request).is_err()
        {
            log::error!("API worker is gone");
            self.status_message = Some("Server Error.".to_string());
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
