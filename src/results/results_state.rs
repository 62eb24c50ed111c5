//! Results pane state
//!
//! Fetch-and-render glue: the last fetch outcome plus a scroll offset.
//! Failures degrade to an error line, never an escaped error.

use crate::api::NotificationsResponse;
use crate::error::DingError;

/// Outcome of the most recent fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Nothing fetched yet
    Idle,
    /// Request in flight
    Pending { user_id: u64 },
    /// Records returned
    Loaded {
        user_id: u64,
        records: Vec<crate::api::NotificationRecord>,
    },
    /// The server answered but had nothing for this user
    Empty { user_id: u64 },
    /// Transport or server failure
    Failed { user_id: u64 },
}

impl Default for FetchOutcome {
    fn default() -> Self {
        FetchOutcome::Idle
    }
}

/// Vertical scrolling for the results pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
}

impl ScrollState {
    pub fn update_bounds(&mut self, content_lines: usize, viewport_height: u16) {
        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as usize)
            .min(u16::MAX as usize) as u16;
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }
}

/// State behind the results pane
#[derive(Debug, Default)]
pub struct ResultsState {
    outcome: FetchOutcome,
    pub scroll: ScrollState,
}

impl ResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcome(&self) -> &FetchOutcome {
        &self.outcome
    }

    /// Mark a fetch as started
    pub fn begin_fetch(&mut self, user_id: u64) {
        self.outcome = FetchOutcome::Pending { user_id };
        self.scroll = ScrollState::default();
    }

    /// Apply a fetch outcome from the API worker
    pub fn apply_fetch(&mut self, user_id: u64, result: Result<NotificationsResponse, DingError>) {
        self.outcome = match result {
            Ok(response) => match response.data {
                Some(records) if !records.is_empty() => FetchOutcome::Loaded { user_id, records },
                _ => FetchOutcome::Empty { user_id },
            },
            Err(e) => {
                log::error!("Error fetching notifications: {}", e);
                FetchOutcome::Failed { user_id }
            }
        };
    }

    /// The pane contents, one string per line
    pub fn lines(&self) -> Vec<String> {
        match &self.outcome {
            FetchOutcome::Idle => vec!["Enter a user id and press Enter to fetch.".to_string()],
            FetchOutcome::Pending { user_id } => {
                vec![format!("Fetching notifications for user {}...", user_id)]
            }
            FetchOutcome::Loaded { user_id, records } => {
                let mut lines = Vec::with_capacity(records.len() + 1);
                lines.push(format!("Notifications for User {}:", user_id));
                for record in records {
                    lines.push(format!(
                        "{} - Status: {}, Mode: {}",
                        record.content, record.status, record.notification_type
                    ));
                }
                lines
            }
            FetchOutcome::Empty { user_id } => vec![
                format!("Notifications for User {}:", user_id),
                "No notifications found.".to_string(),
            ],
            FetchOutcome::Failed { user_id } => vec![
                format!("Notifications for User {}:", user_id),
                "Server Error.".to_string(),
            ],
        }
    }
}

#[cfg(test)]
#[path = "results_state_tests.rs"]
mod results_state_tests;
