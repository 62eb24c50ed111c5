// REST API wire types

use serde::{Deserialize, Serialize};

/// One stored notification as returned by the fetch endpoint.
/// Fields are opaque passthrough data rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationRecord {
    pub content: String,
    pub status: String,
    pub notification_type: String,
}

/// Body of `GET /users/{user_id}/notifications`
///
/// A body without `data` means the user has no notifications; the server
/// reports that case with an `error` string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NotificationsResponse {
    #[serde(default)]
    pub data: Option<Vec<NotificationRecord>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /notifications`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewNotification {
    pub user_id: u64,
    pub notification_type: String,
    pub content: String,
}
