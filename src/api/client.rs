//! Async HTTP client for the notification REST API
//!
//! Uses reqwest for HTTP. One attempt per call; the caller decides how a
//! failure is rendered.

use reqwest::Client;

use super::types::{NewNotification, NotificationsResponse};
use crate::error::DingError;

/// Client for the two notification endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /users/{user_id}/notifications`
    ///
    /// A 400 with an `error` body is the server's "no notifications for this
    /// user" answer and is returned as a normal response; anything else
    /// non-2xx is an error.
    pub async fn fetch_notifications(
        &self,
        user_id: u64,
    ) -> Result<NotificationsResponse, DingError> {
        let url = format!("{}/users/{}/notifications", self.base_url, user_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DingError::Network(e.to_string()))?;

        let code = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DingError::Network(e.to_string()))?;

        if (200..300).contains(&code) {
            return serde_json::from_str(&body).map_err(|e| DingError::Payload(e.to_string()));
        }

        if code == 400
            && let Ok(parsed) = serde_json::from_str::<NotificationsResponse>(&body)
            && parsed.error.is_some()
        {
            return Ok(parsed);
        }

        Err(DingError::Api {
            code,
            message: body,
        })
    }

    /// `POST /notifications`
    ///
    /// The result body is arbitrary JSON, passed back for logging only.
    pub async fn send_notification(
        &self,
        request: &NewNotification,
    ) -> Result<serde_json::Value, DingError> {
        let url = format!("{}/notifications", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| DingError::Network(e.to_string()))?;

        let code = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DingError::Network(e.to_string()))?;

        if !(200..300).contains(&code) {
            return Err(DingError::Api {
                code,
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| DingError::Payload(e.to_string()))
    }
}
