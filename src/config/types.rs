// Configuration type definitions

use serde::Deserialize;

/// Server endpoints section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Base URL for the notification REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Explicit push channel URL. When absent, the push endpoint is derived
    /// from `base_url` (same-origin deployment).
    #[serde(default)]
    pub push_url: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:5050".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: default_base_url(),
            push_url: None,
        }
    }
}

impl ServerConfig {
    /// Resolve the push channel endpoint: the explicit `push_url` if set,
    /// otherwise `base_url` with the scheme swapped to WebSocket and `/ws`
    /// appended.
    pub fn push_endpoint(&self) -> String {
        if let Some(url) = &self.push_url {
            return url.clone();
        }

        let base = self.base_url.trim_end_matches('/');
        let ws = if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            base.to_string()
        };

        format!("{ws}/ws")
    }
}

/// Banner (toast) configuration section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BannerConfig {
    /// When false the banner has no display target and inbound notifications
    /// are dropped without touching banner state.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Suppress immediate re-deliveries of the same notification id.
    #[serde(default = "default_true")]
    pub dedup: bool,
    /// Total display window in milliseconds (fade-in included).
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_duration_ms() -> u64 {
    4500
}

impl Default for BannerConfig {
    fn default() -> Self {
        BannerConfig {
            enabled: true,
            dedup: true,
            duration_ms: 4500,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub banner: BannerConfig,
}
