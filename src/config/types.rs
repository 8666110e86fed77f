use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Cat API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API (e.g., "https://cataas.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Prefix for image URLs; the candidate id is appended as the last segment.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    /// Number of cats fetched per session (default: 10).
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Only fetch cats carrying all of these tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Horizontal drag distance, in columns, that commits a swipe (default: 8).
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: u16,
}

fn default_base_url() -> String {
    "https://cataas.com".to_string()
}

fn default_image_base_url() -> String {
    "https://cataas.com/cat".to_string()
}

fn default_batch_size() -> usize {
    10
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_swipe_threshold() -> u16 {
    8
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            batch_size: default_batch_size(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            tags: Vec::new(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            swipe_threshold: default_swipe_threshold(),
        }
    }
}
