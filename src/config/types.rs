use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub news: NewsConfig,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Connection settings for the news API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsConfig {
    /// Base URL for the API (e.g., "https://newsapi.org").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Static API key, sent as `X-Api-Key`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Startup defaults for the article screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// News language code used until the user picks another one.
    #[serde(default = "default_language")]
    pub language: String,
    /// Headline category for the unfiltered article list.
    #[serde(default = "default_category")]
    pub category: String,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Refetch interval for the source catalog; 0 fetches once.
    #[serde(default)]
    pub sources_refresh_seconds: u64,
}

fn default_base_url() -> String {
    "https://newsapi.org".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_language() -> String {
    "en".to_string()
}

fn default_category() -> String {
    "general".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            language: default_language(),
            category: default_category(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            sources_refresh_seconds: 0,
        }
    }
}
