use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Connection settings for the movie database API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for API calls (e.g., "https://api.themoviedb.org/3").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Prefix joined with a movie's poster path to form an image URL.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    /// Direct API key. Prefer `api_key_env` so the key stays out of the file.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total attempts per fetch, including the first (default: 1).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base backoff in milliseconds between attempts (default: 200).
    #[serde(default = "default_retry_backoff_base_ms")]
    pub retry_backoff_base_ms: u64,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Movie list arrangement.
    #[serde(default)]
    pub layout: ListLayout,
    /// Redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// How the movie list screen arranges its cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListLayout {
    /// Three-column poster grid showing up to twenty movies.
    #[default]
    Grid,
    /// Single column showing up to ten movies.
    Column,
}

impl ListLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListLayout::Grid => "grid",
            ListLayout::Column => "column",
        }
    }
}

impl std::str::FromStr for ListLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(ListLayout::Grid),
            "column" => Ok(ListLayout::Column),
            other => Err(format!("unknown layout '{other}' (expected grid or column)")),
        }
    }
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_api_key_env() -> String {
    "TMDB_API_KEY".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_max_attempts() -> u32 {
    1
}

fn default_retry_backoff_base_ms() -> u64 {
    200
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            api_key: None,
            api_key_env: default_api_key_env(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            max_attempts: default_max_attempts(),
            retry_backoff_base_ms: default_retry_backoff_base_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            layout: ListLayout::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
