use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub images: ImageConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote movie service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the REST API (e.g., "https://api.themoviedb.org/3").
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Direct API key. Falls back to `TMDB_API_KEY` when unset.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Where poster and detail links point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    #[serde(default = "default_poster_base_url")]
    pub poster_base_url: String,
    /// Shown when a movie has no poster.
    #[serde(default = "default_placeholder_url")]
    pub placeholder_url: String,
    #[serde(default = "default_movie_page_base_url")]
    pub movie_page_base_url: String,
}

/// Browsing behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Movies kept per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Upper bound for the reported page count.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
    /// Shortest non-empty query accepted on submission.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    /// How long a notification stays visible.
    #[serde(default = "default_notification_ttl_ms")]
    pub notification_ttl_ms: u64,
}

/// Durable session storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory holding stored keys. Defaults to the platform data dir.
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
}

fn default_api_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_timeout() -> u32 {
    15
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_poster_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_placeholder_url() -> String {
    "https://via.placeholder.com/500x750?text=No+Poster".to_string()
}

fn default_movie_page_base_url() -> String {
    "https://www.themoviedb.org/movie".to_string()
}

fn default_page_size() -> usize {
    20
}

fn default_max_pages() -> u32 {
    20
}

fn default_min_query_len() -> usize {
    2
}

fn default_notification_ttl_ms() -> u64 {
    3000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            api_key: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            poster_base_url: default_poster_base_url(),
            placeholder_url: default_placeholder_url(),
            movie_page_base_url: default_movie_page_base_url(),
        }
    }
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_pages: default_max_pages(),
            min_query_len: default_min_query_len(),
            notification_ttl_ms: default_notification_ttl_ms(),
        }
    }
}
