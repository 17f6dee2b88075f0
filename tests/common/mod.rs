//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod fake_catalog;
pub mod mock_backend;

use cinescope::config::{ApiConfig, Config, SecureString};
use cinescope::tmdb::TmdbClient;
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TEST_API_KEY: &str = "test-key";

/// Write `content` to a fresh `config.toml` in a temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// API settings pointing at `base_url` with short timeouts.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        api_key: Some(TEST_API_KEY.to_string()),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

pub fn test_config(base_url: &str) -> Config {
    Config {
        api: api_config(base_url),
        ..Config::default()
    }
}

/// Client with the test key against `base_url`.
pub fn client(base_url: &str) -> TmdbClient {
    TmdbClient::new(
        &api_config(base_url),
        Some(SecureString::new(TEST_API_KEY.to_string())),
    )
    .expect("Failed to build client")
}

pub fn movie_json(id: u64, title: &str, vote: f64, genres: &[u32]) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "overview": format!("Overview of {}", title),
        "release_date": "2020-01-01",
        "poster_path": format!("/{}.jpg", id),
        "vote_average": vote,
        "genre_ids": genres,
    })
}

/// Listing body as returned by popular, search and discover.
pub fn listing(movies: Vec<serde_json::Value>, total_pages: u32) -> String {
    json!({ "page": 1, "results": movies, "total_pages": total_pages }).to_string()
}

/// `count` movies with ids `1..=count`, all rated 5.0 and tagged Drama.
pub fn numbered_listing(count: u64, total_pages: u32) -> String {
    let movies = (1..=count)
        .map(|id| movie_json(id, &format!("Movie {}", id), 5.0, &[18]))
        .collect();
    listing(movies, total_pages)
}
