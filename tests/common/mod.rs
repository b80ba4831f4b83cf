//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod gated_api;
pub mod mock_backend;

use optimist::config::RemoteConfig;
use optimist::optimistic::Item;
use optimist::remote::HttpItemsApi;
use std::path::PathBuf;
use tempfile::TempDir;

/// Build items from `(id, name)` pairs.
pub fn items(pairs: &[(u64, &str)]) -> Vec<Item> {
    pairs.iter().map(|(id, name)| Item::new(*id, *name)).collect()
}

/// HTTP client pointed at `base_url` with short timeouts.
pub fn http_api(base_url: &str) -> HttpItemsApi {
    let config = RemoteConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
        ..RemoteConfig::default()
    };
    HttpItemsApi::new(&config).expect("Failed to build client")
}

/// A base URL nothing listens on.
pub fn dead_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
