//! TOML configuration: remote endpoint, logging, simulated action latency.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ActionConfig, Config, LoggingConfig, RemoteConfig};
