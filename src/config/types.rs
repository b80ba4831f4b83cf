use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub action: ActionConfig,
}

/// Remote CRUD endpoint the item list talks to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the API (e.g., "https://example.mockapi.io/api/v1").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Collection path under the base URL (default: "items").
    #[serde(default = "default_resource")]
    pub resource: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

/// Simulated form action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionConfig {
    /// Simulated latency of an accepted submission, in milliseconds.
    #[serde(default = "default_action_latency_ms")]
    pub latency_ms: u64,
    /// Simulated latency of a contact form submission, in milliseconds.
    #[serde(default = "default_form_latency_ms")]
    pub form_latency_ms: u64,
}

fn default_base_url() -> String {
    "https://670985e1af1a3998baa1c076.mockapi.io/api/v1".to_string()
}

fn default_resource() -> String {
    "items".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_action_latency_ms() -> u64 {
    1000
}

fn default_form_latency_ms() -> u64 {
    2000
}

impl RemoteConfig {
    /// Full URL of the item collection, without a trailing slash.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.resource.trim_matches('/')
        )
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            resource: default_resource(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_action_latency_ms(),
            form_latency_ms: default_form_latency_ms(),
        }
    }
}
