//! Failure of a call to the remote items endpoint.

use thiserror::Error;

/// A remote call did not succeed.
///
/// Callers treat every variant the same way (roll back, log, move on); the
/// variants only exist so the log line says what went wrong.
#[derive(Debug, Error)]
pub enum RemoteCallFailed {
    /// The endpoint answered with a non-2xx status.
    #[error("{method} {url} returned {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    /// Connection, timeout, or body decoding failed.
    #[error("{method} {url} failed: {source}")]
    Transport {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request URL could not be built.
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
}

impl RemoteCallFailed {
    /// HTTP status reported by the endpoint, when it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteCallFailed::Status { status, .. } => Some(*status),
            RemoteCallFailed::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            RemoteCallFailed::InvalidUrl { .. } => None,
        }
    }

    /// Short machine-readable kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            RemoteCallFailed::Status { .. } => "status",
            RemoteCallFailed::Transport { source, .. } if source.is_timeout() => "timeout",
            RemoteCallFailed::Transport { source, .. } if source.is_decode() => "decode",
            RemoteCallFailed::Transport { .. } => "transport",
            RemoteCallFailed::InvalidUrl { .. } => "invalid_url",
        }
    }
}
