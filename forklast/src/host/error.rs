//! Host call errors.

use thiserror::Error;

/// Failure of a call against the host.
#[derive(Debug, Error)]
pub enum HostError {
    /// Request never completed (connection refused, timeout, ...).
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Host answered with a non-success status.
    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Response body did not match the expected shape.
    #[error("failed to decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl HostError {
    pub fn transport(endpoint: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            endpoint: endpoint.to_string(),
            source,
        }
    }
}
