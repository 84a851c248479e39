//! Session model as returned by the host.

use serde::{Deserialize, Serialize};

/// A host conversation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque session identifier.
    pub id: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
}
