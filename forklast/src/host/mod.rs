//! Host capabilities consumed by the forker.
//!
//! The host owns sessions, messages, the log sink and the TUI. This module
//! only describes the calls we make against it; `OpencodeClient` is the
//! HTTP implementation used at runtime.

mod error;
mod http;
mod types;

#[cfg(test)]
pub mod testing;

use async_trait::async_trait;

use crate::models::{MessageWithParts, Session};

pub use error::HostError;
pub use http::OpencodeClient;
pub use types::{LogEntry, LogLevel, PromptBody, Toast, ToastVariant};

/// Operations the host exposes to plugins.
#[async_trait]
pub trait HostClient: Send + Sync {
    /// List all messages of a session, oldest first.
    async fn messages(&self, session_id: &str) -> Result<Vec<MessageWithParts>, HostError>;

    /// Create a session. `Ok(None)` means the host answered without a session.
    async fn create_session(&self, title: &str) -> Result<Option<Session>, HostError>;

    /// Submit a prompt into a session.
    async fn prompt(&self, session_id: &str, body: &PromptBody) -> Result<(), HostError>;

    /// Write a structured record to the host's log sink.
    async fn log(&self, entry: &LogEntry) -> Result<(), HostError>;

    /// Reveal the sessions list in the TUI.
    async fn open_sessions(&self) -> Result<(), HostError>;

    /// Show a toast notification in the TUI.
    async fn show_toast(&self, toast: &Toast) -> Result<(), HostError>;
}
