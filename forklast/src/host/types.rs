//! Request bodies sent to the host.

use serde::Serialize;
use serde_json::Value;

/// Severity of a host log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Structured record for the host's log sink.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub service: String,
    pub level: LogLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

impl LogEntry {
    pub fn new(service: &str, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            service: service.to_string(),
            level,
            message: message.into(),
            extra: None,
        }
    }

    #[must_use]
    pub fn with_extra(mut self, extra: Value) -> Self {
        self.extra = Some(extra);
        self
    }
}

/// Text fragment of a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextPartInput {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

impl TextPartInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: "text",
            text: text.into(),
        }
    }
}

/// Body of a prompt submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptBody {
    /// Record the parts without asking the model for a reply.
    #[serde(rename = "noReply")]
    pub no_reply: bool,
    pub parts: Vec<TextPartInput>,
}

impl PromptBody {
    /// A single text part recorded without triggering generation.
    pub fn silent_text(text: impl Into<String>) -> Self {
        Self {
            no_reply: true,
            parts: vec![TextPartInput::new(text)],
        }
    }
}

/// Toast style. Only success toasts are ever shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Success,
}

/// TUI toast notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_body_wire_shape() {
        let body = PromptBody::silent_text("plan A");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"noReply": true, "parts": [{"type": "text", "text": "plan A"}]})
        );
    }

    #[test]
    fn log_entry_omits_missing_extra() {
        let entry = LogEntry::new("svc", LogLevel::Warn, "nothing");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"service": "svc", "level": "warn", "message": "nothing"})
        );
    }
}
