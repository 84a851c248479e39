//! In-memory host for exercising the fork sequence.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use super::{HostClient, HostError, LogEntry, LogLevel, PromptBody, Toast};
use crate::models::{MessageWithParts, Session};

/// Every call the fake host observed, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Messages(String),
    CreateSession(String),
    Prompt(String, PromptBody),
    Log(LogLevel, String),
    OpenSessions,
    Toast(Toast),
}

/// Scripted host that records calls.
#[derive(Default)]
pub struct RecordingHost {
    pub messages: Vec<MessageWithParts>,
    pub fail_messages: bool,
    pub refuse_create: bool,
    pub fail_prompt: bool,
    pub fail_log: bool,
    pub fail_open_sessions: bool,
    pub fail_toast: bool,
    pub created: Mutex<usize>,
    pub calls: Mutex<Vec<Call>>,
    pub logs: Mutex<Vec<LogEntry>>,
}

impl RecordingHost {
    pub fn with_messages(messages: Vec<MessageWithParts>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn logs(&self) -> Vec<LogEntry> {
        self.logs.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<(String, PromptBody)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Prompt(id, body) => Some((id, body)),
                _ => None,
            })
            .collect()
    }

    pub fn created_titles(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateSession(title) => Some(title),
                _ => None,
            })
            .collect()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Toast(toast) => Some(toast),
                _ => None,
            })
            .collect()
    }

    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn refused(endpoint: &str) -> HostError {
        HostError::Status {
            endpoint: endpoint.to_string(),
            status: 500,
            body: "boom".to_string(),
        }
    }
}

/// Build a listing entry from a role and text parts.
pub fn message(role: &str, texts: &[&str]) -> MessageWithParts {
    let parts: Vec<_> = texts
        .iter()
        .map(|text| json!({"type": "text", "text": text}))
        .collect();
    serde_json::from_value(json!({
        "info": {"id": "msg", "sessionID": "ses_src", "role": role},
        "parts": parts,
    }))
    .unwrap()
}

#[async_trait]
impl HostClient for RecordingHost {
    async fn messages(&self, session_id: &str) -> Result<Vec<MessageWithParts>, HostError> {
        self.push(Call::Messages(session_id.to_string()));
        if self.fail_messages {
            return Err(Self::refused("/session/message"));
        }
        Ok(self.messages.clone())
    }

    async fn create_session(&self, title: &str) -> Result<Option<Session>, HostError> {
        self.push(Call::CreateSession(title.to_string()));
        if self.refuse_create {
            return Ok(None);
        }
        let n = {
            let mut created = self.created.lock().unwrap();
            *created += 1;
            *created
        };
        Ok(Some(Session {
            id: format!("ses_new_{n}"),
            title: title.to_string(),
        }))
    }

    async fn prompt(&self, session_id: &str, body: &PromptBody) -> Result<(), HostError> {
        self.push(Call::Prompt(session_id.to_string(), body.clone()));
        if self.fail_prompt {
            return Err(Self::refused("/session/message"));
        }
        Ok(())
    }

    async fn log(&self, entry: &LogEntry) -> Result<(), HostError> {
        self.push(Call::Log(entry.level, entry.message.clone()));
        self.logs.lock().unwrap().push(entry.clone());
        if self.fail_log {
            return Err(Self::refused("/log"));
        }
        Ok(())
    }

    async fn open_sessions(&self) -> Result<(), HostError> {
        self.push(Call::OpenSessions);
        if self.fail_open_sessions {
            return Err(Self::refused("/tui/open-sessions"));
        }
        Ok(())
    }

    async fn show_toast(&self, toast: &Toast) -> Result<(), HostError> {
        self.push(Call::Toast(toast.clone()));
        if self.fail_toast {
            return Err(Self::refused("/tui/show-toast"));
        }
        Ok(())
    }
}
