//! Message model as returned by the host's message listing.

use serde::{Deserialize, Serialize};

/// Role of a message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message from the user.
    User,
    /// Message from the assistant.
    Assistant,
    /// Any role this tool does not care about.
    #[serde(other)]
    Other,
}

/// Message metadata. Only the role matters here; ids, timings and model
/// details are skipped during decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageInfo {
    pub role: Role,
}

/// A typed fragment of a message. Only text parts are consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Part {
    /// Plain text.
    Text {
        #[serde(default)]
        text: String,
    },
    /// Tool calls, reasoning, files, step markers, ...
    #[serde(other)]
    Other,
}

impl Part {
    /// Text content if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::Other => None,
        }
    }
}

/// One entry of a session's message listing: metadata plus ordered parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageWithParts {
    pub info: MessageInfo,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl MessageWithParts {
    pub fn is_assistant(&self) -> bool {
        self.info.role == Role::Assistant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_listing_entry() {
        let json = r#"{
            "info": {
                "id": "msg_1",
                "sessionID": "ses_1",
                "role": "assistant",
                "time": {"created": 1}
            },
            "parts": [
                {"id": "prt_1", "type": "step-start"},
                {"id": "prt_2", "type": "text", "text": "plan A"},
                {"id": "prt_3", "type": "tool", "tool": "bash"}
            ]
        }"#;
        let message: MessageWithParts = serde_json::from_str(json).unwrap();
        assert!(message.is_assistant());
        assert_eq!(message.parts.len(), 3);
        assert_eq!(message.parts[0], Part::Other);
        assert_eq!(message.parts[1].as_text(), Some("plan A"));
        assert_eq!(message.parts[2], Part::Other);
    }

    #[test]
    fn unknown_role_is_other() {
        let json = r#"{"info": {"id": "m", "sessionID": "s", "role": "system"}}"#;
        let message: MessageWithParts = serde_json::from_str(json).unwrap();
        assert_eq!(message.info.role, Role::Other);
        assert!(message.parts.is_empty());
    }

    #[test]
    fn text_part_without_text_is_empty() {
        let part: Part = serde_json::from_str(r#"{"type": "text"}"#).unwrap();
        assert_eq!(part.as_text(), Some(""));
    }
}
