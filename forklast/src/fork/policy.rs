//! Title and notification policies of the fork commands.

/// Marker appended to truncated titles.
pub const ELLIPSIS: &str = "...";

/// Title length limit used by `fork-last-message`.
pub const DEFAULT_TITLE_MAX_CHARS: usize = 50;

/// How the new session's title is derived from the forwarded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitlePolicy {
    /// Constant label, independent of content.
    Fixed(&'static str),
    /// The text itself, cut to `max_chars` characters plus [`ELLIPSIS`].
    Truncate { max_chars: usize },
}

impl TitlePolicy {
    pub fn derive(&self, text: &str) -> String {
        match self {
            Self::Fixed(label) => (*label).to_string(),
            Self::Truncate { max_chars } => truncate(text, *max_chars),
        }
    }
}

/// Counts characters, not bytes, so multi-byte text is never split.
fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Wording of the success toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticePolicy {
    Fixed(&'static str),
    /// `{session_id}` is replaced with the new session's id.
    WithSessionId(&'static str),
}

impl NoticePolicy {
    pub fn render(&self, new_session_id: &str) -> String {
        match self {
            Self::Fixed(message) => (*message).to_string(),
            Self::WithSessionId(template) => template.replace("{session_id}", new_session_id),
        }
    }
}
