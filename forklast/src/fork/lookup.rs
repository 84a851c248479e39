//! Locating the most recent substantive assistant output.

use crate::models::{MessageWithParts, Part};

/// Last text part whose content is not blank. Returns the untrimmed text.
pub fn last_text_part(parts: &[Part]) -> Option<&str> {
    parts
        .iter()
        .rev()
        .filter_map(Part::as_text)
        .find(|text| !text.trim().is_empty())
}

/// Newest assistant text in a chronological message listing.
///
/// Assistant messages are visited newest first; the first one carrying a
/// non-blank text part wins. Trailing tool output, step markers and empty
/// assistant turns are skipped over.
pub fn latest_assistant_text(messages: &[MessageWithParts]) -> Option<&str> {
    messages
        .iter()
        .rev()
        .filter(|message| message.is_assistant())
        .find_map(|message| last_text_part(&message.parts))
}
