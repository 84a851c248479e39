//! Host data models.

mod message;
mod session;

pub use message::{MessageWithParts, Part};
pub use session::Session;
