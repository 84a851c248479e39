//! Forking the latest assistant answer of a session into a fresh session.

mod forker;
mod lookup;
mod policy;

pub use forker::{ForkCommand, ForkOutcome, SessionForker};
pub use policy::DEFAULT_TITLE_MAX_CHARS;
