//! Core domain types for word ladders
//!
//! Words, wildcard patterns and paths. Pure values with no search logic.

mod path;
mod pattern;
mod word;

pub use path::Path;
pub use pattern::Pattern;
pub use word::{Word, WordError};
