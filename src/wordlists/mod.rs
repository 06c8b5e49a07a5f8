//! Dictionaries for word ladder solving
//!
//! An embedded sample dictionary plus loaders for user-supplied files.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE, SAMPLE_COUNT};
