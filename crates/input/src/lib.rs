//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::Command`]s. Status
//! validation happens in the game itself, so every mapped key is forwarded as-is.

pub mod map;

pub use blockfall_types as types;

pub use map::{command_for_key, should_quit};
