//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and adds the pieces
//! only the terminal binary needs: environment configuration, the JSON-lines
//! event log and the terminal sink.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod event_log;
pub mod frontend;
