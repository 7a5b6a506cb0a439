//! Terminal frontend for the falling-block game.
//!
//! Renders [`core::GameSnapshot`]s into a character framebuffer and flushes
//! only the changed spans to the terminal. No widget toolkit: each board
//! cell is two terminal columns wide to keep the well roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{piece_color, GameView, Viewport, WellRect};
pub use renderer::{changed_spans, encode_diff, encode_full, TerminalRenderer};
