//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules engine of the falling-block game: piece
//! geometry, board, collision, line clearing, scoring and the game state
//! machine. It has **no dependencies** on terminal, input or file I/O.
//! Presentation layers read [`GameSnapshot`]s and receive notifications
//! through a [`GameSink`]; they drive the game with [`Command`]s and elapsed
//! time.
//!
//! # Module Structure
//!
//! - [`shapes`]: the 7 piece kinds and their pre-enumerated rotation states
//! - [`board`]: fixed-size grid with occupancy queries and row removal
//! - [`collision`]: the single legality check for moves, rotations and spawns
//! - [`piece`]: the active piece controller
//! - [`scoring`]: line clearing and the fixed 10/30/60/100 bonus table
//! - [`rng`]: seedable piece sources
//! - [`timer`]: cancellable gravity countdown
//! - [`game_state`]: the Running/Paused/Over state machine
//! - [`session`]: single dispatch point that forwards events to a sink
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameState};
//! use blockfall_core::types::{Command, GameStatus};
//!
//! let mut game = GameState::new(GameConfig::default().with_seed(12345)).unwrap();
//! assert_eq!(game.status(), GameStatus::Running);
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//!
//! // Two gravity intervals elapse.
//! assert_eq!(game.advance(1000), 2);
//! assert_eq!(game.active().row, 2);
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod events;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;
pub mod timer;

pub use blockfall_types as types;

pub use board::Board;
pub use collision::collides;
pub use config::{ConfigError, GameConfig};
pub use events::{GameEvent, GameSink, NullSink, RecordingSink};
pub use game_state::GameState;
pub use piece::ActivePiece;
pub use rng::{PieceSource, SequenceSource, SimpleRng, UniformSource};
pub use scoring::{clear_full_rows, line_clear_score, LineClear};
pub use session::GameSession;
pub use shapes::{shape_at, shapes_for, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use timer::GravityTimer;
