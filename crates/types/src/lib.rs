//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the rules engine, the terminal frontend and the input mapping alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (configurable per game):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FALL_INTERVAL_MS` | 500 | Gravity tick interval |
//! | `FRAME_MS` | 16 | Frontend poll/render interval |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, GameStatus, PieceKind};
//!
//! assert_eq!(PieceKind::T.tag(), 3);
//! assert_eq!(PieceKind::from_tag(3), Some(PieceKind::T));
//! assert_eq!(PieceKind::from_tag(0), None);
//!
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//! assert_eq!(GameStatus::Paused.as_str(), "paused");
//! ```

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: u16 = 10;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Default gravity interval in milliseconds
pub const DEFAULT_FALL_INTERVAL_MS: u32 = 500;

/// Frontend frame interval in milliseconds (~60 FPS)
pub const FRAME_MS: u32 = 16;

/// Score awarded for the number of rows removed by a single lock.
///
/// Indexed by cleared row count (0..=4). No combo or level multiplier applies.
pub const LINE_SCORES: [u32; 5] = [0, 10, 30, 60, 100];

/// The seven piece kinds
///
/// Each kind carries a stable tag (1..=7) used as the board cell value:
/// I=1, O=2, T=3, S=4, Z=5, J=6, L=7. Tag 0 is reserved for an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in tag order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Cell value written to the board for this kind (1..=7).
    pub const fn tag(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::tag`]. Returns `None` for 0 and anything above 7.
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell (tag 0)
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Tag written to snapshots for a board cell.
pub fn cell_tag(cell: Cell) -> u8 {
    cell.map_or(0, PieceKind::tag)
}

/// Game lifecycle status. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    Paused,
    Over,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::Over => "over",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }
}

/// Discrete commands accepted by the game.
///
/// Movement commands are only honoured while the game is running; the
/// lifecycle commands are validated against the current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Force one gravity step now
    SoftDrop,
    /// Advance to the next rotation state
    Rotate,
    /// Pause when running, resume when paused
    TogglePause,
    /// Resume a paused game or restart a finished one
    Start,
    /// Re-initialize the game
    Restart,
}

impl Command {
    /// Parse a command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("softDrop"), Some(Command::SoftDrop));
    /// assert_eq!(Command::from_str("TOGGLEPAUSE"), Some(Command::TogglePause));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            "togglepause" => Some(Command::TogglePause),
            "start" => Some(Command::Start),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::TogglePause => "togglePause",
            Command::Start => "start",
            Command::Restart => "restart",
        }
    }

    /// Whether this command moves the active piece (only valid while running).
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            Command::MoveLeft | Command::MoveRight | Command::SoftDrop | Command::Rotate
        )
    }
}
