//! Game state module - the game state machine
//!
//! Ties together the board, the active piece, the piece source, scoring and
//! the gravity timer. The lifecycle is `Running <-> Paused`, `Running -> Over`,
//! and `restart` from any status back to `Running`.
//!
//! Every mutation goes through `&mut self`, so a gravity tick and a player
//! command can never interleave: each call runs its whole
//! move/lock/clear/spawn sequence before returning.

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::events::GameEvent;
use crate::piece::ActivePiece;
use crate::rng::{PieceSource, UniformSource};
use crate::scoring::clear_full_rows;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::timer::GravityTimer;
use crate::types::{Command, GameStatus, PieceKind};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformSource> {
    config: GameConfig,
    board: Board,
    active: ActivePiece,
    next: PieceKind,
    source: S,
    score: u32,
    lines: u32,
    status: GameStatus,
    gravity: GravityTimer,
    /// Pending events, drained by the session after each call.
    events: Vec<GameEvent>,
}

impl GameState<UniformSource> {
    /// New running game with a uniform piece source seeded from `config.seed`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_source(config, UniformSource::new(config.seed))
    }
}

impl<S: PieceSource> GameState<S> {
    pub fn with_source(config: GameConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.width, config.height)?;
        Ok(Self::assemble(config, board, source))
    }

    /// Start a game on a pre-populated board.
    ///
    /// The first piece spawns onto `board` as-is; if it collides the game
    /// starts out `Over`.
    pub fn with_board(board: Board, source: S, fall_interval_ms: u32) -> Result<Self, ConfigError> {
        let config = GameConfig {
            width: board.width(),
            height: board.height(),
            fall_interval_ms,
            seed: 0,
        };
        config.validate()?;
        Ok(Self::assemble(config, board, source))
    }

    fn assemble(config: GameConfig, board: Board, mut source: S) -> Self {
        let first = source.next_kind();
        let next = source.next_kind();
        let active = ActivePiece::spawn(first, &board);

        let mut state = Self {
            config,
            board,
            active,
            next,
            source,
            score: 0,
            lines: 0,
            status: GameStatus::Running,
            gravity: GravityTimer::new(config.fall_interval_ms),
            events: Vec::new(),
        };
        state.gravity.arm();
        if state.active.collides(&state.board) {
            state.finish();
        }
        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn gravity(&self) -> &GravityTimer {
        &self.gravity
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Take all events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        self.board.write_tags(&mut out.board);
        out.active = ActiveSnapshot::from(self.active);
        out.next = self.next;
        out.score = self.score;
        out.lines = self.lines;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut board = Vec::with_capacity(self.board.cells().len());
        self.board.write_tags(&mut board);
        GameSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            board,
            active: ActiveSnapshot::from(self.active),
            next: self.next,
            score: self.score,
            lines: self.lines,
            status: self.status,
        }
    }

    /// Apply a player command. Returns true if the game changed.
    pub fn apply(&mut self, command: Command) -> bool {
        if command.is_movement() && !self.status.is_running() {
            return false;
        }
        match command {
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::SoftDrop => self.soft_drop(),
            Command::Rotate => self.rotate(),
            Command::TogglePause => self.toggle_pause(),
            Command::Start => self.start(),
            Command::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Feed elapsed time to the gravity timer and run every tick that came due.
    ///
    /// Returns the number of gravity ticks performed. Ticking stops as soon
    /// as the game leaves `Running`.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.gravity.advance(elapsed_ms);
        let mut ticks = 0;
        while self.status.is_running() && self.gravity.fire() {
            self.gravity_step();
            ticks += 1;
        }
        ticks
    }

    /// One gravity tick: fall one row, or lock, clear and respawn.
    pub fn tick(&mut self) -> bool {
        if !self.status.is_running() {
            return false;
        }
        self.gravity_step();
        true
    }

    /// Shift the active piece. Rejected when not running or when it would collide.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if !self.status.is_running() {
            return false;
        }
        if !self.active.try_move(dx, dy, &self.board) {
            return false;
        }
        self.events.push(GameEvent::Moved {
            col: self.active.col,
            row: self.active.row,
        });
        true
    }

    pub fn rotate(&mut self) -> bool {
        if !self.status.is_running() {
            return false;
        }
        if !self.active.try_rotate(&self.board) {
            return false;
        }
        self.events.push(GameEvent::Rotated {
            rotation: self.active.rotation,
        });
        true
    }

    /// Same as a gravity tick, but immediate. The timer countdown is not reset.
    pub fn soft_drop(&mut self) -> bool {
        self.tick()
    }

    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        self.gravity.disarm();
        self.set_status(GameStatus::Paused);
        true
    }

    /// Resume a paused game. The fall countdown restarts from zero.
    pub fn resume(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.gravity.arm();
        self.set_status(GameStatus::Running);
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Running => self.pause(),
            GameStatus::Paused => self.resume(),
            GameStatus::Over => false,
        }
    }

    /// Resume when paused, restart when over, nothing when already running.
    pub fn start(&mut self) -> bool {
        match self.status {
            GameStatus::Running => false,
            GameStatus::Paused => self.resume(),
            GameStatus::Over => {
                self.restart();
                true
            }
        }
    }

    /// Clear the board and score and spawn the previewed piece.
    pub fn restart(&mut self) {
        self.board.clear();
        self.lines = 0;
        if self.score != 0 {
            self.score = 0;
            self.events.push(GameEvent::ScoreChanged(0));
        }
        self.gravity.arm();
        self.set_status(GameStatus::Running);
        self.events.push(GameEvent::Restarted);
        self.spawn_next();
    }

    fn gravity_step(&mut self) {
        if self.active.try_move(0, 1, &self.board) {
            self.events.push(GameEvent::Moved {
                col: self.active.col,
                row: self.active.row,
            });
            return;
        }
        self.lock_active();
    }

    fn lock_active(&mut self) {
        let kind = self.active.kind;
        self.active.lock(&mut self.board);

        let cleared = clear_full_rows(&mut self.board);
        self.lines += cleared.lines() as u32;
        self.events.push(GameEvent::Locked {
            kind,
            lines_cleared: cleared.lines() as u32,
            score_delta: cleared.score,
        });
        if cleared.score > 0 {
            self.score += cleared.score;
            self.events.push(GameEvent::ScoreChanged(self.score));
        }

        self.spawn_next();
    }

    /// Promote the previewed kind and pick a fresh preview.
    fn spawn_next(&mut self) {
        let kind = self.next;
        self.next = self.source.next_kind();
        self.active = ActivePiece::spawn(kind, &self.board);
        self.events.push(GameEvent::Spawned {
            kind,
            next: self.next,
        });

        if self.active.collides(&self.board) {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.gravity.disarm();
        self.set_status(GameStatus::Over);
    }

    fn set_status(&mut self, status: GameStatus) {
        if self.status != status {
            self.status = status;
            self.events.push(GameEvent::StatusChanged(status));
        }
    }
}
