//! Session - the single dispatch point between collaborators and the game.
//!
//! Commands and elapsed time both enter through `&mut GameSession`, and after
//! each call the queued events are forwarded to the sink followed by at most
//! one render.

use crate::events::{GameEvent, GameSink};
use crate::game_state::GameState;
use crate::rng::PieceSource;
use crate::snapshot::GameSnapshot;
use crate::types::Command;

pub struct GameSession<S: PieceSource, K: GameSink> {
    state: GameState<S>,
    sink: K,
    frame: GameSnapshot,
}

impl<S: PieceSource, K: GameSink> GameSession<S, K> {
    /// Wrap a game and publish its initial status, score and frame.
    pub fn new(mut state: GameState<S>, mut sink: K) -> Self {
        state.take_events();
        let frame = state.snapshot();
        sink.status_changed(state.status());
        sink.score_changed(state.score());
        sink.render(&frame);
        Self { state, sink, frame }
    }

    pub fn state(&self) -> &GameState<S> {
        &self.state
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    /// Last frame handed to the sink.
    pub fn frame(&self) -> &GameSnapshot {
        &self.frame
    }

    pub fn command(&mut self, command: Command) -> bool {
        let changed = self.state.apply(command);
        self.flush();
        changed
    }

    /// Forward elapsed time to the gravity timer. Returns the ticks performed.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let ticks = self.state.advance(elapsed_ms);
        self.flush();
        ticks
    }

    /// Hand the last frame to the sink again, e.g. after a terminal resize.
    pub fn redraw(&mut self) {
        self.sink.render(&self.frame);
    }

    pub fn into_parts(self) -> (GameState<S>, K) {
        (self.state, self.sink)
    }

    fn flush(&mut self) {
        let events = self.state.take_events();
        if events.is_empty() {
            return;
        }
        for event in &events {
            self.sink.event(event);
            match *event {
                GameEvent::StatusChanged(status) => self.sink.status_changed(status),
                GameEvent::ScoreChanged(score) => self.sink.score_changed(score),
                _ => {}
            }
        }
        self.state.snapshot_into(&mut self.frame);
        self.sink.render(&self.frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::events::RecordingSink;
    use crate::rng::SequenceSource;
    use crate::types::{GameStatus, PieceKind};

    fn session() -> GameSession<SequenceSource, RecordingSink> {
        let state = GameState::with_source(
            GameConfig::default(),
            SequenceSource::repeat(PieceKind::T),
        )
        .unwrap();
        GameSession::new(state, RecordingSink::default())
    }

    #[test]
    fn publishes_initial_state() {
        let s = session();
        assert_eq!(s.sink().statuses, vec![GameStatus::Running]);
        assert_eq!(s.sink().scores, vec![0]);
        assert_eq!(s.sink().frames.len(), 1);
        assert!(s.sink().events.is_empty());
    }

    #[test]
    fn rejected_command_does_not_render() {
        let mut s = session();
        for _ in 0..10 {
            s.command(Command::MoveLeft);
        }
        let frames = s.sink().frames.len();
        assert!(!s.command(Command::MoveLeft));
        assert_eq!(s.sink().frames.len(), frames);
    }

    #[test]
    fn one_render_per_state_change() {
        let mut s = session();
        assert!(s.command(Command::MoveRight));
        assert_eq!(s.sink().frames.len(), 2);
        assert_eq!(s.sink().frames[1].active.col, 5);

        assert_eq!(s.advance(1000), 2);
        assert_eq!(s.sink().frames.len(), 3);
        assert_eq!(s.frame().active.row, 2);
    }

    #[test]
    fn pause_is_reported_to_status_sink() {
        let mut s = session();
        s.command(Command::TogglePause);
        s.command(Command::TogglePause);
        assert_eq!(
            s.sink().statuses,
            vec![GameStatus::Running, GameStatus::Paused, GameStatus::Running]
        );
    }
}
