//! Game events and the sink interface for presentation collaborators.

use crate::snapshot::GameSnapshot;
use crate::types::{GameStatus, PieceKind};

/// Something observable that happened inside the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Moved { col: i32, row: i32 },
    Rotated { rotation: usize },
    Locked {
        kind: PieceKind,
        lines_cleared: u32,
        score_delta: u32,
    },
    Spawned { kind: PieceKind, next: PieceKind },
    StatusChanged(GameStatus),
    ScoreChanged(u32),
    Restarted,
}

impl GameEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::Moved { .. } => "moved",
            GameEvent::Rotated { .. } => "rotated",
            GameEvent::Locked { .. } => "locked",
            GameEvent::Spawned { .. } => "spawned",
            GameEvent::StatusChanged(_) => "status",
            GameEvent::ScoreChanged(_) => "score",
            GameEvent::Restarted => "restarted",
        }
    }
}

/// Receiver for render, status and score notifications.
///
/// Every method defaults to doing nothing, so a sink only implements what it
/// displays.
pub trait GameSink {
    /// Called once after any operation that changed the game.
    fn render(&mut self, _snapshot: &GameSnapshot) {}

    fn status_changed(&mut self, _status: GameStatus) {}

    fn score_changed(&mut self, _score: u32) {}

    /// Raw event stream, in emission order.
    fn event(&mut self, _event: &GameEvent) {}
}

/// Sink that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl GameSink for NullSink {}

impl<T: GameSink + ?Sized> GameSink for &mut T {
    fn render(&mut self, snapshot: &GameSnapshot) {
        (**self).render(snapshot)
    }

    fn status_changed(&mut self, status: GameStatus) {
        (**self).status_changed(status)
    }

    fn score_changed(&mut self, score: u32) {
        (**self).score_changed(score)
    }

    fn event(&mut self, event: &GameEvent) {
        (**self).event(event)
    }
}

impl<T: GameSink> GameSink for Option<T> {
    fn render(&mut self, snapshot: &GameSnapshot) {
        if let Some(sink) = self {
            sink.render(snapshot);
        }
    }

    fn status_changed(&mut self, status: GameStatus) {
        if let Some(sink) = self {
            sink.status_changed(status);
        }
    }

    fn score_changed(&mut self, score: u32) {
        if let Some(sink) = self {
            sink.score_changed(score);
        }
    }

    fn event(&mut self, event: &GameEvent) {
        if let Some(sink) = self {
            sink.event(event);
        }
    }
}

/// Fan out to two sinks, first `A` then `B`.
impl<A: GameSink, B: GameSink> GameSink for (A, B) {
    fn render(&mut self, snapshot: &GameSnapshot) {
        self.0.render(snapshot);
        self.1.render(snapshot);
    }

    fn status_changed(&mut self, status: GameStatus) {
        self.0.status_changed(status);
        self.1.status_changed(status);
    }

    fn score_changed(&mut self, score: u32) {
        self.0.score_changed(score);
        self.1.score_changed(score);
    }

    fn event(&mut self, event: &GameEvent) {
        self.0.event(event);
        self.1.event(event);
    }
}

/// Sink that records everything it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub frames: Vec<GameSnapshot>,
    pub statuses: Vec<GameStatus>,
    pub scores: Vec<u32>,
    pub events: Vec<GameEvent>,
}

impl GameSink for RecordingSink {
    fn render(&mut self, snapshot: &GameSnapshot) {
        self.frames.push(snapshot.clone());
    }

    fn status_changed(&mut self, status: GameStatus) {
        self.statuses.push(status);
    }

    fn score_changed(&mut self, score: u32) {
        self.scores.push(score);
    }

    fn event(&mut self, event: &GameEvent) {
        self.events.push(*event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_forwards_to_both_and_none_is_silent() {
        let mut pair = (RecordingSink::default(), Some(RecordingSink::default()));
        pair.score_changed(30);
        pair.event(&GameEvent::Restarted);
        assert_eq!(pair.0.scores, vec![30]);
        assert_eq!(pair.1.as_ref().map(|s| s.events.len()), Some(1));

        let mut none: Option<RecordingSink> = None;
        none.status_changed(GameStatus::Over);
        assert!(none.is_none());
    }

    #[test]
    fn event_names_are_stable() {
        assert_eq!(GameEvent::ScoreChanged(0).name(), "score");
        assert_eq!(
            GameEvent::Spawned {
                kind: PieceKind::I,
                next: PieceKind::O
            }
            .name(),
            "spawned"
        );
    }
}
