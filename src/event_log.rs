//! JSON-lines event log.
//!
//! One record per [`GameEvent`], appended as a single line of JSON. Enabled
//! with `BLOCKFALL_LOG_PATH`.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::core::{GameEvent, GameSink};
use crate::types::GameStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub seq: u64,
    pub event: &'static str,
    /// Lowercase piece letter, as in `PieceKind::as_str`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines_cleared: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_delta: Option<u32>,
    pub score: u32,
    pub status: &'static str,
}

impl EventRecord {
    /// Build a record. `score` and `status` are the values after the event.
    pub fn new(seq: u64, event: &GameEvent, score: u32, status: GameStatus) -> Self {
        let mut record = Self {
            seq,
            event: event.name(),
            kind: None,
            next: None,
            col: None,
            row: None,
            rotation: None,
            lines_cleared: None,
            score_delta: None,
            score,
            status: status.as_str(),
        };
        match *event {
            GameEvent::Moved { col, row } => {
                record.col = Some(col);
                record.row = Some(row);
            }
            GameEvent::Rotated { rotation } => record.rotation = Some(rotation),
            GameEvent::Locked {
                kind,
                lines_cleared,
                score_delta,
            } => {
                record.kind = Some(kind.as_str());
                record.lines_cleared = Some(lines_cleared);
                record.score_delta = Some(score_delta);
            }
            GameEvent::Spawned { kind, next } => {
                record.kind = Some(kind.as_str());
                record.next = Some(next.as_str());
            }
            GameEvent::StatusChanged(_) | GameEvent::ScoreChanged(_) | GameEvent::Restarted => {}
        }
        record
    }
}

/// Sink that appends every event to a writer as JSON lines.
///
/// A write error pauses logging until it is collected with
/// [`EventLog::take_error`]; the game itself keeps running.
pub struct EventLog<W: Write> {
    out: W,
    seq: u64,
    score: u32,
    status: GameStatus,
    buf: Vec<u8>,
    error: Option<io::Error>,
}

impl EventLog<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            seq: 0,
            score: 0,
            status: GameStatus::Running,
            buf: Vec::with_capacity(256),
            error: None,
        }
    }

    /// Records written so far.
    pub fn written(&self) -> u64 {
        self.seq
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn append(&mut self, event: &GameEvent) -> io::Result<()> {
        let record = EventRecord::new(self.seq, event, self.score, self.status);
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, &record)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        self.seq += 1;
        Ok(())
    }
}

impl<W: Write> GameSink for EventLog<W> {
    fn status_changed(&mut self, status: GameStatus) {
        self.status = status;
    }

    fn score_changed(&mut self, score: u32) {
        self.score = score;
    }

    fn event(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::StatusChanged(status) => self.status = status,
            GameEvent::ScoreChanged(score) => self.score = score,
            _ => {}
        }
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.append(event) {
            self.error = Some(err);
        }
    }
}
