//! Terminal blockfall runner.
//!
//! Reads keys with crossterm, feeds elapsed wall-clock time to the gravity
//! timer and draws through the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::config::AppConfig;
use blockfall::core::{GameSession, GameSink, GameState, PieceSource};
use blockfall::event_log::EventLog;
use blockfall::frontend::TerminalSink;
use blockfall::input::{command_for_key, should_quit};
use blockfall::term::{TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let state = GameState::new(config.game).context("invalid game configuration")?;
    let log = match &config.log_path {
        Some(path) => {
            Some(EventLog::open(path).with_context(|| format!("cannot open event log {path}"))?)
        }
        None => None,
    };

    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let sink = (TerminalSink::new(renderer, Viewport::new(w, h)), log);
    let mut session = GameSession::new(state, sink);

    let result = run(&mut session);

    let (state, (terminal, log)) = session.into_parts();
    // Always try to restore terminal state.
    let _ = terminal.into_renderer().exit();

    if let Some(mut log) = log {
        if let Some(err) = log.take_error() {
            eprintln!("[blockfall] event log write failed: {err}");
        }
        log.flush().context("flushing event log")?;
        eprintln!("[blockfall] {} events logged", log.written());
    }
    eprintln!(
        "[blockfall] {} - score {}, lines {}",
        state.status().as_str(),
        state.score(),
        state.lines()
    );
    result
}

fn run<S, L>(session: &mut GameSession<S, (TerminalSink<std::io::Stdout>, L)>) -> Result<()>
where
    S: PieceSource,
    L: GameSink,
{
    let frame = Duration::from_millis(u64::from(FRAME_MS));
    let mut last = Instant::now();

    loop {
        session.sink_mut().0.take_error()?;

        let timeout = frame.saturating_sub(last.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = command_for_key(key) {
                        session.command(command);
                    }
                }
                Event::Resize(w, h) => {
                    session.sink_mut().0.resize(Viewport::new(w, h));
                    session.redraw();
                }
                _ => {}
            }
        }

        let elapsed = last.elapsed();
        let elapsed_ms = elapsed.as_millis().min(u128::from(u32::MAX)) as u32;
        if elapsed_ms > 0 {
            // Carry the sub-millisecond remainder into the next frame.
            last += Duration::from_millis(u64::from(elapsed_ms));
            session.advance(elapsed_ms);
        }
    }
}
