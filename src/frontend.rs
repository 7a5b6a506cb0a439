//! Terminal sink: draws every published frame.

use std::io::Write;

use anyhow::Result;

use crate::core::{GameSink, GameSnapshot};
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

pub struct TerminalSink<W: Write> {
    renderer: TerminalRenderer<W>,
    view: GameView,
    frame: FrameBuffer,
    viewport: Viewport,
    error: Option<anyhow::Error>,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(renderer: TerminalRenderer<W>, viewport: Viewport) -> Self {
        Self {
            renderer,
            view: GameView::default(),
            frame: FrameBuffer::new(viewport.width, viewport.height),
            viewport,
            error: None,
        }
    }

    /// New terminal size; the next frame is a full redraw.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.renderer.invalidate();
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer<W> {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> TerminalRenderer<W> {
        self.renderer
    }

    /// First draw failure since the last call, if any.
    pub fn take_error(&mut self) -> Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.view
            .render_into(snapshot, self.viewport, &mut self.frame);
        self.renderer.present(&mut self.frame)
    }
}

impl<W: Write> GameSink for TerminalSink<W> {
    fn render(&mut self, snapshot: &GameSnapshot) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.draw(snapshot) {
            self.error = Some(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GameSession, GameState, SequenceSource};
    use crate::types::{Command, PieceKind};

    #[test]
    fn frames_reach_the_writer() {
        let renderer = TerminalRenderer::with_writer(Vec::new());
        let sink = TerminalSink::new(renderer, Viewport::new(60, 24));
        let state =
            GameState::with_source(GameConfig::default(), SequenceSource::repeat(PieceKind::T))
                .unwrap();
        let mut session = GameSession::new(state, sink);
        let initial = session.sink_mut().renderer_mut().writer().len();
        assert!(initial > 0);

        session.command(Command::MoveLeft);
        session.sink_mut().take_error().unwrap();
        assert!(session.sink_mut().renderer_mut().writer().len() > initial);
    }
}
