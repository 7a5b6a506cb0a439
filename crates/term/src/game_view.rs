//! GameView: draws a [`GameSnapshot`] into a [`FrameBuffer`].
//!
//! Pure, no I/O. Board dimensions come from the snapshot, so any validated
//! board size renders.

use crate::core::{shape_at, GameSnapshot, Shape};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{GameStatus, PieceKind};

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb::new(24, 24, 32);
const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const EMPTY: Style = Style::new(Rgb::new(70, 70, 85), WELL_BG).dim();
const LABEL: Style = Style::new(Rgb::new(230, 230, 230), Rgb::new(0, 0, 0)).bold();
const VALUE: Style = Style::PLAIN;
const BANNER: Style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

/// Color of a piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(190, 110, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(225, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 225),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Terminal columns per board cell. 2 keeps cells roughly square.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

/// Where the well landed on screen; returned for tests and overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WellRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Draw into a reused buffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> WellRect {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::BLANK);

        let well = WellRect {
            x: 0,
            y: 0,
            w: snap.width.saturating_mul(self.cell_w).saturating_add(2),
            h: snap.height.saturating_add(2),
        };
        let panel_w = 14;
        let total_w = well.w.saturating_add(2 + panel_w);
        let well = WellRect {
            x: viewport.width.saturating_sub(total_w) / 2,
            y: viewport.height.saturating_sub(well.h) / 2,
            ..well
        };

        draw_border(fb, well);

        for row in 0..snap.height {
            for col in 0..snap.width {
                match PieceKind::from_tag(snap.cell(col as usize, row as usize)) {
                    Some(kind) => self.draw_block(fb, well, col as i32, row as i32, kind),
                    None => self.draw_cell(fb, well, col as i32, row as i32, Glyph::new('·', EMPTY)),
                }
            }
        }

        let active = &snap.active;
        for (dc, dr) in active.shape.minos() {
            self.draw_block(fb, well, active.col + dc, active.row + dr, active.kind);
        }

        self.draw_panel(fb, snap, well.x.saturating_add(well.w).saturating_add(2), well.y);

        match snap.status {
            GameStatus::Paused => draw_banner(fb, well, "PAUSED"),
            GameStatus::Over => draw_banner(fb, well, "GAME OVER"),
            GameStatus::Running => {}
        }
        well
    }

    fn draw_block(&self, fb: &mut FrameBuffer, well: WellRect, col: i32, row: i32, kind: PieceKind) {
        let style = Style::new(piece_color(kind), WELL_BG).bold();
        self.draw_cell(fb, well, col, row, Glyph::new('█', style));
    }

    /// Cells above the visible top (row < 0) are skipped.
    fn draw_cell(&self, fb: &mut FrameBuffer, well: WellRect, col: i32, row: i32, glyph: Glyph) {
        let (Ok(col), Ok(row)) = (u16::try_from(col), u16::try_from(row)) else {
            return;
        };
        if row.saturating_add(2) > well.h
            || (col.saturating_add(1)).saturating_mul(self.cell_w).saturating_add(2) > well.w
        {
            return;
        }
        let x = well.x + 1 + col * self.cell_w;
        fb.fill_rect(x, well.y + 1 + row, self.cell_w, 1, glyph);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        fb.put_str(x, y, "SCORE", LABEL);
        fb.put_u32(x, y + 1, snap.score, VALUE);

        fb.put_str(x, y + 3, "LINES", LABEL);
        fb.put_u32(x, y + 4, snap.lines, VALUE);

        fb.put_str(x, y + 6, "NEXT", LABEL);
        self.draw_preview(fb, shape_at(snap.next, 0), x, y + 7);

        fb.put_str(x, y + 11, "STATUS", LABEL);
        fb.put_str(x, y + 12, snap.status.as_str(), VALUE);

        let help = Style::PLAIN.dim();
        fb.put_str(x, y + 14, "←→ move  ↑ rot", help);
        fb.put_str(x, y + 15, "↓ drop  spc pause", help);
        fb.put_str(x, y + 16, "s start r reset", help);
        fb.put_str(x, y + 17, "q quit", help);
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, shape: &Shape, x: u16, y: u16) {
        let style = Style::new(piece_color(shape.kind()), Rgb::new(0, 0, 0)).bold();
        for (dc, dr) in shape.minos() {
            let px = x.saturating_add(dc as u16 * self.cell_w);
            fb.fill_rect(px, y + dr as u16, self.cell_w, 1, Glyph::new('█', style));
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, r: WellRect) {
    if r.w < 2 || r.h < 2 {
        return;
    }
    let (right, bottom) = (r.x + r.w - 1, r.y + r.h - 1);
    fb.fill_rect(r.x + 1, r.y, r.w - 2, 1, Glyph::new('─', BORDER));
    fb.fill_rect(r.x + 1, bottom, r.w - 2, 1, Glyph::new('─', BORDER));
    fb.fill_rect(r.x, r.y + 1, 1, r.h - 2, Glyph::new('│', BORDER));
    fb.fill_rect(right, r.y + 1, 1, r.h - 2, Glyph::new('│', BORDER));
    fb.put_char(r.x, r.y, '┌', BORDER);
    fb.put_char(right, r.y, '┐', BORDER);
    fb.put_char(r.x, bottom, '└', BORDER);
    fb.put_char(right, bottom, '┘', BORDER);
}

fn draw_banner(fb: &mut FrameBuffer, well: WellRect, text: &str) {
    let len = text.chars().count() as u16;
    let x = well.x.saturating_add(well.w.saturating_sub(len) / 2);
    fb.put_str(x, well.y.saturating_add(well.h / 2), text, BANNER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GameState, SequenceSource};
    use crate::types::Command;

    fn snapshot() -> GameSnapshot {
        GameState::with_source(GameConfig::default(), SequenceSource::repeat(PieceKind::O))
            .unwrap()
            .snapshot()
    }

    #[test]
    fn well_is_bordered_and_sized_from_snapshot() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(0, 0);
        let well = view.render_into(&snapshot(), Viewport::new(80, 24), &mut fb);
        assert_eq!((well.w, well.h), (22, 22));
        assert_eq!(fb.get(well.x, well.y).map(|g| g.ch), Some('┌'));
        assert_eq!(
            fb.get(well.x + well.w - 1, well.y + well.h - 1).map(|g| g.ch),
            Some('┘')
        );
    }

    #[test]
    fn active_piece_is_drawn_at_its_cells() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(0, 0);
        let well = view.render_into(&snapshot(), Viewport::new(80, 24), &mut fb);
        // O spawns at column 4, rows 0 and 1.
        for row in 0..2 {
            for col in 4..6 {
                let x = well.x + 1 + col * 2;
                let glyph = fb.get(x, well.y + 1 + row).unwrap();
                assert_eq!(glyph.ch, '█');
                assert_eq!(glyph.style.fg, piece_color(PieceKind::O));
            }
        }
        assert_eq!(fb.get(well.x + 1, well.y + 1).map(|g| g.ch), Some('·'));
    }

    #[test]
    fn panel_shows_score_and_paused_banner() {
        let mut game =
            GameState::with_source(GameConfig::default(), SequenceSource::repeat(PieceKind::T))
                .unwrap();
        game.apply(Command::TogglePause);
        let fb = GameView::default().render(&game.snapshot(), Viewport::new(80, 24));
        let text: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        assert!(text.iter().any(|row| row.contains("SCORE")));
        assert!(text.iter().any(|row| row.contains("PAUSED")));
        assert!(text.iter().any(|row| row.contains("paused")));
    }

    #[test]
    fn oversized_board_does_not_overflow_layout() {
        let mut snap = snapshot();
        snap.width = 40_000;
        snap.height = 4;
        snap.board = vec![0; 40_000 * 4];
        let mut fb = FrameBuffer::new(0, 0);
        let well = GameView::default().render_into(&snap, Viewport::new(80, 24), &mut fb);
        assert_eq!((well.x, well.w), (0, u16::MAX));
        assert_eq!(fb.get(0, well.y).map(|g| g.ch), Some('┌'));
    }

    #[test]
    fn small_viewport_does_not_panic() {
        let fb = GameView::default().render(&snapshot(), Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
