//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CellSnapshot, GameSnapshot};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{BlockColor, GameMode, GameStatus, GRID_COLS, GRID_ROWS};

/// Terminal viewport dimensions.
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

/// A lightweight terminal view for the number-matching board.
///
/// Grid row 0 is the bottom row, so rows are drawn top-down from index
/// `GRID_ROWS - 1`.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x1 leaves room for cursor brackets around each digit.
        Self {
            cell_w: 4,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes. The
    /// cursor is drawn only while a game is in progress.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<(u8, u8)>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default());

        let board_px_w = (GRID_COLS as u16) * self.cell_w;
        let board_px_h = (GRID_ROWS as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = Style::new(Rgb::new(80, 80, 90), Rgb::new(24, 24, 32));
        let border = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        // Background for the play area.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);

        // Border.
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Blocks, top row first so the frame reads top-down.
        for row in (0..GRID_ROWS).rev() {
            for col in 0..GRID_COLS {
                if let Some(cell) = snap.block_at(row, col) {
                    self.draw_block(fb, start_x, start_y, row, col, &cell);
                }
            }
        }

        // Cursor brackets around the hovered cell.
        if snap.status == GameStatus::Playing {
            if let Some((row, col)) = cursor {
                self.draw_cursor(fb, start_x, start_y, row, col);
            }
        }

        // Side panel (target/sum/score).
        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        // Overlays.
        match snap.status {
            GameStatus::Menu => {
                self.draw_menu_overlay(fb, start_x, start_y, frame_w, frame_h);
            }
            GameStatus::GameOver => {
                self.draw_game_over_overlay(fb, snap, start_x, start_y, frame_w, frame_h);
            }
            GameStatus::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<(u8, u8)>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    /// Terminal column of the left edge of a grid cell.
    fn cell_px(&self, start_x: u16, col: u8) -> u16 {
        start_x + 1 + (col as u16) * self.cell_w
    }

    /// Terminal row of a grid cell. Row 0 lands at the bottom of the frame.
    fn cell_py(&self, start_y: u16, row: u8) -> u16 {
        start_y + 1 + ((GRID_ROWS - 1 - row) as u16) * self.cell_h
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u8,
        col: u8,
        cell: &CellSnapshot,
    ) {
        let color = color_rgb(cell.color);
        let style = if cell.selected {
            // Selected blocks render inverted.
            Style::new(Rgb::new(10, 10, 10), color).bold()
        } else {
            Style::new(color, Rgb::new(24, 24, 32)).bold()
        };

        let px = self.cell_px(start_x, col);
        let py = self.cell_py(start_y, row);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px + 1, py, digit_char(cell.value), style);
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u8, col: u8) {
        if row >= GRID_ROWS || col >= GRID_COLS {
            return;
        }
        let px = self.cell_px(start_x, col);
        let py = self.cell_py(start_y, row);

        // Keep the cell's own background so selection stays visible.
        let base = fb
            .get(px, py)
            .map(|c| c.style)
            .unwrap_or_default();
        let style = Style {
            fg: Rgb::new(255, 255, 255),
            ..base
        };
        fb.put_char(px, py, '[', style);
        fb.put_char(px + self.cell_w - 1, py, ']', style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 8 {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "TARGET", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.target_sum, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SUM", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.current_sum, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MODE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.mode.as_str(), value);
        y = y.saturating_add(2);

        if snap.mode == GameMode::Timed && snap.status == GameStatus::Playing {
            fb.put_str(panel_x, y, "TIME", label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, snap.time_left, value);
        }
    }

    fn draw_menu_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        self.put_centered(fb, start_x, frame_w, mid_y.saturating_sub(1), "SUMSTACK");
        self.put_centered(fb, start_x, frame_w, mid_y.saturating_add(1), "1 CLASSIC");
        self.put_centered(fb, start_x, frame_w, mid_y.saturating_add(2), "2 TIMED");
    }

    fn draw_game_over_overlay(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        self.put_centered(fb, start_x, frame_w, mid_y, "GAME OVER");

        let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let x = start_x.saturating_add(frame_w.saturating_sub(11) / 2);
        fb.put_str(x, mid_y.saturating_add(1), "SCORE ", style);
        fb.put_u32(x + 6, mid_y.saturating_add(1), snap.score, style);
    }

    fn put_centered(&self, fb: &mut FrameBuffer, start_x: u16, frame_w: u16, y: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, y, text, style);
    }
}

fn digit_char(value: u8) -> char {
    debug_assert!(value <= 9);
    (b'0' + (value % 10)) as char
}

/// Terminal colors for the block palette.
fn color_rgb(color: BlockColor) -> Rgb {
    match color {
        BlockColor::Rose => Rgb::new(244, 114, 130),
        BlockColor::Sky => Rgb::new(86, 190, 240),
        BlockColor::Emerald => Rgb::new(80, 210, 140),
        BlockColor::Amber => Rgb::new(250, 190, 70),
        BlockColor::Violet => Rgb::new(170, 130, 250),
        BlockColor::Indigo => Rgb::new(120, 130, 245),
    }
}
