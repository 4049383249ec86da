//! Grid selection cursor.
//!
//! The terminal has no mouse-driven block picking, so selection happens
//! through a cursor clamped to the grid. Row 0 is the bottom row, matching
//! the core's coordinate system, so `Up` increases the row index.

use tui_sumstack_types::{GRID_COLS, GRID_ROWS};

/// A cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
}

/// Current cursor cell. Clamped to the grid; moves at an edge are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: u8,
    pub col: u8,
}

impl Cursor {
    /// Start at the bottom-left cell.
    pub fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    pub fn apply(&mut self, mv: CursorMove) {
        match mv {
            CursorMove::Up => {
                if self.row + 1 < GRID_ROWS {
                    self.row += 1;
                }
            }
            CursorMove::Down => {
                self.row = self.row.saturating_sub(1);
            }
            CursorMove::Left => {
                self.col = self.col.saturating_sub(1);
            }
            CursorMove::Right => {
                if self.col + 1 < GRID_COLS {
                    self.col += 1;
                }
            }
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_grid() {
        let mut cursor = Cursor::new();
        cursor.apply(CursorMove::Up);
        cursor.apply(CursorMove::Right);
        assert_eq!(cursor, Cursor { row: 1, col: 1 });

        cursor.apply(CursorMove::Down);
        cursor.apply(CursorMove::Left);
        assert_eq!(cursor, Cursor { row: 0, col: 0 });
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let mut cursor = Cursor::new();
        cursor.apply(CursorMove::Down);
        cursor.apply(CursorMove::Left);
        assert_eq!(cursor, Cursor { row: 0, col: 0 });

        for _ in 0..20 {
            cursor.apply(CursorMove::Up);
            cursor.apply(CursorMove::Right);
        }
        assert_eq!(
            cursor,
            Cursor {
                row: GRID_ROWS - 1,
                col: GRID_COLS - 1
            }
        );
    }
}
