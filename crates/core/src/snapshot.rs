//! Read-only state snapshot consumed by the presentation layer.

use tui_sumstack_types::{
    BlockColor, BlockId, GameMode, GameStatus, GRID_COLS, GRID_ROWS,
};

/// One occupied cell as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSnapshot {
    pub id: BlockId,
    pub value: u8,
    pub color: BlockColor,
    pub selected: bool,
}

/// Cell matrix indexed `[row][col]`, row 0 = bottom.
pub type CellGrid = [[Option<CellSnapshot>; GRID_COLS as usize]; GRID_ROWS as usize];

/// Complete render-facing state. Plain `Copy` data; filling one allocates
/// nothing, so a single snapshot buffer can be reused every frame.
///
/// `current_sum` is derived from the selection and never authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub cells: CellGrid,
    pub target_sum: u32,
    pub current_sum: u32,
    pub score: u32,
    pub status: GameStatus,
    pub mode: GameMode,
    /// Seconds left in the current timed-mode round. Filled by the session
    /// controller; the core itself owns no timer.
    pub time_left: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cells = [[None; GRID_COLS as usize]; GRID_ROWS as usize];
        self.target_sum = 0;
        self.current_sum = 0;
        self.score = 0;
        self.status = GameStatus::Menu;
        self.mode = GameMode::Classic;
        self.time_left = 0;
    }

    pub fn playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Cell lookup, `None` when empty or out of bounds.
    pub fn block_at(&self, row: u8, col: u8) -> Option<CellSnapshot> {
        if row >= GRID_ROWS || col >= GRID_COLS {
            return None;
        }
        self.cells[row as usize][col as usize]
    }

    /// Number of occupied cells
    pub fn block_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [[None; GRID_COLS as usize]; GRID_ROWS as usize],
            target_sum: 0,
            current_sum: 0,
            score: 0,
            status: GameStatus::Menu,
            mode: GameMode::Classic,
            time_left: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_empty_menu() {
        let snap = GameSnapshot::default();
        assert_eq!(snap.status, GameStatus::Menu);
        assert_eq!(snap.block_count(), 0);
        assert!(!snap.playing());
        assert!(snap.block_at(0, 0).is_none());
        // Out of bounds is a clean None, not a panic.
        assert!(snap.block_at(GRID_ROWS, 0).is_none());
        assert!(snap.block_at(0, GRID_COLS).is_none());
    }
}
