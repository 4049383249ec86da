//! Block data - a single numbered, colored unit occupying one grid cell.

use tui_sumstack_types::{BlockColor, BlockId, BLOCK_MAX, BLOCK_MIN, GRID_COLS};

/// A single block on the grid.
///
/// `id` is stable for the lifetime of the block; `row`/`col` mutate as
/// gravity and row injection reposition it. `color` is cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub value: u8,
    /// Row index, 0 = bottom.
    pub row: u8,
    pub col: u8,
    pub color: BlockColor,
}

impl Block {
    pub fn new(id: BlockId, value: u8, row: u8, col: u8, color: BlockColor) -> Self {
        debug_assert!((BLOCK_MIN..=BLOCK_MAX).contains(&value));
        debug_assert!(col < GRID_COLS);
        Self {
            id,
            value,
            row,
            col,
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_identity_survives_moves() {
        let mut block = Block::new(BlockId::new(1), 5, 0, 2, BlockColor::Sky);
        block.row = 7;
        assert_eq!(block.id, BlockId::new(1));
        assert_eq!(block.value, 5);
        assert_eq!(block.col, 2);
    }
}
