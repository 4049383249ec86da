//! Grid module - manages the board of numbered blocks
//!
//! The grid is a 6x10 board holding at most one block per cell. Row 0 is the
//! *bottom* row; rows grow upward as new rows are injected underneath.
//! Blocks keep a stable identity while their `row`/`col` mutate, so storage
//! is a fixed-capacity block list rather than a cell matrix.
//!
//! Settled-state invariants (restored by [`Grid::compact`] after removals):
//! - no two blocks share a `(row, col)`
//! - each column is occupied contiguously from row 0 upward (no gaps)

use arrayvec::ArrayVec;

use tui_sumstack_types::{BlockId, GRID_CELLS, GRID_COLS, GRID_ROWS};

use crate::block::Block;

/// The board: a fixed-capacity set of blocks, zero heap allocation.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    blocks: ArrayVec<Block, GRID_CELLS>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            blocks: ArrayVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All blocks, in insertion order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Look up a block by id
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Look up the block occupying `(row, col)`, if any
    pub fn block_at(&self, row: u8, col: u8) -> Option<&Block> {
        self.blocks.iter().find(|b| b.row == row && b.col == col)
    }

    /// Whether `(row, col)` is occupied
    pub fn occupied(&self, row: u8, col: u8) -> bool {
        self.block_at(row, col).is_some()
    }

    /// Add a block to the grid.
    ///
    /// The target cell must be free and within bounds.
    pub fn push(&mut self, block: Block) {
        debug_assert!(block.row < GRID_ROWS && block.col < GRID_COLS);
        debug_assert!(!self.occupied(block.row, block.col));
        self.blocks.push(block);
    }

    /// Remove every block whose id appears in `ids`
    pub fn remove_ids(&mut self, ids: &[BlockId]) {
        self.blocks.retain(|b| !ids.contains(&b.id));
    }

    /// Remove all blocks
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Apply gravity: per column, re-index surviving blocks to rows
    /// `0, 1, 2, ...` preserving their relative vertical order.
    ///
    /// This is a deterministic re-indexing, not iterative falling. Columns
    /// are independent; cross-column ordering is irrelevant.
    pub fn compact(&mut self) {
        for col in 0..GRID_COLS {
            let mut next_row = 0u8;
            // Ascending scan is stable by prior row. A moved block ends up at
            // next_row <= row, so it can never be visited twice.
            for row in 0..GRID_ROWS {
                if let Some(idx) = self
                    .blocks
                    .iter()
                    .position(|b| b.col == col && b.row == row)
                {
                    self.blocks[idx].row = next_row;
                    next_row += 1;
                }
            }
        }
        debug_assert!(self.is_settled());
    }

    /// Shift every block up one row.
    ///
    /// Callers must check [`Grid::overflowing`] first.
    pub fn shift_up(&mut self) {
        debug_assert!(!self.overflowing());
        for block in &mut self.blocks {
            block.row += 1;
        }
    }

    /// Whether any block sits at or above the injection overflow threshold.
    ///
    /// The threshold is `GRID_ROWS - 1`: one row of margin below the literal
    /// top. A grid in this state must not receive another row.
    pub fn overflowing(&self) -> bool {
        self.blocks.iter().any(|b| b.row >= GRID_ROWS - 1)
    }

    /// Check the settled-state invariants: unique cells and per-column
    /// contiguity from row 0.
    pub fn is_settled(&self) -> bool {
        for col in 0..GRID_COLS {
            let count = self.blocks.iter().filter(|b| b.col == col).count();
            for row in 0..count as u8 {
                let occupants = self
                    .blocks
                    .iter()
                    .filter(|b| b.col == col && b.row == row)
                    .count();
                if occupants != 1 {
                    return false;
                }
            }
        }
        true
    }
}
