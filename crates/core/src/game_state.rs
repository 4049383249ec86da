//! Game state module - the board engine
//!
//! Owns the grid, the selection, the target sum, and the score, and executes
//! the match/clear/compact/inject cycle. Every mutation is synchronous: the
//! sum is evaluated against the target at the end of each toggle, before any
//! other effect, so there is no reactive recomputation and no partial state
//! is ever observable.
//!
//! The engine performs no I/O and owns no timer; timed-mode scheduling lives
//! in the session controller, which calls [`GameState::inject_row`] when its
//! round timer fires.

use arrayvec::ArrayVec;

use tui_sumstack_types::{
    BlockColor, BlockId, GameMode, GameStatus, BLOCK_MAX, BLOCK_MIN, BLOCK_PALETTE, GRID_CELLS,
    GRID_COLS, GRID_ROWS, INITIAL_ROWS, TARGET_MAX, TARGET_MIN,
};

use crate::block::Block;
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snapshot::{CellSnapshot, GameSnapshot};

/// A successful match, reported to the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEvent {
    /// The target that was hit (before the re-roll).
    pub target: u32,
    /// How many blocks were cleared.
    pub blocks_cleared: u32,
    /// Score awarded: `target * blocks_cleared`.
    pub score_awarded: u32,
}

/// Result of a selection toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Not playing, or the id was stale/unknown. Nothing changed.
    Ignored,
    /// Selection toggled; sum still below target.
    Pending,
    /// Sum exceeded the target; selection was cleared, nothing else changed.
    Overshoot,
    /// Sum hit the target exactly; blocks cleared, score awarded.
    Matched(MatchEvent),
}

/// Complete board-engine state.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    /// Selected block ids in toggle order; each id appears at most once.
    selection: ArrayVec<BlockId, GRID_CELLS>,
    target_sum: u32,
    score: u32,
    status: GameStatus,
    mode: GameMode,
    /// Monotonic id source; never reused within a session.
    next_block_id: u32,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new engine at the menu with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            selection: ArrayVec::new(),
            target_sum: 0,
            score: 0,
            status: GameStatus::Menu,
            mode: GameMode::Classic,
            next_block_id: 0,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current target sum. 0 only while at the menu; always in
    /// `[TARGET_MIN, TARGET_MAX]` during play.
    pub fn target_sum(&self) -> u32 {
        self.target_sum
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Selected ids in toggle order
    pub fn selection(&self) -> &[BlockId] {
        &self.selection
    }

    pub fn is_selected(&self, id: BlockId) -> bool {
        self.selection.contains(&id)
    }

    /// Exact sum of the selected blocks' values. Derived, never stored.
    pub fn current_sum(&self) -> u32 {
        self.selection
            .iter()
            .filter_map(|id| self.grid.get(*id))
            .map(|b| b.value as u32)
            .sum()
    }

    /// Start a fresh run: deal `INITIAL_ROWS` full rows, reset score and
    /// selection, roll a target, and enter `Playing`.
    ///
    /// Only legal from the menu; the session controller gates this.
    pub fn new_game(&mut self, mode: GameMode) {
        debug_assert_eq!(self.status, GameStatus::Menu, "new_game outside menu");

        self.grid.clear();
        for row in 0..INITIAL_ROWS {
            for col in 0..GRID_COLS {
                let block = self.fresh_block(row, col);
                self.grid.push(block);
            }
        }
        self.selection.clear();
        self.score = 0;
        self.target_sum = self.roll_target();
        self.mode = mode;
        self.status = GameStatus::Playing;
    }

    /// Forfeit the current run (`Playing -> Menu`). No score is kept.
    pub fn abandon(&mut self) {
        debug_assert_eq!(self.status, GameStatus::Playing, "abandon outside play");
        self.status = GameStatus::Menu;
    }

    /// Acknowledge the game-over screen (`GameOver -> Menu`).
    pub fn dismiss_game_over(&mut self) {
        debug_assert_eq!(self.status, GameStatus::GameOver, "dismiss without game over");
        self.status = GameStatus::Menu;
    }

    /// Toggle selection of a block and evaluate the sum against the target.
    ///
    /// Stale or unknown ids are silently ignored (the presentation layer may
    /// race a render against a just-cleared block), as are toggles outside
    /// `Playing`. The evaluation runs synchronously before returning, in
    /// this order: match, overshoot, pending.
    pub fn select_block(&mut self, id: BlockId) -> SelectOutcome {
        if self.status != GameStatus::Playing {
            return SelectOutcome::Ignored;
        }
        if self.grid.get(id).is_none() {
            return SelectOutcome::Ignored;
        }

        if let Some(pos) = self.selection.iter().position(|s| *s == id) {
            self.selection.remove(pos);
        } else {
            self.selection.push(id);
        }

        let sum = self.current_sum();
        // target_sum >= TARGET_MIN > 0 while playing, so an empty selection
        // (sum 0) can never match here.
        if sum == self.target_sum {
            SelectOutcome::Matched(self.resolve_match())
        } else if sum > self.target_sum {
            self.selection.clear();
            SelectOutcome::Overshoot
        } else {
            SelectOutcome::Pending
        }
    }

    /// Clear the matched selection and run the post-match cycle.
    ///
    /// Order matters: score, removal, target re-roll, selection reset,
    /// compaction, then the mode's injection policy. In classic mode one row
    /// is injected per match (which may end the game); in timed mode the
    /// session controller resets its round timer instead.
    fn resolve_match(&mut self) -> MatchEvent {
        let blocks_cleared = self.selection.len() as u32;
        let score_awarded = self.target_sum * blocks_cleared;
        let event = MatchEvent {
            target: self.target_sum,
            blocks_cleared,
            score_awarded,
        };

        self.score += score_awarded;
        self.grid.remove_ids(&self.selection);
        self.target_sum = self.roll_target();
        self.selection.clear();
        self.grid.compact();

        if self.mode == GameMode::Classic {
            self.inject_row();
        }

        event
    }

    /// Inject a fresh bottom row, shifting every block up one row.
    ///
    /// Precondition check comes first: if any block already sits at
    /// `GRID_ROWS - 1` or above, the injection is aborted - no shift, no new
    /// row - and the session transitions to `GameOver`. Returns whether a
    /// row was added.
    pub fn inject_row(&mut self) -> bool {
        debug_assert_eq!(self.status, GameStatus::Playing, "inject_row outside play");

        if self.grid.overflowing() {
            self.status = GameStatus::GameOver;
            return false;
        }

        self.grid.shift_up();
        for col in 0..GRID_COLS {
            let block = self.fresh_block(0, col);
            self.grid.push(block);
        }
        true
    }

    fn roll_target(&mut self) -> u32 {
        self.rng.next_between(TARGET_MIN, TARGET_MAX)
    }

    fn fresh_block(&mut self, row: u8, col: u8) -> Block {
        let id = BlockId::new(self.next_block_id);
        self.next_block_id += 1;

        let value = self.rng.next_between(BLOCK_MIN as u32, BLOCK_MAX as u32) as u8;
        let color = BlockColor::from_index(self.rng.next_range(BLOCK_PALETTE.len() as u32));
        Block::new(id, value, row, col, color)
    }

    /// Fill a reusable snapshot buffer. Allocation-free.
    ///
    /// `time_left` is left at 0; the session controller overwrites it from
    /// its round timer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        for block in self.grid.blocks() {
            out.cells[block.row as usize][block.col as usize] = Some(CellSnapshot {
                id: block.id,
                value: block.value,
                color: block.color,
                selected: self.is_selected(block.id),
            });
        }
        out.target_sum = self.target_sum;
        out.current_sum = self.current_sum();
        out.score = self.score;
        out.status = self.status;
        out.mode = self.mode;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Replace the board with an explicit scenario (tests only).
    #[cfg(test)]
    pub fn load_board(&mut self, mode: GameMode, blocks: &[Block], target: u32) {
        assert!((TARGET_MIN..=TARGET_MAX).contains(&target));
        self.grid.clear();
        for block in blocks {
            self.grid.push(*block);
            self.next_block_id = self.next_block_id.max(block.id.raw() + 1);
        }
        self.selection.clear();
        self.score = 0;
        self.target_sum = target;
        self.mode = mode;
        self.status = GameStatus::Playing;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
