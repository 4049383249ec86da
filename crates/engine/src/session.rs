//! Session controller - status transitions and timed-mode scheduling.
//!
//! The controller sits between the presentation layer and the board engine:
//! it gates intents by status, drives [`RoundTimer`] ticks into the engine,
//! and applies the per-mode injection policy after a match. All mutations
//! arrive through [`Session::apply`] or [`Session::tick_second`], so they
//! are serialized in arrival order with no partial state visible in between.

use tui_sumstack_core::{GameSnapshot, GameState, SelectOutcome};
use tui_sumstack_types::{BlockId, GameIntent, GameMode, GameStatus};

use crate::timer::RoundTimer;

/// One play-through owner: the board engine plus its round timer.
#[derive(Debug, Clone)]
pub struct Session {
    game: GameState,
    timer: RoundTimer,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        Self {
            game: GameState::new(seed),
            timer: RoundTimer::new(),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Derived progress value for the presentation layer.
    pub fn current_sum(&self) -> u32 {
        self.game.current_sum()
    }

    /// Route a presentation intent. Returns whether it had any effect.
    pub fn apply(&mut self, intent: GameIntent) -> bool {
        match intent {
            GameIntent::Start(mode) => self.start_game(mode),
            GameIntent::Select(id) => {
                !matches!(self.select_block(id), SelectOutcome::Ignored)
            }
            GameIntent::ReturnToMenu => self.return_to_menu(),
        }
    }

    /// Start a new game. Only honored at the menu; a game-over screen must
    /// be dismissed first, and an active run abandoned.
    pub fn start_game(&mut self, mode: GameMode) -> bool {
        if self.game.status() != GameStatus::Menu {
            return false;
        }
        self.game.new_game(mode);
        match mode {
            GameMode::Timed => self.timer.arm(),
            GameMode::Classic => self.timer.cancel(),
        }
        true
    }

    /// Toggle a block and apply the timed-mode reward policy: a match
    /// restarts the round timer. If a classic-mode match's injection ended
    /// the game, the timer is disarmed (it should already be).
    pub fn select_block(&mut self, id: BlockId) -> SelectOutcome {
        let outcome = self.game.select_block(id);
        if let SelectOutcome::Matched(_) = outcome {
            if self.game.status() != GameStatus::Playing {
                self.timer.cancel();
            } else if self.game.mode() == GameMode::Timed {
                self.timer.reset();
            }
        }
        outcome
    }

    /// Abandon the run or dismiss the game-over screen. The timer is
    /// cancelled atomically with the transition, so no stale tick can touch
    /// a superseded session.
    pub fn return_to_menu(&mut self) -> bool {
        match self.game.status() {
            GameStatus::Playing => {
                self.timer.cancel();
                self.game.abandon();
                true
            }
            GameStatus::GameOver => {
                self.timer.cancel();
                self.game.dismiss_game_over();
                true
            }
            GameStatus::Menu => false,
        }
    }

    /// Deliver one wall-clock second. Fires only in a playing timed-mode
    /// session; on expiry one row is injected, and a resulting game over
    /// disarms the timer so nothing fires posthumously. Returns whether the
    /// round expired on this tick.
    pub fn tick_second(&mut self) -> bool {
        debug_assert!(
            !self.timer.is_armed()
                || (self.game.status() == GameStatus::Playing
                    && self.game.mode() == GameMode::Timed),
            "armed timer outside a playing timed session"
        );

        if !self.timer.tick_second() {
            return false;
        }
        if !self.game.inject_row() {
            self.timer.cancel();
        }
        true
    }

    /// Fill a reusable snapshot buffer: core state plus the round timer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
        out.time_left = self.timer.remaining_s();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
