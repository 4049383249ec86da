//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic for the number-matching puzzle. It has **zero dependencies** on UI,
//! timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical deals and targets
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Can run in any environment (terminal, headless, tests)
//! - **Fast**: Fixed-capacity storage, zero-allocation hot paths
//!
//! # Module Structure
//!
//! - [`block`]: a single numbered, colored block with stable identity
//! - [`grid`]: the 6x10 board with compaction (gravity) and row shifting
//! - [`game_state`]: selection, target evaluation, scoring, and lifecycle
//! - [`rng`]: seeded LCG behind all value/target/color draws
//! - [`snapshot`]: read-only render-facing state
//!
//! # Game Rules
//!
//! - Toggling a block recomputes the selection sum and evaluates it against
//!   the target *immediately*, before anything else can observe the state.
//! - Hitting the target exactly clears the selection's blocks, awards
//!   `target * blocks`, re-rolls the target, and compacts each column.
//! - Exceeding the target resets the selection and nothing else.
//! - Injecting a row shifts everything up and deals a fresh bottom row;
//!   if a block already sits one row below the top, the injection aborts
//!   and the game ends instead.
//!
//! # Example
//!
//! ```
//! use tui_sumstack_core::GameState;
//! use tui_sumstack_types::{GameMode, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! game.new_game(GameMode::Classic);
//!
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert!(game.target_sum() >= 10);
//!
//! // Toggle the bottom-left block.
//! let id = game.grid().block_at(0, 0).unwrap().id;
//! game.select_block(id);
//! assert_eq!(game.current_sum(), game.grid().get(id).unwrap().value as u32);
//! ```

pub mod block;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use tui_sumstack_types as types;

// Re-export commonly used types for convenience
pub use block::Block;
pub use game_state::{GameState, MatchEvent, SelectOutcome};
pub use grid::Grid;
pub use rng::SimpleRng;
pub use snapshot::{CellSnapshot, GameSnapshot};
