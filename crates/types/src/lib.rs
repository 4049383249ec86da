//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Grid Dimensions
//!
//! - **Columns**: 6 (indexed 0-5)
//! - **Rows**: 10 (indexed 0-9, row 0 is the *bottom* row)
//! - **Initial deal**: 4 full rows
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TIMED_ROUND_SECS` | 15 | Seconds per round in timed mode |
//! | `TARGET_MIN` | 10 | Smallest target sum ever rolled |
//! | `TARGET_MAX` | 30 | Largest target sum ever rolled |
//! | `BLOCK_MIN` | 1 | Smallest block value |
//! | `BLOCK_MAX` | 9 | Largest block value |
//!
//! The target range never includes 0, so an empty selection (sum 0) can
//! never spuriously match.
//!
//! # Examples
//!
//! ```
//! use tui_sumstack_types::{GameMode, GameStatus, GRID_COLS, GRID_ROWS};
//!
//! let mode = GameMode::from_str("classic").unwrap();
//! assert_eq!(mode, GameMode::Classic);
//! assert_eq!(mode.as_str(), "classic");
//!
//! assert_eq!(GameStatus::Menu.as_str(), "menu");
//!
//! assert_eq!(GRID_COLS, 6);
//! assert_eq!(GRID_ROWS, 10);
//! ```

/// Grid width in columns (6)
pub const GRID_COLS: u8 = 6;

/// Grid height in rows (10). Row 0 is the bottom row.
pub const GRID_ROWS: u8 = 10;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = (GRID_COLS as usize) * (GRID_ROWS as usize);

/// Number of full rows dealt at the start of a game (4)
pub const INITIAL_ROWS: u8 = 4;

/// Round duration in timed mode, in seconds (15)
pub const TIMED_ROUND_SECS: u32 = 15;

/// Smallest target sum ever rolled (10)
pub const TARGET_MIN: u32 = 10;

/// Largest target sum ever rolled (30)
pub const TARGET_MAX: u32 = 30;

/// Smallest block value (1)
pub const BLOCK_MIN: u8 = 1;

/// Largest block value (9)
pub const BLOCK_MAX: u8 = 9;

/// Stable block identity.
///
/// Ids are issued monotonically by the engine, never randomly, so uniqueness
/// is deterministic. Identity survives gravity and row injection; a cleared
/// block's id is never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(u32);

impl BlockId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Game modes
///
/// - **Classic**: one row is injected per successful match, so pressure is
///   proportional to player progress.
/// - **Timed**: a row is injected whenever the round timer expires; a match
///   resets the timer to the full round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Classic,
    Timed,
}

impl GameMode {
    /// Parse mode from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(GameMode::Classic),
            "timed" => Some(GameMode::Timed),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::Timed => "timed",
        }
    }
}

/// Session status
///
/// Transitions: `Menu -> Playing` (new game), `Playing -> GameOver`
/// (injection overflow), `Playing -> Menu` (abandon), `GameOver -> Menu`
/// (dismiss). There is no `GameOver -> Playing` transition; a fresh game
/// must be started from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Menu,
    Playing,
    GameOver,
}

impl GameStatus {
    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Menu => "menu",
            GameStatus::Playing => "playing",
            GameStatus::GameOver => "gameover",
        }
    }
}

/// Cosmetic block colors (no gameplay effect)
///
/// Drawn uniformly and independently of the block value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Rose,
    Sky,
    Emerald,
    Amber,
    Violet,
    Indigo,
}

/// The fixed color palette blocks draw from
pub const BLOCK_PALETTE: [BlockColor; 6] = [
    BlockColor::Rose,
    BlockColor::Sky,
    BlockColor::Emerald,
    BlockColor::Amber,
    BlockColor::Violet,
    BlockColor::Indigo,
];

impl BlockColor {
    /// Pick a palette color by index (wraps around)
    pub fn from_index(index: u32) -> Self {
        BLOCK_PALETTE[(index as usize) % BLOCK_PALETTE.len()]
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Rose => "rose",
            BlockColor::Sky => "sky",
            BlockColor::Emerald => "emerald",
            BlockColor::Amber => "amber",
            BlockColor::Violet => "violet",
            BlockColor::Indigo => "indigo",
        }
    }
}

/// Input intents accepted from the presentation layer
///
/// The presentation layer never mutates game state directly; it forwards
/// these intents to the session controller and re-renders from snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameIntent {
    /// Start a new game in the given mode (menu only)
    Start(GameMode),
    /// Toggle selection of a block; stale ids are silently ignored
    Select(BlockId),
    /// Abandon the current run or dismiss the game-over screen
    ReturnToMenu,
}
