//! Terminal input module.
//!
//! Maps `crossterm` key events into UI commands and hosts the grid-clamped
//! selection cursor. Independent of any rendering concerns; the runner owns
//! the event loop and decides when commands become session intents.

pub mod cursor;
pub mod map;

pub use tui_sumstack_types as types;

pub use cursor::{Cursor, CursorMove};
pub use map::{key_to_command, should_quit, UiCommand};
