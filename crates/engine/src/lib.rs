//! Session engine - lifecycle and scheduling around the board core.
//!
//! The core crate is a pure state machine; this crate owns everything that
//! makes it a running game session: the menu/playing/game-over transitions,
//! intent gating, and the cancellable timed-mode round timer.

pub mod session;
pub mod timer;

pub use tui_sumstack_core as core;
pub use tui_sumstack_types as types;

pub use session::Session;
pub use timer::RoundTimer;
