//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! ratatui widgets/layout and instead renders into a simple framebuffer that
//! is flushed to the terminal backend as full frames.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Give the board a stable visual layout (4 chars wide per cell)
//! - Make frame content assertable in tests without a terminal

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_sumstack_core as core;
pub use tui_sumstack_types as types;

pub use fb::{FrameBuffer, Rgb, Style, TermCell};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
