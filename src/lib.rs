//! TUI SumStack (workspace facade crate).
//!
//! This package keeps the `tui_sumstack::{core,engine,input,term,types}` public
//! API in one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_sumstack_core as core;
pub use tui_sumstack_engine as engine;
pub use tui_sumstack_input as input;
pub use tui_sumstack_term as term;
pub use tui_sumstack_types as types;
