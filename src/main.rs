//! Terminal SumStack runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_sumstack::core::GameSnapshot;
use tui_sumstack::engine::Session;
use tui_sumstack::input::{key_to_command, should_quit, Cursor, UiCommand};
use tui_sumstack::term::{GameView, TerminalRenderer, Viewport};
use tui_sumstack::types::GameIntent;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = Session::new(time_seed());
    let view = GameView::default();
    let mut cursor = Cursor::new();
    let mut snap = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_secs(1);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        let fb = view.render(&snap, Some((cursor.row, cursor.col)), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next timer tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    if let Some(cmd) = key_to_command(key) {
                        match cmd {
                            UiCommand::Move(mv) => cursor.apply(mv),
                            UiCommand::ToggleSelect => {
                                // Only occupied cells carry a block id.
                                if let Some(cell) = snap.block_at(cursor.row, cursor.col) {
                                    session.apply(GameIntent::Select(cell.id));
                                }
                            }
                            UiCommand::Start(mode) => {
                                session.apply(GameIntent::Start(mode));
                            }
                            UiCommand::ReturnToMenu => {
                                session.apply(GameIntent::ReturnToMenu);
                            }
                        }
                    }
                }
            }
        }

        // Timed-mode round clock advances once per wall second.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick_second();
        }
    }
}

fn time_seed() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => (d.as_secs() as u32) ^ d.subsec_nanos(),
        Err(_) => 1,
    }
}
