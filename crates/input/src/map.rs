//! Key mapping from terminal events to UI commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_sumstack_types::GameMode;

use crate::cursor::CursorMove;

/// What the player asked the UI to do.
///
/// Cursor movement is purely presentational; everything else becomes a
/// `GameIntent` for the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Move(CursorMove),
    /// Toggle selection of the block under the cursor
    ToggleSelect,
    Start(GameMode),
    ReturnToMenu,
}

/// Map keyboard input to UI commands.
pub fn key_to_command(key: KeyEvent) -> Option<UiCommand> {
    match key.code {
        // Cursor movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(UiCommand::Move(CursorMove::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(UiCommand::Move(CursorMove::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(UiCommand::Move(CursorMove::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(UiCommand::Move(CursorMove::Down))
        }

        // Selection
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiCommand::ToggleSelect),

        // Mode start (menu)
        KeyCode::Char('1') | KeyCode::Char('c') | KeyCode::Char('C') => {
            Some(UiCommand::Start(GameMode::Classic))
        }
        KeyCode::Char('2') | KeyCode::Char('t') | KeyCode::Char('T') => {
            Some(UiCommand::Start(GameMode::Timed))
        }

        // Back to menu
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => Some(UiCommand::ReturnToMenu),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            key_to_command(KeyEvent::from(KeyCode::Left)),
            Some(UiCommand::Move(CursorMove::Left))
        );
        assert_eq!(
            key_to_command(KeyEvent::from(KeyCode::Right)),
            Some(UiCommand::Move(CursorMove::Right))
        );
        assert_eq!(
            key_to_command(KeyEvent::from(KeyCode::Up)),
            Some(UiCommand::Move(CursorMove::Up))
        );
        assert_eq!(
            key_to_command(KeyEvent::from(KeyCode::Char('j'))),
            Some(UiCommand::Move(CursorMove::Down))
        );
        assert_eq!(
            key_to_command(KeyEvent::from(KeyCode::Char('A'))),
            Some(UiCommand::Move(CursorMove::Left))
        );
    }

    #[test]
    fn test_selection_keys() {
        assert_eq!(
            key_to_command(KeyEvent::from(KeyCode::Enter)),
            Some(UiCommand::ToggleSelect)
        );
        assert_eq!(
            key_to_command(KeyEvent::from(KeyCode::Char(' '))),
            Some(UiCommand::ToggleSelect)
        );
    }

    #[test]
    fn test_mode_keys() {
        assert_eq!(
            key_to_command(KeyEvent::from(KeyCode::Char('1'))),
            Some(UiCommand::Start(GameMode::Classic))
        );
        assert_eq!(
            key_to_command(KeyEvent::from(KeyCode::Char('2'))),
            Some(UiCommand::Start(GameMode::Timed))
        );
        assert_eq!(
            key_to_command(KeyEvent::from(KeyCode::Char('t'))),
            Some(UiCommand::Start(GameMode::Timed))
        );
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(
            key_to_command(KeyEvent::from(KeyCode::Esc)),
            Some(UiCommand::ReturnToMenu)
        );
        assert_eq!(
            key_to_command(KeyEvent::from(KeyCode::Char('m'))),
            Some(UiCommand::ReturnToMenu)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        // Plain 'c' starts a classic game, it does not quit.
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
