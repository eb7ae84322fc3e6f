//! Key mapping from terminal events to session commands.

use blockfall_types::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a session command.
///
/// `Pause` doubles as the resume key: the runner swaps it for
/// [`GameCommand::Resume`] when the session is already paused.
pub fn command_for_key(key: KeyEvent) -> Option<GameCommand> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameCommand::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameCommand::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameCommand::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameCommand::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(GameCommand::HardDrop),
        KeyCode::Enter => Some(GameCommand::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameCommand::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameCommand::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn movement_keys() {
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Left)),
            Some(GameCommand::MoveLeft)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Right)),
            Some(GameCommand::MoveRight)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Down)),
            Some(GameCommand::SoftDrop)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('H'))),
            Some(GameCommand::MoveLeft)
        );
    }

    #[test]
    fn action_keys() {
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Up)),
            Some(GameCommand::Rotate)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameCommand::HardDrop)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Enter)),
            Some(GameCommand::Start)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameCommand::Pause)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameCommand::Reset)
        );
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(command_for_key(KeyEvent::from(KeyCode::Tab)), None);
        assert_eq!(command_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
