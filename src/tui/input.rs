//! Key decoding for the interactive loop.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gridtac_core::{Command, KeyBindings};

/// Maps a key press to a game command.
///
/// Returns `None` for key releases and for keys with no binding; both are
/// ignored by the caller.
pub fn dispatch(key: KeyEvent, keys: &KeyBindings) -> Option<Command> {
    // Skip key release events (crossterm fires both press and release on some platforms).
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        // Raw mode swallows SIGINT, so Ctrl-C arrives as a key.
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Up => Some(Command::MoveUp),
        KeyCode::Down => Some(Command::MoveDown),
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceMarker),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(c) if keys.is_quit(c) => Some(Command::Quit),
        KeyCode::Char(c) if keys.is_new_game(c) => Some(Command::NewGame),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_and_enter() {
        let keys = KeyBindings::default();
        assert_eq!(dispatch(press(KeyCode::Up), &keys), Some(Command::MoveUp));
        assert_eq!(dispatch(press(KeyCode::Right), &keys), Some(Command::MoveRight));
        assert_eq!(dispatch(press(KeyCode::Enter), &keys), Some(Command::PlaceMarker));
    }

    #[test]
    fn test_configured_keys() {
        let keys = KeyBindings::new('q', 'r');
        assert_eq!(dispatch(press(KeyCode::Char('q')), &keys), Some(Command::Quit));
        assert_eq!(dispatch(press(KeyCode::Char('R')), &keys), Some(Command::NewGame));
        assert_eq!(dispatch(press(KeyCode::Char('n')), &keys), None);
    }

    #[test]
    fn test_ctrl_c_quits_with_any_bindings() {
        let keys = KeyBindings::new('q', 'r');
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(dispatch(key, &keys), Some(Command::Quit));
    }

    #[test]
    fn test_release_ignored() {
        let key = KeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(dispatch(key, &KeyBindings::default()), None);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let keys = KeyBindings::default();
        assert_eq!(dispatch(press(KeyCode::Char('x')), &keys), None);
        assert_eq!(dispatch(press(KeyCode::Tab), &keys), None);
        assert_eq!(dispatch(press(KeyCode::F(1)), &keys), None);
    }
}
