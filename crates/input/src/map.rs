//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, Variant};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Arrow keys work in every variant. Start, pause and restart shortcuts only
/// exist in the variant with on-screen controls.
pub fn handle_key_event(key: KeyEvent, variant: Variant) -> Option<GameAction> {
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::Rotate),
        code if variant.has_controls() => control_shortcut(code),
        _ => None,
    }
}

fn control_shortcut(code: KeyCode) -> Option<GameAction> {
    match code {
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Key presses and auto-repeats both act, like a browser `keydown`.
pub fn is_actionable(key: &KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

/// Keys that acknowledge the game over notification.
pub fn dismisses_alert(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_arrow_keys_in_both_variants() {
        for variant in [Variant::Keyboard, Variant::Controls] {
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Left), variant),
                Some(GameAction::MoveLeft)
            );
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Right), variant),
                Some(GameAction::MoveRight)
            );
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Down), variant),
                Some(GameAction::SoftDrop)
            );
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Up), variant),
                Some(GameAction::Rotate)
            );
        }
    }

    #[test]
    fn test_control_shortcuts_only_with_controls() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p')), Variant::Controls),
            Some(GameAction::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R')), Variant::Controls),
            Some(GameAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter), Variant::Controls),
            Some(GameAction::Start)
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p')), Variant::Keyboard),
            None
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r')), Variant::Keyboard),
            None
        );
    }

    #[test]
    fn test_repeat_is_actionable_release_is_not() {
        let press = KeyEvent::from(KeyCode::Left);
        assert!(is_actionable(&press));

        let repeat = KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Repeat);
        assert!(is_actionable(&repeat));

        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(!is_actionable(&release));
    }

    #[test]
    fn test_alert_dismiss_keys() {
        assert!(dismisses_alert(KeyEvent::from(KeyCode::Enter)));
        assert!(dismisses_alert(KeyEvent::from(KeyCode::Char(' '))));
        assert!(!dismisses_alert(KeyEvent::from(KeyCode::Left)));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
