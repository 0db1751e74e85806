//! Maps terminal events to UI-agnostic game inputs.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Space, Up, Enter or a left click: start, jump or restart.
    Activate,
    /// Esc, q or Ctrl-C.
    Quit,
    /// Anything else.
    Other,
}

/// Translate a terminal event. Returns `None` for events that are not
/// input at all (resize, focus, key release, mouse motion).
pub fn map_event(event: &Event) -> Option<GameInput> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => None,
    }
}

pub fn map_key(key: &KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let input = match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => GameInput::Activate,
        KeyCode::Esc | KeyCode::Char('q') => GameInput::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        _ => GameInput::Other,
    };
    Some(input)
}

pub fn map_mouse(mouse: &MouseEvent) -> Option<GameInput> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(GameInput::Activate),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_activate_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Enter] {
            assert_eq!(map_event(&key(code)), Some(GameInput::Activate));
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_event(&key(KeyCode::Esc)), Some(GameInput::Quit));
        assert_eq!(map_event(&key(KeyCode::Char('q'))), Some(GameInput::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&ctrl_c), Some(GameInput::Quit));
    }

    #[test]
    fn test_other_keys() {
        assert_eq!(map_event(&key(KeyCode::Char('c'))), Some(GameInput::Other));
        assert_eq!(map_event(&key(KeyCode::Left)), Some(GameInput::Other));
    }

    #[test]
    fn test_key_release_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event(&Event::Key(release)), None);
    }

    #[test]
    fn test_mouse_click() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(&click), Some(GameInput::Activate));

        let moved = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(&moved), None);
    }

    #[test]
    fn test_resize_ignored() {
        assert_eq!(map_event(&Event::Resize(80, 24)), None);
    }
}
