use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// Terminal input the event loop cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Action(Action),
    /// Terminal was resized; redraw without a state change.
    Resize,
}

/// Block until the next terminal event. No timeout: the viewer has nothing
/// to do until the user presses a key.
///
/// Returns `Ok(None)` for events that map to nothing (unbound keys, mouse,
/// key releases).
pub fn read_event() -> io::Result<Option<TuiEvent>> {
    Ok(match event::read()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event).map(TuiEvent::Action)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    })
}

/// Translate a key press into an `Action`. Unbound keys give `None`.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Windows reports both press and release
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        (_, KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::Right | KeyCode::PageDown) => {
            Some(Action::Next)
        }
        (_, KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp) => Some(Action::Previous),
        (_, KeyCode::Char('f') | KeyCode::Home) => Some(Action::First),
        (_, KeyCode::Char('l') | KeyCode::End) => Some(Action::Last),
        (_, KeyCode::Char('s')) => Some(Action::ToggleNotes),
        (_, KeyCode::Char('h') | KeyCode::Char('?')) => Some(Action::ToggleHelp),
        (_, KeyCode::Char('q') | KeyCode::Esc) => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn navigation_keys() {
        for code in [
            KeyCode::Char('n'),
            KeyCode::Char(' '),
            KeyCode::Right,
            KeyCode::PageDown,
        ] {
            assert_eq!(map_key(key(code)), Some(Action::Next), "{code:?}");
        }
        for code in [KeyCode::Char('p'), KeyCode::Left, KeyCode::PageUp] {
            assert_eq!(map_key(key(code)), Some(Action::Previous), "{code:?}");
        }
        assert_eq!(map_key(key(KeyCode::Char('f'))), Some(Action::First));
        assert_eq!(map_key(key(KeyCode::Home)), Some(Action::First));
        assert_eq!(map_key(key(KeyCode::Char('l'))), Some(Action::Last));
        assert_eq!(map_key(key(KeyCode::End)), Some(Action::Last));
    }

    #[test]
    fn toggle_keys() {
        assert_eq!(map_key(key(KeyCode::Char('s'))), Some(Action::ToggleNotes));
        assert_eq!(map_key(key(KeyCode::Char('h'))), Some(Action::ToggleHelp));
        assert_eq!(map_key(key(KeyCode::Char('?'))), Some(Action::ToggleHelp));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Action::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert_eq!(map_key(key(KeyCode::Char('x'))), None);
        assert_eq!(map_key(key(KeyCode::Char('c'))), None);
        assert_eq!(map_key(key(KeyCode::Enter)), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut release = key(KeyCode::Char('n'));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), None);
    }
}
