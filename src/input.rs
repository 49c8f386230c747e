//! Input - crossterm event conversion and polling.
//!
//! Bridges crossterm's event stream to the handful of events the app cares
//! about. Only the left mouse button participates in gestures; key release
//! events and unrecognized keys are discarded at the boundary.
//!
//! # API
//!
//! - `poll_event` - non-blocking event check with timeout
//! - `read_event` - blocking event read
//! - `convert_event` - crossterm event to [`AppEvent`]
//! - `enable_mouse` / `disable_mouse` - control mouse capture

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{
    poll, read, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode,
    KeyEventKind, KeyModifiers, MouseButton, MouseEvent as CrosstermMouseEvent, MouseEventKind,
};
use crossterm::execute;

// =============================================================================
// Event types
// =============================================================================

/// What a pointer event does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Up,
    Drag,
    Move,
}

/// A pointer event in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: u16,
    pub y: u16,
}

/// Keys the app responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
}

/// Unified event type for the app loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Pointer(PointerEvent),
    Key(KeyInput),
    Resize(u16, u16),
    /// Unhandled or filtered-out event.
    None,
}

// =============================================================================
// Conversion
// =============================================================================

/// Convert a crossterm event to an [`AppEvent`].
pub fn convert_event(event: CrosstermEvent) -> AppEvent {
    match event {
        CrosstermEvent::Mouse(mouse) => convert_mouse_event(mouse),
        CrosstermEvent::Key(key) => {
            // Releases never trigger actions.
            if key.kind == KeyEventKind::Release {
                return AppEvent::None;
            }
            match convert_key_code(key.code) {
                Some(converted) => AppEvent::Key(KeyInput {
                    key: converted,
                    ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
                    shift: key.modifiers.contains(KeyModifiers::SHIFT),
                }),
                None => AppEvent::None,
            }
        }
        CrosstermEvent::Resize(w, h) => AppEvent::Resize(w, h),
        _ => AppEvent::None,
    }
}

fn convert_mouse_event(event: CrosstermMouseEvent) -> AppEvent {
    let action = match event.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerAction::Down,
        MouseEventKind::Up(MouseButton::Left) => PointerAction::Up,
        MouseEventKind::Drag(MouseButton::Left) => PointerAction::Drag,
        MouseEventKind::Moved => PointerAction::Move,
        // Other buttons and scroll do not participate in gestures.
        _ => return AppEvent::None,
    };

    AppEvent::Pointer(PointerEvent {
        action,
        x: event.column,
        y: event.row,
    })
}

fn convert_key_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::BackTab => Some(Key::BackTab),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        _ => None,
    }
}

// =============================================================================
// Polling
// =============================================================================

/// Poll for an event with a timeout.
///
/// Returns `None` if no event arrives within the timeout. The timeout doubles
/// as the app's tick interval (throttle flushes, feedback expiry).
pub fn poll_event(timeout: Duration) -> io::Result<Option<AppEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> io::Result<AppEvent> {
    Ok(convert_event(read()?))
}

// =============================================================================
// Mouse capture
// =============================================================================

/// Enable mouse capture.
pub fn enable_mouse() -> io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState};

    fn mouse(kind: MouseEventKind, x: u16, y: u16) -> CrosstermEvent {
        CrosstermEvent::Mouse(CrosstermMouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::empty(),
        })
    }

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_left_button_maps_to_pointer_actions() {
        let cases = [
            (MouseEventKind::Down(MouseButton::Left), PointerAction::Down),
            (MouseEventKind::Up(MouseButton::Left), PointerAction::Up),
            (MouseEventKind::Drag(MouseButton::Left), PointerAction::Drag),
            (MouseEventKind::Moved, PointerAction::Move),
        ];

        for (kind, expected) in cases {
            match convert_event(mouse(kind, 10, 5)) {
                AppEvent::Pointer(p) => {
                    assert_eq!(p.action, expected);
                    assert_eq!((p.x, p.y), (10, 5));
                }
                other => panic!("expected pointer event, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_other_buttons_and_scroll_are_filtered() {
        let kinds = [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Middle),
            MouseEventKind::Drag(MouseButton::Right),
            MouseEventKind::ScrollUp,
            MouseEventKind::ScrollDown,
        ];

        for kind in kinds {
            assert_eq!(convert_event(mouse(kind, 0, 0)), AppEvent::None);
        }
    }

    #[test]
    fn test_key_conversion() {
        let event = convert_event(key(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        ));

        assert_eq!(
            event,
            AppEvent::Key(KeyInput {
                key: Key::Char('c'),
                ctrl: true,
                shift: false,
            })
        );
    }

    #[test]
    fn test_key_release_is_filtered() {
        let event = convert_event(key(
            KeyCode::Char('q'),
            KeyModifiers::empty(),
            KeyEventKind::Release,
        ));
        assert_eq!(event, AppEvent::None);
    }

    #[test]
    fn test_navigation_keys() {
        let cases = [
            (KeyCode::Tab, Key::Tab),
            (KeyCode::BackTab, Key::BackTab),
            (KeyCode::Esc, Key::Escape),
            (KeyCode::Up, Key::Up),
            (KeyCode::Down, Key::Down),
            (KeyCode::Left, Key::Left),
            (KeyCode::Right, Key::Right),
            (KeyCode::Enter, Key::Enter),
        ];

        for (code, expected) in cases {
            match convert_event(key(code, KeyModifiers::empty(), KeyEventKind::Press)) {
                AppEvent::Key(input) => assert_eq!(input.key, expected),
                other => panic!("expected key event, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_unrecognized_key_is_filtered() {
        let event = convert_event(key(
            KeyCode::F(5),
            KeyModifiers::empty(),
            KeyEventKind::Press,
        ));
        assert_eq!(event, AppEvent::None);
    }

    #[test]
    fn test_resize_passthrough() {
        assert_eq!(
            convert_event(CrosstermEvent::Resize(120, 40)),
            AppEvent::Resize(120, 40)
        );
    }
}
