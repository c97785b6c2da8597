use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// One wheel notch down (or keyboard equivalent)
    ScrollDown,
    /// One wheel notch up
    ScrollUp,
    PageDown,
    PageUp,
    /// Drag gesture started at this row
    DragStart(u16),
    /// Drag gesture moved to this row
    DragMove(u16),
    None,
}

/// Map a key event to an action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::Quit,

        // Scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::PageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::PageUp,
        (KeyCode::PageDown, KeyModifiers::NONE) => Action::PageDown,
        (KeyCode::PageUp, KeyModifiers::NONE) => Action::PageUp,

        _ => Action::None,
    }
}

/// Map a mouse event to an action. Wheel notches drive the transition;
/// left-button drags behave like touch gestures.
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::ScrollDown,
        MouseEventKind::ScrollUp => Action::ScrollUp,
        MouseEventKind::Down(MouseButton::Left) => Action::DragStart(mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => Action::DragMove(mouse.row),
        _ => Action::None,
    }
}
