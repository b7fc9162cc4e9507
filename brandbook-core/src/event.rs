//! Terminal event types delivered to components

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// The actual event payload
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Scroll event with position and delta
    Scroll { column: u16, row: u16, delta: isize },
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic tick
    Tick,
}

impl EventKind {
    /// Events handled before any focused component sees them
    ///
    /// Ctrl+C / Ctrl+Q always quit and resizes always re-layout. Esc is
    /// deliberately absent: it closes the inspector or leaves search first.
    pub fn is_global(&self) -> bool {
        match self {
            EventKind::Key(key) => {
                key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
            }
            EventKind::Resize(_, _) => true,
            _ => false,
        }
    }

    /// Screen position for mouse and scroll events
    pub fn position(&self) -> Option<Position> {
        match self {
            EventKind::Mouse(mouse) => Some(Position::new(mouse.column, mouse.row)),
            EventKind::Scroll { column, row, .. } => Some(Position::new(*column, *row)),
            _ => None,
        }
    }

    /// Modifier keys held during a key or mouse event
    pub fn modifiers(&self) -> KeyModifiers {
        match self {
            EventKind::Key(key) => key.modifiers,
            EventKind::Mouse(mouse) => mouse.modifiers,
            _ => KeyModifiers::NONE,
        }
    }

    /// Left-button press inside `area`
    pub fn is_left_click_in(&self, area: Rect) -> bool {
        match self {
            EventKind::Mouse(mouse) => {
                matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
                    && area.contains(Position::new(mouse.column, mouse.row))
            }
            _ => false,
        }
    }
}
