//! Translate raw terminal events into game input.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::entities::Input;
use crate::viewport::Viewport;

/// Map one crossterm event to game input, or `None` for events the game
/// ignores (key releases, other buttons, mouse movement, focus changes…).
pub fn translate(event: &Event, viewport: &Viewport) -> Option<Input> {
    match event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => {
            let (x, y) = viewport.to_units(*column, *row);
            Some(Input::PrimaryClick { x, y })
        }
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Input::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Input::Quit),
            _ => None,
        },
        Event::Resize(cols, rows) => Some(Input::Resize {
            cols: *cols,
            rows: *rows,
        }),
        _ => None,
    }
}
