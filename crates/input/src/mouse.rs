//! Mouse hit testing for the on-screen button bar.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Button, Rect};

/// Whether the event is a left-button press.
pub fn is_click(ev: &MouseEvent) -> bool {
    matches!(ev.kind, MouseEventKind::Down(MouseButton::Left))
}

/// Button under a left click, if any.
///
/// `layout` holds the button rectangles of the current frame.
pub fn handle_mouse_event(ev: MouseEvent, layout: &[(Button, Rect)]) -> Option<Button> {
    if !is_click(&ev) {
        return None;
    }
    layout
        .iter()
        .find(|(_, rect)| rect.contains(ev.column, ev.row))
        .map(|(button, _)| *button)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn layout() -> Vec<(Button, Rect)> {
        vec![
            (Button::Left, Rect::new(0, 10, 3, 1)),
            (Button::Start, Rect::new(4, 10, 7, 1)),
        ]
    }

    #[test]
    fn left_click_hits_button() {
        let ev = mouse(MouseEventKind::Down(MouseButton::Left), 5, 10);
        assert_eq!(handle_mouse_event(ev, &layout()), Some(Button::Start));

        let ev = mouse(MouseEventKind::Down(MouseButton::Left), 0, 10);
        assert_eq!(handle_mouse_event(ev, &layout()), Some(Button::Left));
    }

    #[test]
    fn click_between_buttons_misses() {
        let ev = mouse(MouseEventKind::Down(MouseButton::Left), 3, 10);
        assert_eq!(handle_mouse_event(ev, &layout()), None);
    }

    #[test]
    fn other_mouse_events_are_ignored() {
        let ev = mouse(MouseEventKind::Down(MouseButton::Right), 5, 10);
        assert_eq!(handle_mouse_event(ev, &layout()), None);

        let ev = mouse(MouseEventKind::Moved, 5, 10);
        assert_eq!(handle_mouse_event(ev, &layout()), None);
    }
}
