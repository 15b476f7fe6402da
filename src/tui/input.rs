use super::helpers::{cells_to_px, contains};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Represents the result of handling a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application
    Quit,
    /// Fling the front card left (keep)
    Keep,
    /// Fling the front card right (trash)
    Trash,
    /// Toggle between the sort and saved tabs
    SwitchTab,
    /// Show the sort tab
    ShowSort,
    /// Show the saved tab
    ShowSaved,
    /// Toggle help overlay
    Help,
    /// No action
    None,
}

/// Maps keyboard events to actions
pub fn handle_key_event(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        // Quit: q, Esc or Ctrl+C
        (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => KeyAction::Quit,

        // Keep: Left arrow or h
        (KeyCode::Left, KeyModifiers::NONE) => KeyAction::Keep,
        (KeyCode::Char('h'), KeyModifiers::NONE) => KeyAction::Keep,

        // Trash: Right arrow or l
        (KeyCode::Right, KeyModifiers::NONE) => KeyAction::Trash,
        (KeyCode::Char('l'), KeyModifiers::NONE) => KeyAction::Trash,

        // Tabs
        (KeyCode::Tab, KeyModifiers::NONE) => KeyAction::SwitchTab,
        (KeyCode::Char('1'), KeyModifiers::NONE) => KeyAction::ShowSort,
        (KeyCode::Char('2'), KeyModifiers::NONE) => KeyAction::ShowSaved,

        // Help: ?
        (KeyCode::Char('?'), KeyModifiers::NONE) => KeyAction::Help,
        (KeyCode::Char('?'), KeyModifiers::SHIFT) => KeyAction::Help,

        _ => KeyAction::None,
    }
}

/// Gesture lifecycle event in pixel offsets from the press position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Start,
    Sample { dx: f64, dy: f64 },
    End { dx: f64, dy: f64 },
    Cancel,
}

/// Turns left-button mouse drags over the card into gesture events.
#[derive(Debug, Default)]
pub struct GestureTracker {
    origin: Option<(u16, u16)>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// Drops any gesture in progress
    pub fn reset(&mut self) -> Option<GestureEvent> {
        self.origin.take().map(|_| GestureEvent::Cancel)
    }

    /// Maps a mouse event to a gesture event.
    ///
    /// A gesture starts only on a left press inside `card_area`; drag and
    /// release are tracked anywhere on screen once started. A second press
    /// while tracking (e.g. after a release was lost) cancels the gesture.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, card_area: Rect) -> Option<GestureEvent> {
        match (mouse.kind, self.origin) {
            (MouseEventKind::Down(_), Some(_)) => self.reset(),
            (MouseEventKind::Down(MouseButton::Left), None) => {
                if contains(card_area, mouse.column, mouse.row) {
                    self.origin = Some((mouse.column, mouse.row));
                    Some(GestureEvent::Start)
                } else {
                    None
                }
            }
            (MouseEventKind::Drag(MouseButton::Left), Some(origin)) => {
                let (dx, dy) = offset_px(origin, &mouse);
                Some(GestureEvent::Sample { dx, dy })
            }
            (MouseEventKind::Up(MouseButton::Left), Some(origin)) => {
                self.origin = None;
                let (dx, dy) = offset_px(origin, &mouse);
                Some(GestureEvent::End { dx, dy })
            }
            _ => None,
        }
    }
}

fn offset_px(origin: (u16, u16), mouse: &MouseEvent) -> (f64, f64) {
    cells_to_px(
        mouse.column as i32 - origin.0 as i32,
        mouse.row as i32 - origin.1 as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn card_area() -> Rect {
        Rect::new(10, 5, 40, 12)
    }

    #[test]
    fn test_key_quit() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Quit);

        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(key), KeyAction::Quit);

        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Quit);
    }

    #[test]
    fn test_key_keep() {
        let key = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Keep);

        let key = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Keep);
    }

    #[test]
    fn test_key_trash() {
        let key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Trash);

        let key = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Trash);
    }

    #[test]
    fn test_key_tabs() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::SwitchTab);

        let key = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::ShowSort);

        let key = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::ShowSaved);
    }

    #[test]
    fn test_key_help() {
        let key = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::Help);
    }

    #[test]
    fn test_key_none() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key), KeyAction::None);
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut tracker = GestureTracker::new();
        let area = card_area();

        let start = tracker.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 30, 10), area);
        assert_eq!(start, Some(GestureEvent::Start));
        assert!(tracker.is_tracking());

        let sample = tracker.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 11), area);
        assert_eq!(sample, Some(GestureEvent::Sample { dx: -80.0, dy: 16.0 }));

        // Release outside the card still ends the gesture
        let end = tracker.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, 10), area);
        assert_eq!(end, Some(GestureEvent::End { dx: -200.0, dy: 0.0 }));
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_press_outside_card_is_ignored() {
        let mut tracker = GestureTracker::new();

        let event = tracker.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), card_area());
        assert_eq!(event, None);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut tracker = GestureTracker::new();

        let event = tracker.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 10), card_area());
        assert_eq!(event, None);

        let event = tracker.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 20, 10), card_area());
        assert_eq!(event, None);
    }

    #[test]
    fn test_second_press_cancels() {
        let mut tracker = GestureTracker::new();
        let area = card_area();

        tracker.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 30, 10), area);
        let event = tracker.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 30, 10), area);

        assert_eq!(event, Some(GestureEvent::Cancel));
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_reset() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.reset(), None);

        tracker.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 30, 10), card_area());
        assert_eq!(tracker.reset(), Some(GestureEvent::Cancel));
        assert!(!tracker.is_tracking());
    }
}
