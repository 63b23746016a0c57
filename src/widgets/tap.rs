use super::{Event, EventResponse, MouseButton, Rect};

/// Outcome of feeding one event to a [`TapRecognizer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapResult {
    /// Event isn't part of a tap
    Ignored,
    /// A press is in progress
    Tracking,
    /// Press and release both landed inside the bounds
    Tapped,
    /// The pointer left or was released outside, abandoning the press
    Cancelled,
}

impl TapResult {
    pub fn response(self) -> EventResponse {
        match self {
            TapResult::Ignored => EventResponse::Ignored,
            TapResult::Tracking | TapResult::Tapped | TapResult::Cancelled => {
                EventResponse::Handled
            }
        }
    }
}

/// Recognizes a single-pointer tap: left button down and up inside `bounds`.
#[derive(Debug, Default)]
pub struct TapRecognizer {
    pressed: bool,
}

impl TapRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Forget any press in progress
    pub fn reset(&mut self) {
        self.pressed = false;
    }

    pub fn handle_event(&mut self, event: &Event, bounds: Rect) -> TapResult {
        match *event {
            Event::MouseDown {
                x,
                y,
                button: MouseButton::Left,
            } if bounds.contains(x, y) => {
                self.pressed = true;
                TapResult::Tracking
            }
            Event::MouseMove { x, y } if self.pressed => {
                if bounds.contains(x, y) {
                    TapResult::Tracking
                } else {
                    self.pressed = false;
                    TapResult::Cancelled
                }
            }
            Event::MouseUp {
                x,
                y,
                button: MouseButton::Left,
            } if self.pressed => {
                self.pressed = false;
                if bounds.contains(x, y) {
                    TapResult::Tapped
                } else {
                    TapResult::Cancelled
                }
            }
            Event::MouseLeave if self.pressed => {
                self.pressed = false;
                TapResult::Cancelled
            }
            _ => TapResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 320.0,
        height: 64.0,
    };

    fn down(x: f32, y: f32) -> Event {
        Event::MouseDown {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    fn up(x: f32, y: f32) -> Event {
        Event::MouseUp {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    #[test]
    fn test_press_and_release_inside_is_a_tap() {
        let mut tap = TapRecognizer::new();
        assert_eq!(tap.handle_event(&down(10.0, 10.0), BOUNDS), TapResult::Tracking);
        assert!(tap.is_pressed());
        assert_eq!(
            tap.handle_event(&Event::MouseMove { x: 20.0, y: 12.0 }, BOUNDS),
            TapResult::Tracking
        );
        assert_eq!(tap.handle_event(&up(20.0, 12.0), BOUNDS), TapResult::Tapped);
        assert!(!tap.is_pressed());
    }

    #[test]
    fn test_release_outside_cancels() {
        let mut tap = TapRecognizer::new();
        tap.handle_event(&down(10.0, 10.0), BOUNDS);
        assert_eq!(tap.handle_event(&up(10.0, 100.0), BOUNDS), TapResult::Cancelled);
    }

    #[test]
    fn test_dragging_out_cancels() {
        let mut tap = TapRecognizer::new();
        tap.handle_event(&down(10.0, 10.0), BOUNDS);
        assert_eq!(
            tap.handle_event(&Event::MouseMove { x: 400.0, y: 10.0 }, BOUNDS),
            TapResult::Cancelled
        );
        // Coming back and releasing doesn't resurrect the press
        assert_eq!(tap.handle_event(&up(10.0, 10.0), BOUNDS), TapResult::Ignored);
    }

    #[test]
    fn test_leave_cancels() {
        let mut tap = TapRecognizer::new();
        tap.handle_event(&down(10.0, 10.0), BOUNDS);
        assert_eq!(tap.handle_event(&Event::MouseLeave, BOUNDS), TapResult::Cancelled);
        assert_eq!(tap.handle_event(&Event::MouseLeave, BOUNDS), TapResult::Ignored);
    }

    #[test]
    fn test_other_buttons_and_outside_presses_are_ignored() {
        let mut tap = TapRecognizer::new();
        let right = Event::MouseDown {
            x: 10.0,
            y: 10.0,
            button: MouseButton::Right,
        };
        assert_eq!(tap.handle_event(&right, BOUNDS), TapResult::Ignored);
        assert_eq!(tap.handle_event(&down(-5.0, 10.0), BOUNDS), TapResult::Ignored);
        assert_eq!(tap.handle_event(&up(10.0, 10.0), BOUNDS), TapResult::Ignored);
        assert_eq!(TapResult::Ignored.response(), EventResponse::Ignored);
        assert_eq!(TapResult::Tapped.response(), EventResponse::Handled);
    }
}
