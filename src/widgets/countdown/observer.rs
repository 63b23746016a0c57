use super::CountdownButton;

/// The three things a countdown can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    Began,
    /// Every step elapsed without interruption
    Completed,
    /// A tap interrupted the countdown
    Cancelled,
}

/// Listener for countdown progress.
///
/// Exactly one of `countdown_completed` / `countdown_cancelled` follows each
/// `countdown_began`. The button only keeps a weak reference to its observer.
pub trait CountdownObserver {
    fn countdown_began(&self, _button: &CountdownButton) {}

    fn countdown_completed(&self, _button: &CountdownButton) {}

    fn countdown_cancelled(&self, _button: &CountdownButton) {}
}

/// Closures observe every event through one callback.
impl<F> CountdownObserver for F
where
    F: Fn(CountdownEvent, &CountdownButton),
{
    fn countdown_began(&self, button: &CountdownButton) {
        self(CountdownEvent::Began, button)
    }

    fn countdown_completed(&self, button: &CountdownButton) {
        self(CountdownEvent::Completed, button)
    }

    fn countdown_cancelled(&self, button: &CountdownButton) {
        self(CountdownEvent::Cancelled, button)
    }
}
