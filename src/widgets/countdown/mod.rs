//! A tappable bar that counts down by repeatedly collapsing and re-expanding
//! a colored indicator.
//!
//! Tapping an idle button starts a countdown of `duration` steps. Each step is
//! two chained animation phases: the indicator collapses horizontally, then
//! springs back to a slightly narrower width than before. After the last step
//! the indicator has no width left, the button returns to idle and the
//! observer hears `countdown_completed`. Tapping again mid-countdown resets
//! the button at once and reports `countdown_cancelled`.
//!
//! The whole chain of phases is built when the countdown begins. Each phase
//! carries the [`AttemptId`] of its countdown and does nothing once that
//! countdown is over, so completions that arrive late can't touch a newer
//! countdown or report twice.
//!
//! # Example
//! ```ignore
//! let button = CountdownButton::with_config(
//!     host,
//!     CountdownConfig::new().text("Done").countdown_text("Oops, I wasn't done!"),
//! );
//! button.set_observer(&observer);
//! button.tap();
//! ```

mod appearance;
mod config;
mod observer;

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

pub use appearance::{Appearance, AppearanceChanges};
pub use config::{ConfigError, CountdownConfig};
pub use observer::{CountdownEvent, CountdownObserver};

use appearance::Visuals;

use crate::animation::{
    animate, Animation, AnimationHost, Guard, HorizontalShrinker, TimingFunction, Transform,
};
use crate::widgets::tap::{TapRecognizer, TapResult};
use crate::widgets::{Color, Event, EventResponse, Rect};

static NEXT_ATTEMPT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one countdown from tap to completion or cancellation
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct AttemptId(u64);

impl AttemptId {
    fn next() -> Self {
        AttemptId(NEXT_ATTEMPT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

enum CountdownState {
    Idle,
    Active(ActiveCountdown),
}

struct ActiveCountdown {
    attempt: AttemptId,
    steps_remaining: u32,
    shrinker: HorizontalShrinker,
}

struct ButtonInner {
    config: CountdownConfig,
    state: CountdownState,
    visuals: Visuals,
    bounds: Rect,
    tap: TapRecognizer,
    observer: Option<Weak<dyn CountdownObserver>>,
    host: Rc<dyn AnimationHost>,
}

impl ButtonInner {
    fn active_attempt(&self) -> Option<AttemptId> {
        match &self.state {
            CountdownState::Active(active) => Some(active.attempt),
            CountdownState::Idle => None,
        }
    }

    fn refresh_idle(&mut self) {
        if matches!(self.state, CountdownState::Idle) {
            let ButtonInner {
                config, visuals, ..
            } = self;
            visuals.show_idle(config);
        }
    }
}

/// Handle to a countdown button. Clones share the same button.
#[derive(Clone)]
pub struct CountdownButton {
    inner: Rc<RefCell<ButtonInner>>,
}

impl CountdownButton {
    pub fn new(host: Rc<dyn AnimationHost>) -> Self {
        Self::with_config(host, CountdownConfig::default())
    }

    pub fn with_config(host: Rc<dyn AnimationHost>, config: CountdownConfig) -> Self {
        let visuals = Visuals::idle(&config);
        Self {
            inner: Rc::new(RefCell::new(ButtonInner {
                config,
                state: CountdownState::Idle,
                visuals,
                bounds: Rect::default(),
                tap: TapRecognizer::new(),
                observer: None,
                host,
            })),
        }
    }

    // Configuration

    /// Copy of the live configuration
    pub fn config(&self) -> CountdownConfig {
        self.inner.borrow().config.clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.update_config(|config| config.text = Some(text));
    }

    pub fn clear_text(&self) {
        self.update_config(|config| config.text = None);
    }

    pub fn set_countdown_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.update_config(|config| config.countdown_text = Some(text));
    }

    pub fn clear_countdown_text(&self) {
        self.update_config(|config| config.countdown_text = None);
    }

    pub fn set_countdown_color(&self, color: Color) {
        self.update_config(|config| config.countdown_color = color);
    }

    pub fn set_background_color(&self, color: Color) {
        self.update_config(|config| config.background_color = color);
    }

    /// Number of steps for the next countdown
    pub fn set_duration(&self, steps: u32) {
        self.update_config(|config| config.duration = steps);
    }

    pub fn set_step_interval(&self, interval: Duration) {
        self.update_config(|config| config.step_interval = interval);
    }

    pub fn set_shrink_fraction(&self, fraction: f32) -> Result<(), ConfigError> {
        self.inner.borrow_mut().config.set_shrink_fraction(fraction)
    }

    /// Disabled buttons ignore taps. A countdown already running keeps going.
    pub fn set_enabled(&self, enabled: bool) {
        let mut inner = self.inner.borrow_mut();
        inner.config.enabled = enabled;
        if !enabled {
            inner.tap.reset();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.borrow().config.enabled
    }

    /// Area that accepts pointer input, in the coordinates events arrive in
    pub fn set_bounds(&self, bounds: Rect) {
        self.inner.borrow_mut().bounds = bounds;
    }

    pub fn bounds(&self) -> Rect {
        self.inner.borrow().bounds
    }

    fn update_config(&self, update: impl FnOnce(&mut CountdownConfig)) {
        let mut inner = self.inner.borrow_mut();
        update(&mut inner.config);
        // A running countdown keeps the look it started with
        inner.refresh_idle();
    }

    // Observer

    /// Replace the observer. Only a weak reference is kept.
    pub fn set_observer<O: CountdownObserver + 'static>(&self, observer: &Rc<O>) {
        let observer: Weak<dyn CountdownObserver> = Rc::<O>::downgrade(observer);
        self.inner.borrow_mut().observer = Some(observer);
    }

    pub fn clear_observer(&self) {
        self.inner.borrow_mut().observer = None;
    }

    // State

    pub fn is_counting_down(&self) -> bool {
        self.inner.borrow().active_attempt().is_some()
    }

    /// Steps left in the running countdown, `None` when idle
    pub fn steps_remaining(&self) -> Option<u32> {
        match &self.inner.borrow().state {
            CountdownState::Active(active) => Some(active.steps_remaining),
            CountdownState::Idle => None,
        }
    }

    pub fn current_attempt(&self) -> Option<AttemptId> {
        self.inner.borrow().active_attempt()
    }

    pub fn appearance(&self) -> Appearance {
        self.inner.borrow().visuals.snapshot()
    }

    /// Indicator transform a renderer should draw at `now`
    pub fn presented_transform(&self, now: Instant) -> Transform {
        self.inner.borrow().visuals.presented_transform(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.inner.borrow().visuals.is_animating(now)
    }

    /// Drain the set of properties changed since the last call
    pub fn take_changes(&self) -> AppearanceChanges {
        self.inner.borrow_mut().visuals.take_changes()
    }

    // Input

    /// Feed a pointer event; a completed tap toggles the countdown
    pub fn event(&self, event: &Event) -> EventResponse {
        let result = {
            let mut inner = self.inner.borrow_mut();
            if !inner.config.enabled {
                return EventResponse::Ignored;
            }
            let bounds = inner.bounds;
            inner.tap.handle_event(event, bounds)
        };
        if result == TapResult::Tapped {
            self.tap();
        }
        result.response()
    }

    /// Begin a countdown when idle, cancel it when one is running
    pub fn tap(&self) {
        if !self.is_enabled() {
            log::debug!("Ignoring tap on disabled countdown button");
            return;
        }
        match self.current_attempt() {
            None => self.begin(),
            Some(attempt) => self.cancel(attempt),
        }
    }

    fn begin(&self) {
        let attempt = AttemptId::next();
        let (host, chain) = {
            let mut inner = self.inner.borrow_mut();
            let config = inner.config.clone();
            log::debug!("Beginning countdown {:?} of {} steps", attempt, config.duration);
            inner.state = CountdownState::Active(ActiveCountdown {
                attempt,
                steps_remaining: config.duration,
                shrinker: HorizontalShrinker::new(config.duration),
            });
            if config.duration > 0 {
                inner.visuals.show_countdown(&config);
            }
            let chain = build_chain(&Rc::downgrade(&self.inner), attempt, &config);
            (Rc::clone(&inner.host), chain)
        };

        match chain {
            Some(chain) => {
                animate(&host, chain);
                self.notify(CountdownEvent::Began);
            }
            None => {
                log::debug!("Countdown {:?} has no steps, completing immediately", attempt);
                // Still active while `Began` is delivered; a tap from the observer cancels it
                self.notify(CountdownEvent::Began);
                finish(&Rc::downgrade(&self.inner), attempt);
            }
        }
    }

    fn cancel(&self, attempt: AttemptId) {
        {
            let mut inner = self.inner.borrow_mut();
            log::debug!("Cancelling countdown {:?}", attempt);
            inner.state = CountdownState::Idle;
            inner.refresh_idle();
        }
        self.notify(CountdownEvent::Cancelled);
    }

    fn notify(&self, event: CountdownEvent) {
        log::info!("Countdown {:?}", event);
        let observer = self
            .inner
            .borrow()
            .observer
            .as_ref()
            .and_then(Weak::upgrade);
        let Some(observer) = observer else {
            return;
        };
        match event {
            CountdownEvent::Began => observer.countdown_began(self),
            CountdownEvent::Completed => observer.countdown_completed(self),
            CountdownEvent::Cancelled => observer.countdown_cancelled(self),
        }
    }
}

/// Build the phases for every step of `attempt`: collapse, then re-expand to
/// the next width, ending in [`finish`].
fn build_chain(
    button: &Weak<RefCell<ButtonInner>>,
    attempt: AttemptId,
    config: &CountdownConfig,
) -> Option<Animation> {
    if config.duration == 0 {
        return None;
    }
    let guard: Guard = {
        let button = Weak::clone(button);
        Rc::new(move || is_current(&button, attempt))
    };
    let shrink = || {
        let button = Weak::clone(button);
        Animation::new(move |tx| {
            with_active(&button, attempt, |visuals, _| {
                visuals.animate_transform(Transform::HORIZONTAL_ZERO, tx);
            });
        })
        .duration(config.shrink_duration())
        .timing(TimingFunction::EaseIn)
        .guard(Rc::clone(&guard))
    };
    let expand = || {
        let button = Weak::clone(button);
        Animation::new(move |tx| {
            with_active(&button, attempt, |visuals, active| {
                if let Some(next) = active.shrinker.next() {
                    visuals.animate_transform(next, tx);
                }
                active.steps_remaining -= 1;
                log::debug!(
                    "Countdown {:?} ticked, {} steps remaining",
                    attempt,
                    active.steps_remaining
                );
            });
        })
        .duration(config.expand_duration())
        .guard(Rc::clone(&guard))
    };

    let mut head = shrink();
    let mut tail = head.chain(expand());
    for _ in 1..config.duration {
        tail = tail.chain(shrink()).chain(expand());
    }
    let button = Weak::clone(button);
    tail.on_complete(move || finish(&button, attempt));
    Some(head)
}

fn is_current(button: &Weak<RefCell<ButtonInner>>, attempt: AttemptId) -> bool {
    match button.upgrade() {
        Some(cell) => {
            let current = cell.borrow().active_attempt();
            current == Some(attempt)
        }
        None => false,
    }
}

/// Run `f` against the countdown if `attempt` is still the one running
fn with_active<R>(
    button: &Weak<RefCell<ButtonInner>>,
    attempt: AttemptId,
    f: impl FnOnce(&mut Visuals, &mut ActiveCountdown) -> R,
) -> Option<R> {
    let cell = button.upgrade()?;
    let mut inner = cell.borrow_mut();
    let ButtonInner { state, visuals, .. } = &mut *inner;
    match state {
        CountdownState::Active(active) if active.attempt == attempt => Some(f(visuals, active)),
        _ => {
            log::trace!("Ignoring stale callback for countdown {:?}", attempt);
            None
        }
    }
}

/// Last completion of a countdown's chain
fn finish(button: &Weak<RefCell<ButtonInner>>, attempt: AttemptId) {
    let Some(cell) = button.upgrade() else {
        return;
    };
    {
        let mut inner = cell.borrow_mut();
        if inner.active_attempt() != Some(attempt) {
            log::trace!("Ignoring stale completion for countdown {:?}", attempt);
            return;
        }
        log::debug!("Countdown {:?} ran out", attempt);
        inner.state = CountdownState::Idle;
        inner.refresh_idle();
    }
    CountdownButton { inner: cell }.notify(CountdownEvent::Completed);
}
