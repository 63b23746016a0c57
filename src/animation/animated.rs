use std::time::Instant;

use super::{Animatable, Transition};

/// A property whose model value changes instantly while its presented value
/// catches up over a transition.
///
/// `target` is what the control reports as its state; `sample` is what a
/// renderer should draw at a given instant.
#[derive(Debug, Clone)]
pub struct AnimatedValue<T: Animatable> {
    /// Value when the current animation started
    start: T,
    /// Value the animation is heading to
    target: T,
    /// When the current animation started
    start_time: Instant,
    /// Active transition, `None` once the value was set immediately
    transition: Option<Transition>,
}

impl<T: Animatable> AnimatedValue<T> {
    pub fn new(value: T) -> Self {
        Self {
            start: value.clone(),
            target: value,
            start_time: Instant::now(),
            transition: None,
        }
    }

    /// Start animating from the currently presented value to `target`
    pub fn animate_to(&mut self, target: T, transition: Transition, now: Instant) {
        self.start = self.sample(now);
        self.target = target;
        self.start_time = now;
        self.transition = Some(transition);
    }

    /// Set value immediately without animation
    pub fn set_immediate(&mut self, value: T) {
        self.start = value.clone();
        self.target = value;
        self.transition = None;
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Linear progress of the current animation at `now`, 1.0 when settled
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(transition) = &self.transition else {
            return 1.0;
        };
        let duration = transition.duration.as_secs_f32();
        if duration <= 0.0 {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time).as_secs_f32();
        (elapsed / duration).min(1.0)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    /// Presented value at `now`
    pub fn sample(&self, now: Instant) -> T {
        match &self.transition {
            Some(transition) => {
                let t = self.progress(now);
                if t >= 1.0 {
                    return self.target.clone();
                }
                T::lerp(&self.start, &self.target, transition.timing.evaluate(t))
            }
            None => self.target.clone(),
        }
    }
}
