mod animatable;
mod animated;
mod chain;
mod shrinker;
mod timing;
mod transaction;
mod transform;

use std::time::Duration;

pub use animatable::Animatable;
pub use animated::AnimatedValue;
pub use chain::{Action, Animation, ChainError, Completion, Guard};
pub use shrinker::HorizontalShrinker;
pub use timing::TimingFunction;
pub use transaction::{animate, AnimationHost, Transaction, DEFAULT_DURATION};
pub use transform::Transform;

/// Configuration for how a property should animate when it changes
#[derive(Clone, Copy, Debug)]
pub struct Transition {
    /// Duration of the animation
    pub duration: Duration,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration: Duration, timing: TimingFunction) -> Self {
        Self { duration, timing }
    }
}
