//! A tappable countdown bar.
//!
//! [`CountdownButton`](widgets::CountdownButton) runs its countdown as a
//! chain of [`Animation`](animation::Animation) phases played by an
//! [`AnimationHost`](animation::AnimationHost). The [`host`] module has a
//! deterministic host for tests and a `calloop` based one for real use.

pub mod animation;
pub mod host;
pub mod widgets;

pub mod prelude {
    pub use crate::animation::{
        animate, Animation, AnimationHost, ChainError, TimingFunction, Transaction, Transform,
        Transition,
    };
    pub use crate::host::{LoopHost, ManualHost};
    pub use crate::widgets::{
        Appearance, AppearanceChanges, Color, ConfigError, CountdownButton, CountdownConfig,
        CountdownEvent, CountdownObserver, Event, EventResponse, MouseButton, Rect,
    };
}
