pub mod countdown;
pub mod tap;
pub mod widget;

pub use countdown::{
    Appearance, AppearanceChanges, AttemptId, ConfigError, CountdownButton, CountdownConfig,
    CountdownEvent, CountdownObserver,
};
pub use tap::{TapRecognizer, TapResult};
pub use widget::{Color, Event, EventResponse, MouseButton, Rect};
