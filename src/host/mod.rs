//! Hosts that play committed animation phases and report their completion.
//!
//! [`ManualHost`] completes phases only when asked, which makes whole
//! countdowns steppable in tests. [`LoopHost`] drives them with timers on a
//! `calloop` event loop.

mod event_loop;
mod manual;

pub use event_loop::LoopHost;
pub use manual::{CommitRecord, ManualHost};
