//! Linked chains of animation phases.
//!
//! An [`Animation`] describes one phase: how long it runs, which curve it
//! uses and the mutation it applies. Its completion either runs a plain
//! callback or starts the next phase, so a whole sequence is built up front
//! and handed to [`animate`](super::animate) in one piece:
//!
//! ```ignore
//! let mut head = Animation::new(|tx| bar.collapse(tx)).duration(shrink);
//! head.chain(Animation::new(|tx| bar.expand_to(next, tx)).duration(expand))
//!     .on_complete(|| log::info!("done"));
//! animate(&host, head);
//! ```

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use thiserror::Error;

use super::{TimingFunction, Transaction};

/// Mutation applied while a phase's transaction is open
pub type Action = Box<dyn FnOnce(&Transaction)>;

/// Predicate checked before a phase starts; `false` abandons the rest of the chain
pub type Guard = Rc<dyn Fn() -> bool>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("animation already has a completion")]
    AlreadyLinked,
}

/// What happens once a phase has finished animating
pub enum Completion {
    /// Run this callback
    Simple(Box<dyn FnOnce()>),
    /// Start this animation
    Animation(Box<Animation>),
}

/// One phase of an animation chain
pub struct Animation {
    pub(crate) duration: Option<Duration>,
    pub(crate) timing: Option<TimingFunction>,
    pub(crate) action: Action,
    pub(crate) completion: Option<Completion>,
    pub(crate) guard: Option<Guard>,
}

impl Animation {
    /// Create a phase that applies `action` inside its transaction.
    /// Duration and curve fall back to the host defaults until set.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce(&Transaction) + 'static,
    {
        Self {
            duration: None,
            timing: None,
            action: Box::new(action),
            completion: None,
            guard: None,
        }
    }

    /// Set the duration of this phase
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set the timing function of this phase
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = Some(timing);
        self
    }

    /// Only start this phase while `guard` returns true
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Append `next` after this phase and return it, so chains can be
    /// extended fluently.
    ///
    /// # Panics
    ///
    /// Panics if this phase already has a completion. A chain is write-once.
    pub fn chain(&mut self, next: Animation) -> &mut Animation {
        match self.try_chain(next) {
            Ok(next) => next,
            Err(e) => panic!("cannot chain animation: {e}"),
        }
    }

    /// Like [`chain`](Self::chain) but reports a second link as an error.
    /// The existing completion is left untouched either way.
    pub fn try_chain(&mut self, next: Animation) -> Result<&mut Animation, ChainError> {
        if self.completion.is_some() {
            return Err(ChainError::AlreadyLinked);
        }
        let completion = self
            .completion
            .insert(Completion::Animation(Box::new(next)));
        match completion {
            Completion::Animation(next) => Ok(&mut **next),
            Completion::Simple(_) => unreachable!("completion was just set to an animation"),
        }
    }

    /// Run `callback` once this phase finishes, ending the chain here.
    ///
    /// # Panics
    ///
    /// Panics if this phase already has a completion.
    pub fn on_complete<F>(&mut self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        assert!(
            self.completion.is_none(),
            "cannot set completion: {}",
            ChainError::AlreadyLinked
        );
        self.completion = Some(Completion::Simple(Box::new(callback)));
    }

    /// The phase that starts after this one, if any
    pub fn next(&self) -> Option<&Animation> {
        match &self.completion {
            Some(Completion::Animation(next)) => Some(&**next),
            _ => None,
        }
    }

    pub fn has_completion(&self) -> bool {
        self.completion.is_some()
    }

    /// Number of phases from this one to the end of the chain
    pub fn len(&self) -> usize {
        std::iter::successors(Some(self), |a| a.next()).count()
    }

    pub fn duration_hint(&self) -> Option<Duration> {
        self.duration
    }

    pub fn timing_hint(&self) -> Option<&TimingFunction> {
        self.timing.as_ref()
    }

    /// Sum of explicit durations along the chain
    pub fn total_duration(&self) -> Duration {
        std::iter::successors(Some(self), |a| a.next())
            .filter_map(|a| a.duration)
            .sum()
    }

    pub(crate) fn is_live(&self) -> bool {
        self.guard.as_ref().map_or(true, |guard| guard())
    }
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("duration", &self.duration)
            .field("timing", &self.timing)
            .field("guarded", &self.guard.is_some())
            .field("next", &self.next())
            .finish()
    }
}
