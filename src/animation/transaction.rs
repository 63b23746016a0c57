use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::{Animation, Completion, TimingFunction, Transition};

/// Duration used when a transaction doesn't set one
pub const DEFAULT_DURATION: Duration = Duration::from_millis(250);

/// The ambient settings for one animation phase.
///
/// Mutations applied while the transaction is open read its duration and
/// curve through [`transition`](Self::transition); committing it hands the
/// completion to the host.
pub struct Transaction {
    duration: Option<Duration>,
    timing: Option<TimingFunction>,
    completion: Option<Box<dyn FnOnce()>>,
    begin_time: Instant,
}

impl Transaction {
    pub fn begin() -> Self {
        Self::begin_at(Instant::now())
    }

    pub fn begin_at(begin_time: Instant) -> Self {
        Self {
            duration: None,
            timing: None,
            completion: None,
            begin_time,
        }
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = Some(duration);
    }

    pub fn set_timing(&mut self, timing: TimingFunction) {
        self.timing = Some(timing);
    }

    pub fn set_completion(&mut self, completion: Box<dyn FnOnce()>) {
        self.completion = Some(completion);
    }

    /// Duration of the phase, falling back to [`DEFAULT_DURATION`]
    pub fn duration(&self) -> Duration {
        self.duration.unwrap_or(DEFAULT_DURATION)
    }

    /// Curve of the phase, falling back to [`TimingFunction::DEFAULT`]
    pub fn timing(&self) -> TimingFunction {
        self.timing.unwrap_or_default()
    }

    pub fn transition(&self) -> Transition {
        Transition::new(self.duration(), self.timing())
    }

    pub fn begin_time(&self) -> Instant {
        self.begin_time
    }

    pub fn has_completion(&self) -> bool {
        self.completion.is_some()
    }

    /// Take the completion out; the host runs it once the phase has finished
    pub fn take_completion(&mut self) -> Option<Box<dyn FnOnce()>> {
        self.completion.take()
    }
}

impl fmt::Debug for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transaction")
            .field("duration", &self.duration())
            .field("timing", &self.timing())
            .field("has_completion", &self.has_completion())
            .finish()
    }
}

/// The platform side of animations: something that lets committed phases
/// play out and reports back when they finish.
///
/// Implementations must run each committed completion exactly once, on the
/// thread that committed it, and never from inside `commit` itself.
pub trait AnimationHost {
    fn commit(&self, transaction: Transaction);
}

/// Run an animation chain on `host`, one phase at a time.
///
/// Each phase opens a transaction, registers what should happen when it
/// finishes, applies its mutation and commits. The next phase only starts
/// from that completion. An empty chain does nothing.
pub fn animate(host: &Rc<dyn AnimationHost>, chain: impl Into<Option<Animation>>) {
    let Some(animation) = chain.into() else {
        log::trace!("Empty animation chain, nothing to run");
        return;
    };
    if !animation.is_live() {
        log::trace!("Animation chain abandoned by its guard");
        return;
    }

    let Animation {
        duration,
        timing,
        action,
        completion,
        ..
    } = animation;

    let mut transaction = Transaction::begin();
    if let Some(duration) = duration {
        transaction.set_duration(duration);
    }
    if let Some(timing) = timing {
        transaction.set_timing(timing);
    }
    match completion {
        None => {}
        Some(Completion::Simple(callback)) => transaction.set_completion(callback),
        Some(Completion::Animation(next)) => {
            let host = Rc::clone(host);
            transaction.set_completion(Box::new(move || animate(&host, *next)));
        }
    }

    action(&transaction);
    log::trace!(
        "Committing animation phase ({:?}, {:?})",
        transaction.duration(),
        transaction.timing()
    );
    host.commit(transaction);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ManualHost;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, Rc<ManualHost>) {
        (Rc::new(RefCell::new(Vec::new())), Rc::new(ManualHost::new()))
    }

    fn step(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> Animation {
        let log = Rc::clone(log);
        Animation::new(move |_| log.borrow_mut().push(name))
    }

    #[test]
    fn test_defaults() {
        let tx = Transaction::begin();
        assert_eq!(tx.duration(), DEFAULT_DURATION);
        assert!(matches!(tx.timing(), TimingFunction::CubicBezier(..)));
        assert!(!tx.has_completion());
    }

    #[test]
    fn test_phases_run_one_per_completion() {
        let (log, manual) = recorder();
        let host: Rc<dyn AnimationHost> = manual.clone();

        let mut head = step(&log, "a").duration(Duration::from_millis(950));
        head.chain(step(&log, "b").duration(Duration::from_millis(50)))
            .chain(step(&log, "c"));

        animate(&host, head);
        assert_eq!(*log.borrow(), ["a"]);
        assert_eq!(manual.pending(), 1);

        assert!(manual.complete_next());
        assert_eq!(*log.borrow(), ["a", "b"]);

        assert!(manual.complete_next());
        assert_eq!(*log.borrow(), ["a", "b", "c"]);

        // Last phase has no completion but still finishes
        assert!(manual.complete_next());
        assert!(!manual.complete_next());

        let durations: Vec<Duration> = manual.commits().iter().map(|c| c.duration).collect();
        assert_eq!(
            durations,
            [
                Duration::from_millis(950),
                Duration::from_millis(50),
                DEFAULT_DURATION
            ]
        );
    }

    #[test]
    fn test_terminal_callback_runs_after_last_phase() {
        let (log, manual) = recorder();
        let host: Rc<dyn AnimationHost> = manual.clone();

        let mut head = step(&log, "a");
        let done = Rc::clone(&log);
        head.on_complete(move || done.borrow_mut().push("done"));

        animate(&host, head);
        assert_eq!(*log.borrow(), ["a"]);
        manual.run_until_idle();
        assert_eq!(*log.borrow(), ["a", "done"]);
    }

    #[test]
    fn test_empty_chain_does_nothing() {
        let manual = Rc::new(ManualHost::new());
        let host: Rc<dyn AnimationHost> = manual.clone();
        animate(&host, None::<Animation>);
        assert_eq!(manual.pending(), 0);
        assert!(manual.commits().is_empty());
    }

    #[test]
    fn test_guard_stops_remaining_phases() {
        let (log, manual) = recorder();
        let host: Rc<dyn AnimationHost> = manual.clone();
        let live = Rc::new(std::cell::Cell::new(true));
        let guard = {
            let live = Rc::clone(&live);
            Rc::new(move || live.get()) as Rc<dyn Fn() -> bool>
        };

        let mut head = step(&log, "a").guard(Rc::clone(&guard));
        let done = Rc::clone(&log);
        head.chain(step(&log, "b").guard(guard))
            .on_complete(move || done.borrow_mut().push("done"));

        animate(&host, head);
        live.set(false);
        manual.run_until_idle();

        assert_eq!(*log.borrow(), ["a"]);
        assert_eq!(manual.commits().len(), 1);
    }

    #[test]
    fn test_mutation_sees_transaction_settings() {
        let manual = Rc::new(ManualHost::new());
        let host: Rc<dyn AnimationHost> = manual.clone();
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);

        animate(
            &host,
            Animation::new(move |tx| *sink.borrow_mut() = Some(tx.duration()))
                .duration(Duration::from_millis(120))
                .timing(TimingFunction::EaseIn),
        );

        assert_eq!(*seen.borrow(), Some(Duration::from_millis(120)));
        assert!(matches!(manual.commits()[0].timing, TimingFunction::EaseIn));
    }
}
