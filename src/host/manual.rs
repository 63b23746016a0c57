use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::animation::{AnimationHost, TimingFunction, Transaction};

/// What a committed transaction looked like
#[derive(Debug, Clone)]
pub struct CommitRecord {
    pub duration: Duration,
    pub timing: TimingFunction,
    pub begin_time: Instant,
}

/// A host whose phases finish only when [`complete_next`](Self::complete_next)
/// is called.
///
/// Completions run in commit order. Nothing is borrowed while a completion
/// runs, so completions may commit further phases.
#[derive(Default)]
pub struct ManualHost {
    pending: RefCell<VecDeque<Option<Box<dyn FnOnce()>>>>,
    commits: RefCell<Vec<CommitRecord>>,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish the oldest committed phase. Returns false if none was pending.
    pub fn complete_next(&self) -> bool {
        let next = self.pending.borrow_mut().pop_front();
        match next {
            Some(completion) => {
                if let Some(completion) = completion {
                    completion();
                }
                true
            }
            None => false,
        }
    }

    /// Finish phases until nothing is pending, returning how many finished
    pub fn run_until_idle(&self) -> usize {
        let mut finished = 0;
        while self.complete_next() {
            finished += 1;
        }
        finished
    }

    /// Number of committed phases that haven't finished yet
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Every transaction committed so far, oldest first
    pub fn commits(&self) -> Vec<CommitRecord> {
        self.commits.borrow().clone()
    }
}

impl AnimationHost for ManualHost {
    fn commit(&self, mut transaction: Transaction) {
        self.commits.borrow_mut().push(CommitRecord {
            duration: transaction.duration(),
            timing: transaction.timing(),
            begin_time: transaction.begin_time(),
        });
        self.pending
            .borrow_mut()
            .push_back(transaction.take_completion());
    }
}
