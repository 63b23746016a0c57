use calloop::timer::{TimeoutAction, Timer};
use calloop::LoopHandle;

use crate::animation::{AnimationHost, Transaction};

/// Plays animation phases on a `calloop` event loop.
///
/// Every commit registers a one-shot timer lasting the phase's duration; the
/// phase's completion runs from the timer callback while the loop dispatches,
/// on the loop's thread.
pub struct LoopHost<'l, Data> {
    handle: LoopHandle<'l, Data>,
}

impl<'l, Data> LoopHost<'l, Data> {
    pub fn new(handle: LoopHandle<'l, Data>) -> Self {
        Self { handle }
    }
}

impl<'l, Data> AnimationHost for LoopHost<'l, Data> {
    fn commit(&self, mut transaction: Transaction) {
        let duration = transaction.duration();
        let mut completion = transaction.take_completion();
        let timer = Timer::from_duration(duration);

        let result = self.handle.insert_source(timer, move |_, _, _| {
            if let Some(completion) = completion.take() {
                completion();
            }
            TimeoutAction::Drop
        });
        if let Err(e) = result {
            log::error!("Failed to schedule animation completion: {}", e.error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    use crate::animation::{animate, Animation};

    #[test]
    fn test_phases_complete_on_dispatch() {
        let mut event_loop: calloop::EventLoop<'static, ()> =
            calloop::EventLoop::try_new().expect("Failed to create event loop");
        let host: Rc<dyn AnimationHost> = Rc::new(LoopHost::new(event_loop.handle()));
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&log);
        let second = Rc::clone(&log);
        let done = Rc::clone(&log);
        let mut head = Animation::new(move |_| first.borrow_mut().push("first"))
            .duration(Duration::from_millis(5));
        head.chain(
            Animation::new(move |_| second.borrow_mut().push("second"))
                .duration(Duration::from_millis(5)),
        )
        .on_complete(move || done.borrow_mut().push("done"));

        animate(&host, head);
        assert_eq!(*log.borrow(), ["first"]);

        let deadline = Instant::now() + Duration::from_secs(2);
        while log.borrow().len() < 3 && Instant::now() < deadline {
            event_loop
                .dispatch(Some(Duration::from_millis(10)), &mut ())
                .expect("Failed to dispatch");
        }
        assert_eq!(*log.borrow(), ["first", "second", "done"]);
    }
}
