//! Runs a countdown button on a calloop event loop and draws its indicator
//! in the terminal. Set RUST_LOG=debug to watch the state machine.

use std::rc::Rc;
use std::time::{Duration, Instant};

use calloop::timer::{TimeoutAction, Timer};
use calloop::{EventLoop, LoopSignal};
use countdown_button::prelude::*;

const BAR_WIDTH: usize = 40;
const FRAME: Duration = Duration::from_millis(50);

/// Logs every event and stops the loop once a countdown runs out
struct StopWhenDone {
    signal: LoopSignal,
}

impl CountdownObserver for StopWhenDone {
    fn countdown_began(&self, button: &CountdownButton) {
        log::info!("Began: {:?}", button.appearance().label);
    }

    fn countdown_completed(&self, _button: &CountdownButton) {
        log::info!("Completed");
        self.signal.stop();
    }

    fn countdown_cancelled(&self, _button: &CountdownButton) {
        log::info!("Cancelled");
    }
}

fn render(button: &CountdownButton, now: Instant) -> String {
    let appearance = button.appearance();
    let bounds = Rect::new(0.0, 0.0, BAR_WIDTH as f32, 1.0);
    let bar = button.presented_transform(now).apply_to_rect(bounds);
    let start = bar.x.round() as usize;
    let end = (bar.x + bar.width).round() as usize;
    let fill = if appearance.indicator_opacity > 0.0 { '#' } else { '.' };

    let cells: String = (0..BAR_WIDTH)
        .map(|i| if (start..end).contains(&i) { fill } else { '.' })
        .collect();
    format!("[{}] {}", cells, appearance.label.unwrap_or_default())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut event_loop: EventLoop<'static, ()> = EventLoop::try_new()?;
    let handle = event_loop.handle();
    let host: Rc<dyn AnimationHost> = Rc::new(LoopHost::new(handle.clone()));

    let button = CountdownButton::with_config(
        host,
        CountdownConfig::new()
            .text("Done")
            .countdown_text("Oops, I wasn't done!")
            .duration(3),
    );
    let observer = Rc::new(StopWhenDone {
        signal: event_loop.get_signal(),
    });
    button.set_observer(&observer);

    // Tap, change our mind, then let the second countdown run out
    for (at_ms, what) in [(0u64, "tap"), (1500, "re-tap"), (2000, "tap")] {
        let button = button.clone();
        handle
            .insert_source(
                Timer::from_duration(Duration::from_millis(at_ms)),
                move |_, _, _| {
                    log::info!("Simulated {what}");
                    button.tap();
                    TimeoutAction::Drop
                },
            )
            .map_err(|e| e.error)?;
    }

    let frame_button = button.clone();
    handle
        .insert_source(Timer::from_duration(FRAME), move |_, _, _| {
            let now = Instant::now();
            let changed = !frame_button.take_changes().is_empty();
            if changed || frame_button.is_animating(now) {
                println!("{}", render(&frame_button, now));
            }
            TimeoutAction::ToDuration(FRAME)
        })
        .map_err(|e| e.error)?;

    event_loop.run(None::<Duration>, &mut (), |_| {})?;
    Ok(())
}
