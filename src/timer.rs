use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Whole seconds remaining.
    Tick(u64),
    /// One minute left.
    Warning,
    Expired,
}

/// Countdown timer for a timed session. The producer thread stops as soon
/// as `stop` is set, so a completed or abandoned session can never receive
/// stale ticks.
pub struct TimerHandle {
    stop: Arc<AtomicBool>,
    rx: mpsc::Receiver<TimerEvent>,
}

impl TimerHandle {
    pub fn start(limit_secs: u64) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::channel();

        let stop_flag = stop.clone();
        thread::spawn(move || {
            let mut remaining = limit_secs;
            let mut warned = false;

            loop {
                if stop_flag.load(Ordering::SeqCst) {
                    return;
                }
                if tx.send(TimerEvent::Tick(remaining)).is_err() {
                    return;
                }
                if remaining == 0 {
                    let _ = tx.send(TimerEvent::Expired);
                    return;
                }
                if remaining <= 60 && !warned {
                    warned = true;
                    let _ = tx.send(TimerEvent::Warning);
                }

                thread::sleep(Duration::from_secs(1));
                remaining -= 1;
            }
        });

        Self { stop, rx }
    }

    pub fn stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// Drain without blocking.
    pub fn try_events(&self) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        while let Ok(ev) = self.rx.try_recv() {
            events.push(ev);
        }
        events
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
