//! Cancelable periodic tick source.
//!
//! The engine never schedules itself; a `Ticker` pushes ticks into a channel
//! and the owner of the engine applies them. Dropping the `Ticker` aborts
//! its task, so every exit path releases the interval.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// One second of timer progress, tagged with the ticker that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
}

/// Handle to a running tick task.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
    generation: u64,
}

impl Ticker {
    /// Spawn a tick task on the current tokio runtime.
    ///
    /// The first tick arrives one full `period` after spawning. The task
    /// ends on its own once the receiving side of `sender` is gone.
    pub fn spawn(period: Duration, sender: mpsc::Sender<Tick>, generation: u64) -> Self {
        // tokio's interval rejects a zero period.
        let period = period.max(Duration::from_millis(1));
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                trace!(generation, "tick");
                if sender.send(Tick { generation }).await.is_err() {
                    break;
                }
            }
        });
        debug!(generation, ?period, "ticker spawned");
        Self { handle, generation }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
        debug!(generation = self.generation, "ticker released");
    }
}
