use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use super::TickScheduler;

/// Tick source backed by a tokio interval task.
///
/// Each schedule gets a generation number. Ticks are tagged with the
/// generation that produced them and [`next_tick`](Self::next_tick) drops
/// anything from a cancelled generation, so a tick already queued when the
/// timer pauses never reaches it.
///
/// Arming spawns onto the current tokio runtime and panics outside of one.
#[derive(Debug)]
pub struct IntervalScheduler {
    tx: mpsc::UnboundedSender<u64>,
    rx: mpsc::UnboundedReceiver<u64>,
    handle: Option<JoinHandle<()>>,
    generation: u64,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            handle: None,
            generation: 0,
        }
    }

    /// Wait for the next tick of the current schedule.
    ///
    /// Pending forever while nothing is scheduled, which makes it safe to
    /// use as one branch of a `select!`.
    pub async fn next_tick(&mut self) {
        loop {
            match self.rx.recv().await {
                Some(generation) if generation == self.generation && self.handle.is_some() => {
                    return
                }
                Some(_) => continue,
                // The sender lives in `self`, so the channel never closes.
                None => std::future::pending::<()>().await,
            }
        }
    }
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TickScheduler for IntervalScheduler {
    fn schedule_repeating(&mut self, period: Duration) {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let tx = self.tx.clone();
        debug!(generation, period_ms = period.as_millis() as u64, "arming tick source");
        self.handle = Some(tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(generation).is_err() {
                    break;
                }
            }
        }));
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!(generation = self.generation, "cancelling tick source");
            handle.abort();
        }
        while self.rx.try_recv().is_ok() {}
    }

    fn is_scheduled(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
