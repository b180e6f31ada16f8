//! Passive elapsed-time reporting during a run.

use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tracing::info;

/// Reports wall-clock elapsed time at a fixed interval from an independent
/// task. Purely an observer of the clock: it holds no pipeline state and no
/// locks, and its task is aborted when the ticker is dropped, so cancellation
/// on run completion is tied to scope.
pub struct ProgressTicker {
    started: Instant,
    handle: JoinHandle<()>,
}

pub const DEFAULT_TICK: Duration = Duration::from_millis(500);

impl ProgressTicker {
    pub fn start(interval: Duration) -> Self {
        let started = Instant::now();
        let handle = tokio::spawn(async move {
            let mut tick = tokio::time::interval(interval);
            tick.tick().await; // completes immediately
            loop {
                tick.tick().await;
                info!(
                    elapsed_secs = started.elapsed().as_secs_f64(),
                    "run in progress"
                );
            }
        });
        Self { started, handle }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn elapsed_grows_while_running() {
        let ticker = ProgressTicker::start(Duration::from_millis(10));
        let first = ticker.elapsed();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(ticker.elapsed() > first);
    }

    #[tokio::test]
    async fn drop_stops_the_reporting_task() {
        let ticker = ProgressTicker::start(Duration::from_millis(10));
        let abort_handle = ticker.handle.abort_handle();
        assert!(!abort_handle.is_finished());

        drop(ticker);
        // Give the runtime a moment to observe the abort.
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(abort_handle.is_finished());
    }
}
