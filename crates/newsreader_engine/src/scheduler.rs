use std::time::Duration;

use newsreader_logging::{news_debug, news_info};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Front page refresh period (five minutes).
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_millis(300_000);

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A single repeating timer.
///
/// The first tick fires one full period after [`RefreshScheduler::start`].
/// Ticks keep coming while earlier work is still in flight; there is no
/// backoff. The timer stops when the parent token is cancelled, when
/// [`RefreshScheduler::stop`] is called, or when the scheduler is dropped.
pub struct RefreshScheduler {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl RefreshScheduler {
    /// Spawns the timer on the current tokio runtime.
    pub fn start<F>(period: Duration, parent: &CancellationToken, on_tick: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let cancel = parent.child_token();
        let task_cancel = cancel.clone();

        let task = tokio::spawn(async move {
            news_info!("refresh timer started (period={period:?})");
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = task_cancel.cancelled() => {
                        news_info!("refresh timer stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        news_debug!("refresh tick");
                        on_tick();
                    }
                }
            }
        });

        Self { cancel, task }
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// True once the timer task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
