//! Periodic metrics-refresh scheduler.
//!
//! Drives the engine's refresh tick on a fixed cadence, independent of user
//! input. Exactly one scheduler is live per session: `start` on a running
//! scheduler is reported as an error, while `stop` is idempotent. The
//! interval is owned here and dropped synchronously on `stop`, so no tick
//! can be observed afterwards.

use crate::error::{EcoResult, EngineError};
use std::future;
use std::time::Duration;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::debug;

/// Cadence of the metrics refresh.
pub const REFRESH_PERIOD: Duration = Duration::from_millis(5000);

/// Fixed-cadence tick source for the engine loop.
///
/// The first tick fires one full period after `start`, and ticks skipped
/// while the loop was busy are dropped rather than replayed in a burst.
#[derive(Debug)]
pub struct RefreshScheduler {
    period: Duration,
    interval: Option<Interval>,
}

impl RefreshScheduler {
    /// Create a stopped scheduler with the given period.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    /// Begin ticking. Fails with `SchedulerAlreadyRunning` if already live.
    pub fn start(&mut self) -> EcoResult<()> {
        if self.interval.is_some() {
            return Err(EngineError::SchedulerAlreadyRunning);
        }
        let mut interval = time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.interval = Some(interval);
        debug!(period_ms = self.period.as_millis() as u64, "refresh scheduler started");
        Ok(())
    }

    /// Stop ticking. Idempotent; the pending tick is cancelled before this
    /// returns.
    pub fn stop(&mut self) {
        if self.interval.take().is_some() {
            debug!("refresh scheduler stopped");
        }
    }

    /// Whether the scheduler is currently ticking.
    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Wait for the next tick. Pends forever while stopped, which makes it
    /// safe as an always-armed `select!` branch.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => future::pending().await,
        }
    }
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new(REFRESH_PERIOD)
    }
}
