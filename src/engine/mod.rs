//! The engine actor: a single task owning the session state.
//!
//! All mutation funnels through one `tokio::select!` loop with three event
//! sources — handle commands, scheduler ticks, and the earliest notification
//! deadline. Each event runs to completion before the next is taken, which
//! is the run-to-completion guarantee the rest of the crate relies on.
//! Dropping the engine task cancels the pending refresh tick and every
//! notification deadline in one stroke.

mod command;
mod handle;

pub use command::Command;
pub use handle::EngineHandle;

use crate::notifications::{NotificationQueue, NOTIFICATION_TTL};
use crate::scheduler::{RefreshScheduler, REFRESH_PERIOD};
use crate::source::MetricsSource;
use crate::state::{ApplicationState, StateSnapshot};
use std::future;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, info};

/// Timing knobs for a session. Defaults match the dashboard's behavior;
/// tests shrink them.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Cadence of the metrics refresh.
    pub refresh_period: Duration,
    /// Display duration of a transient notification.
    pub notification_ttl: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            refresh_period: REFRESH_PERIOD,
            notification_ttl: NOTIFICATION_TTL,
        }
    }
}

/// The engine task. Constructed and spawned via [`Engine::spawn`]; not
/// otherwise reachable.
pub struct Engine {
    state: ApplicationState,
    source: Box<dyn MetricsSource>,
    scheduler: RefreshScheduler,
    rx: mpsc::UnboundedReceiver<Command>,
    state_tx: watch::Sender<StateSnapshot>,
}

impl Engine {
    /// Create the session state around an initial generated snapshot and
    /// spawn the engine task.
    ///
    /// Subscribers always observe a complete snapshot, even before the
    /// first refresh tick. The scheduler starts stopped; callers opt in via
    /// [`EngineHandle::start_refresh`]. The task ends on
    /// [`EngineHandle::shutdown`] or when every handle is dropped.
    pub fn spawn(
        mut source: impl MetricsSource + 'static,
        config: EngineConfig,
    ) -> (EngineHandle, JoinHandle<()>) {
        let initial = source.generate();
        let state = ApplicationState::with_queue(
            initial,
            NotificationQueue::with_ttl(config.notification_ttl),
        );
        let (tx, rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(state.snapshot());

        let engine = Engine {
            state,
            source: Box::new(source),
            scheduler: RefreshScheduler::new(config.refresh_period),
            rx,
            state_tx,
        };
        let join = tokio::spawn(engine.run());
        info!("engine session started");
        (EngineHandle::new(tx, state_rx), join)
    }

    async fn run(mut self) {
        loop {
            // Uniform TTL means the front of the queue carries the earliest
            // deadline; recompute after every event.
            let deadline = self.state.notifications().next_deadline();

            tokio::select! {
                maybe_cmd = self.rx.recv() => {
                    match maybe_cmd {
                        Some(command) => {
                            if self.handle_command(command) {
                                break;
                            }
                        }
                        // Every handle dropped: the session is over.
                        None => break,
                    }
                }
                _ = self.scheduler.tick() => {
                    let snapshot = self.source.generate();
                    self.state.refresh_metrics(snapshot);
                    self.publish();
                }
                _ = sleep_until_opt(deadline), if deadline.is_some() => {
                    let removed = self.state.notifications_mut().sweep(Instant::now());
                    if !removed.is_empty() {
                        self.publish();
                    }
                }
            }
        }
        self.scheduler.stop();
        info!("engine session ended");
    }

    /// Apply one command. Returns true when the session should end.
    fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::LogActivity { label, reply } => {
                let result = self.state.log_activity(&label);
                if result.is_ok() {
                    self.publish();
                }
                let _ = reply.send(result);
            }
            Command::SetActiveView { view, reply } => {
                let result = self.state.set_active_view(&view);
                if result.is_ok() {
                    self.publish();
                }
                let _ = reply.send(result);
            }
            Command::RedeemReward { title } => {
                self.state.redeem_reward(&title);
                self.publish();
            }
            Command::Announce { message } => {
                self.state.announce(&message);
                self.publish();
            }
            Command::StartRefresh { reply } => {
                let _ = reply.send(self.scheduler.start());
            }
            Command::StopRefresh { reply } => {
                self.scheduler.stop();
                let _ = reply.send(());
            }
            Command::Shutdown => {
                debug!("shutdown requested");
                return true;
            }
        }
        false
    }

    fn publish(&self) {
        // send_replace never fails, even with no live subscribers.
        self.state_tx.send_replace(self.state.snapshot());
    }
}

/// Sleep until the deadline, or forever when there is none. Guarded by the
/// caller's `if deadline.is_some()`, but safe either way.
async fn sleep_until_opt(deadline: Option<Instant>) {
    match deadline {
        Some(at) => time::sleep_until(at).await,
        None => future::pending().await,
    }
}
