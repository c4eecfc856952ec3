//! Command messages accepted by the engine actor.

use crate::error::EcoResult;
use crate::models::ViewId;
use tokio::sync::oneshot;

/// Write intents sent from an [`EngineHandle`](super::EngineHandle) to the
/// engine task.
///
/// Each command is processed to completion before the next message or timer
/// event, so state mutations never interleave.
#[derive(Debug)]
pub enum Command {
    /// Log an eco-activity: award points and enqueue a confirmation.
    ///
    /// Replies with the awarded amount, or `InvalidActivity` for labels
    /// outside the fixed catalog.
    LogActivity {
        label: String,
        reply: oneshot::Sender<EcoResult<u32>>,
    },
    /// Switch the active view.
    ///
    /// Replies with the parsed view, or `InvalidView` for unknown
    /// identifiers.
    SetActiveView {
        view: String,
        reply: oneshot::Sender<EcoResult<ViewId>>,
    },
    /// Enqueue a reward-redemption confirmation. Total; no reply.
    RedeemReward { title: String },
    /// Enqueue a free-form notification verbatim (challenge progress
    /// updates). Total; no reply.
    Announce { message: String },
    /// Start the periodic metrics refresh.
    ///
    /// Replies with `SchedulerAlreadyRunning` if a refresh is already live.
    StartRefresh {
        reply: oneshot::Sender<EcoResult<()>>,
    },
    /// Stop the periodic metrics refresh. Idempotent; the acknowledgement
    /// guarantees no further tick fires after the caller observes it.
    StopRefresh { reply: oneshot::Sender<()> },
    /// End the session: stop the scheduler and exit the engine task.
    Shutdown,
}
