//! Cloneable handle to a running engine task.

use super::Command;
use crate::error::{EcoResult, EngineError};
use crate::models::ViewId;
use crate::state::StateSnapshot;
use tokio::sync::{mpsc, oneshot, watch};

/// The presentation layer's entire surface onto the engine.
///
/// Reads go through [`state`](EngineHandle::state) or
/// [`subscribe`](EngineHandle::subscribe); writes go through the intent
/// methods, which serialize behind the engine's command queue. Every method
/// fails with [`EngineError::EngineClosed`] once the engine task has ended.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    tx: mpsc::UnboundedSender<Command>,
    state_rx: watch::Receiver<StateSnapshot>,
}

impl EngineHandle {
    pub(super) fn new(
        tx: mpsc::UnboundedSender<Command>,
        state_rx: watch::Receiver<StateSnapshot>,
    ) -> Self {
        Self { tx, state_rx }
    }

    /// Log an eco-activity by its catalog label; returns the points awarded.
    pub async fn log_activity(&self, label: impl Into<String>) -> EcoResult<u32> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::LogActivity {
            label: label.into(),
            reply,
        })?;
        rx.await.map_err(|_| EngineError::EngineClosed)?
    }

    /// Switch the active view by its string identifier.
    pub async fn set_active_view(&self, view: impl Into<String>) -> EcoResult<ViewId> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::SetActiveView {
            view: view.into(),
            reply,
        })?;
        rx.await.map_err(|_| EngineError::EngineClosed)?
    }

    /// Enqueue a reward-redemption confirmation.
    pub fn redeem_reward(&self, title: impl Into<String>) -> EcoResult<()> {
        self.send(Command::RedeemReward {
            title: title.into(),
        })
    }

    /// Enqueue a free-form announcement verbatim, e.g. a challenge-progress
    /// message.
    pub fn announce(&self, message: impl Into<String>) -> EcoResult<()> {
        self.send(Command::Announce {
            message: message.into(),
        })
    }

    /// Start the periodic metrics refresh.
    pub async fn start_refresh(&self) -> EcoResult<()> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::StartRefresh { reply })?;
        rx.await.map_err(|_| EngineError::EngineClosed)?
    }

    /// Stop the periodic metrics refresh. Once this returns, no further
    /// refresh tick will be observed.
    pub async fn stop_refresh(&self) -> EcoResult<()> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::StopRefresh { reply })?;
        rx.await.map_err(|_| EngineError::EngineClosed)
    }

    /// End the session. The engine task exits after processing everything
    /// already queued.
    pub fn shutdown(&self) {
        // A closed channel means the engine already stopped.
        let _ = self.tx.send(Command::Shutdown);
    }

    /// The latest published state snapshot.
    pub fn state(&self) -> StateSnapshot {
        self.state_rx.borrow().clone()
    }

    /// Subscribe to state updates; the receiver yields a fresh snapshot on
    /// every mutation.
    pub fn subscribe(&self) -> watch::Receiver<StateSnapshot> {
        self.state_rx.clone()
    }

    fn send(&self, command: Command) -> EcoResult<()> {
        self.tx.send(command).map_err(|_| EngineError::EngineClosed)
    }
}
