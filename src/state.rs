//! Application state and its mutation operations.
//!
//! [`ApplicationState`] is the single shared resource of a session: the
//! current metrics snapshot, the active view selector, and the notification
//! queue. Every mutation goes through a named operation here — the engine
//! actor serializes calls, and nothing outside this module writes fields
//! directly. That funneling is the sole discipline preventing inconsistent
//! reads.

use crate::error::EcoResult;
use crate::models::{ActivityKind, MetricsSnapshot, ViewId};
use crate::notifications::{Notification, NotificationQueue};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

/// Eco points awarded per logged activity, half-open range.
pub const ACTIVITY_AWARD_RANGE: (u32, u32) = (10, 60);

/// Read-only view of the application state, published to subscribers on
/// every mutation.
#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot {
    /// The latest complete metrics snapshot.
    pub metrics: MetricsSnapshot,
    /// Which content panel is active.
    pub active_view: ViewId,
    /// Live notifications, oldest first.
    pub notifications: Vec<Notification>,
}

/// Mutable session state. One instance per session, owned by the engine
/// actor; created at session start, dropped at session end.
#[derive(Debug)]
pub struct ApplicationState {
    metrics: MetricsSnapshot,
    active_view: ViewId,
    notifications: NotificationQueue,
    rng: SmallRng,
}

impl ApplicationState {
    /// Create session state around an initial snapshot.
    pub fn new(initial: MetricsSnapshot) -> Self {
        Self {
            metrics: initial,
            active_view: ViewId::default(),
            notifications: NotificationQueue::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create session state with a custom notification queue (tests use a
    /// shortened display duration).
    pub fn with_queue(initial: MetricsSnapshot, notifications: NotificationQueue) -> Self {
        Self {
            metrics: initial,
            active_view: ViewId::default(),
            notifications,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Atomically replace the current metrics with a fresh snapshot.
    ///
    /// The eco-point balance earned this session survives the tick: the
    /// stored snapshot keeps the larger of the previous balance and the
    /// generated one, so points never move backwards outside a full reset.
    pub fn refresh_metrics(&mut self, mut snapshot: MetricsSnapshot) {
        snapshot.eco_points = snapshot.eco_points.max(self.metrics.eco_points);
        debug!(
            eco_points = snapshot.eco_points,
            community_rank = snapshot.community_rank,
            "metrics refreshed"
        );
        self.metrics = snapshot;
    }

    /// Log an eco-activity: award points and enqueue a confirmation.
    ///
    /// The label must belong to the fixed activity catalog; an unknown label
    /// fails with `InvalidActivity` and changes nothing. Returns the awarded
    /// amount, uniformly drawn from [`ACTIVITY_AWARD_RANGE`].
    pub fn log_activity(&mut self, label: &str) -> EcoResult<u32> {
        let activity = ActivityKind::from_label(label)?;
        let awarded = self.rng.gen_range(ACTIVITY_AWARD_RANGE.0..ACTIVITY_AWARD_RANGE.1);
        self.metrics.eco_points += awarded;
        info!(%activity, awarded, total = self.metrics.eco_points, "activity logged");
        self.notifications
            .enqueue(format!("Logged {}! Eco points updated.", activity.label()));
        Ok(awarded)
    }

    /// Switch the active view. Unknown view strings fail with `InvalidView`
    /// and leave the selector unchanged.
    pub fn set_active_view(&mut self, view: &str) -> EcoResult<ViewId> {
        let parsed: ViewId = view.parse()?;
        if parsed != self.active_view {
            debug!(from = %self.active_view, to = %parsed, "view switched");
        }
        self.active_view = parsed;
        Ok(parsed)
    }

    /// Enqueue a free-form announcement verbatim.
    ///
    /// The challenges panel supplies its own complete progress messages
    /// (e.g. "Logged progress for Zero Waste Challenge!"), so nothing is
    /// reformatted here.
    pub fn announce(&mut self, message: &str) {
        info!(%message, "announcement");
        self.notifications.enqueue(message.to_string());
    }

    /// Enqueue a redemption confirmation for a reward.
    ///
    /// Deliberately does not deduct the reward's point cost: redemption is
    /// simulation-only for now.
    pub fn redeem_reward(&mut self, title: &str) {
        info!(%title, "reward redeemed");
        self.notifications.enqueue(format!("{} redeemed!", title));
    }

    /// Current metrics snapshot.
    pub fn metrics(&self) -> &MetricsSnapshot {
        &self.metrics
    }

    /// Currently active view.
    pub fn active_view(&self) -> ViewId {
        self.active_view
    }

    /// The notification queue (the engine's timer arm drives its sweep).
    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// Mutable access to the notification queue, for the sweep.
    pub fn notifications_mut(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    /// Produce the read model published to subscribers.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            metrics: self.metrics.clone(),
            active_view: self.active_view,
            notifications: self.notifications.list().cloned().collect(),
        }
    }
}
