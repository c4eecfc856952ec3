//! Transient notification queue.
//!
//! Notifications are short-lived banners: each entry gets its own expiry
//! deadline a fixed delay after enqueue, independent of every other entry.
//! The queue owns expiry — callers never remove entries themselves. The
//! engine's timer arm asks for [`next_deadline`](NotificationQueue::next_deadline)
//! and runs [`sweep`](NotificationQueue::sweep) when it elapses, so expiring
//! one notification can never disturb another regardless of arrival order or
//! overlapping lifetimes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;

/// How long a notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

/// Unique, monotonically increasing notification identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NotificationId(u64);

/// A transient user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Unique id, assigned at enqueue.
    pub id: NotificationId,
    /// Display text.
    pub message: String,
    /// Wall-clock enqueue time.
    pub created_at: DateTime<Utc>,
    /// Monotonic expiry deadline. Internal to the queue's sweep.
    #[serde(skip)]
    expires_at: Instant,
}

/// Ordered collection of live notifications, oldest first.
///
/// Unbounded by design: size is limited in practice only by the enqueue
/// rate against the fixed expiry delay.
#[derive(Debug)]
pub struct NotificationQueue {
    entries: VecDeque<Notification>,
    ttl: Duration,
    next_id: u64,
}

impl NotificationQueue {
    /// Create an empty queue with the standard display duration.
    pub fn new() -> Self {
        Self::with_ttl(NOTIFICATION_TTL)
    }

    /// Create an empty queue with a custom display duration.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: VecDeque::new(),
            ttl,
            next_id: 0,
        }
    }

    /// Append a notification and schedule its expiry one TTL from now.
    pub fn enqueue(&mut self, message: impl Into<String>) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        let message = message.into();
        tracing::debug!(id = id.0, %message, "notification enqueued");
        self.entries.push_back(Notification {
            id,
            message,
            created_at: Utc::now(),
            expires_at: Instant::now() + self.ttl,
        });
        id
    }

    /// Remove the notification with the given id.
    ///
    /// Idempotent: removing an id that already expired (or never existed)
    /// is a no-op, not an error.
    pub fn expire(&mut self, id: NotificationId) {
        if let Some(pos) = self.entries.iter().position(|n| n.id == id) {
            self.entries.remove(pos);
            tracing::debug!(id = id.0, "notification expired");
        }
    }

    /// Live notifications in insertion order, oldest first.
    pub fn list(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Number of live notifications.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The earliest pending expiry deadline, if any entry is live.
    ///
    /// Entries expire in enqueue order (the TTL is uniform), so the front
    /// of the queue always carries the earliest deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.front().map(|n| n.expires_at)
    }

    /// Drop every entry whose deadline has passed. Returns the removed ids.
    pub fn sweep(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut removed = Vec::new();
        while let Some(front) = self.entries.front() {
            if front.expires_at > now {
                break;
            }
            let gone = self.entries.pop_front().expect("front checked above");
            tracing::debug!(id = gone.id.0, "notification expired");
            removed.push(gone.id);
        }
        removed
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_assigns_monotonic_ids() {
        let mut queue = NotificationQueue::new();
        let a = queue.enqueue("first");
        let b = queue.enqueue("second");
        let c = queue.enqueue("third");
        assert!(a < b && b < c);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut queue = NotificationQueue::new();
        queue.enqueue("first");
        queue.enqueue("second");
        let messages: Vec<&str> = queue.list().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_expire_removes_only_the_named_entry() {
        let mut queue = NotificationQueue::new();
        let a = queue.enqueue("a");
        let b = queue.enqueue("b");
        queue.expire(a);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.list().next().unwrap().id, b);
    }

    #[test]
    fn test_expire_is_idempotent() {
        let mut queue = NotificationQueue::new();
        let a = queue.enqueue("a");
        queue.expire(a);
        queue.expire(a);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_next_deadline_is_none_when_empty() {
        let queue = NotificationQueue::new();
        assert!(queue.next_deadline().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_removes_expired_entries_in_order() {
        let mut queue = NotificationQueue::new();
        let a = queue.enqueue("a");
        tokio::time::advance(Duration::from_millis(1000)).await;
        let b = queue.enqueue("b");

        // At t=3001 only A has passed its deadline.
        tokio::time::advance(Duration::from_millis(2001)).await;
        let removed = queue.sweep(Instant::now());
        assert_eq!(removed, vec![a]);
        assert_eq!(queue.len(), 1);

        // At t=4001 B has too.
        tokio::time::advance(Duration::from_millis(1000)).await;
        let removed = queue.sweep(Instant::now());
        assert_eq!(removed, vec![b]);
        assert!(queue.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_before_deadline_removes_nothing() {
        let mut queue = NotificationQueue::new();
        queue.enqueue("a");
        tokio::time::advance(Duration::from_millis(2999)).await;
        assert!(queue.sweep(Instant::now()).is_empty());
        assert_eq!(queue.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_ttl_is_honored() {
        let mut queue = NotificationQueue::with_ttl(Duration::from_millis(100));
        queue.enqueue("short-lived");
        tokio::time::advance(Duration::from_millis(100)).await;
        assert_eq!(queue.sweep(Instant::now()).len(), 1);
    }
}
