//! Transient notifications with per-notification expiry timers.
//!
//! Each notification expires after a fixed window. A notification with the
//! same `(message, kind)` as one still visible is dropped. Dismissing or
//! clearing aborts the pending timer so it can never remove newer state.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::task::JoinHandle;

/// Default display window.
pub const DEFAULT_TTL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
    Recommendation,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Recommendation => "recommendation",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Creation time in milliseconds since the epoch, bumped when two
    /// notifications land in the same millisecond.
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: SystemTime,
}

struct Entry {
    notification: Notification,
    timer: Option<JoinHandle<()>>,
}

#[derive(Default)]
struct Inner {
    entries: Vec<Entry>,
    last_id: u64,
    ttl: Duration,
}

impl Drop for Inner {
    fn drop(&mut self) {
        for entry in &self.entries {
            if let Some(timer) = &entry.timer {
                timer.abort();
            }
        }
    }
}

/// Shared notification list. Clones are handles to the same list.
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<Mutex<Inner>>,
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                entries: Vec::new(),
                last_id: 0,
                ttl,
            })),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.inner.lock().ttl
    }

    /// Change the display window for notifications pushed from now on.
    pub fn set_ttl(&self, ttl: Duration) {
        self.inner.lock().ttl = ttl;
    }

    /// Add a notification. Returns its id, or `None` if an identical one is
    /// already visible.
    ///
    /// Expiry is scheduled on the current Tokio runtime; outside a runtime the
    /// notification stays until dismissed.
    pub fn push(&self, message: impl Into<String>, kind: NotificationKind) -> Option<u64> {
        let message = message.into();
        let mut inner = self.inner.lock();

        if inner
            .entries
            .iter()
            .any(|e| e.notification.kind == kind && e.notification.message == message)
        {
            tracing::debug!(message = %message, kind = kind.label(), "Duplicate notification blocked");
            return None;
        }

        let created_at = SystemTime::now();
        let millis = created_at
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let id = millis.max(inner.last_id + 1);
        inner.last_id = id;

        let timer = self.schedule_expiry(id, inner.ttl);
        tracing::debug!(id, message = %message, kind = kind.label(), "Adding notification");
        inner.entries.push(Entry {
            notification: Notification {
                id,
                message,
                kind,
                created_at,
            },
            timer,
        });
        Some(id)
    }

    fn schedule_expiry(&self, id: u64, ttl: Duration) -> Option<JoinHandle<()>> {
        let runtime = tokio::runtime::Handle::try_current().ok()?;
        let inner: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
        Some(runtime.spawn(async move {
            tokio::time::sleep(ttl).await;
            if let Some(inner) = inner.upgrade() {
                let mut inner = inner.lock();
                // Dropping our own handle only detaches it.
                inner.entries.retain(|e| e.notification.id != id);
                tracing::debug!(id, "Notification expired");
            }
        }))
    }

    /// Remove one notification early. Returns `false` if it was not visible.
    pub fn dismiss(&self, id: u64) -> bool {
        let mut inner = self.inner.lock();
        let Some(pos) = inner.entries.iter().position(|e| e.notification.id == id) else {
            return false;
        };
        let entry = inner.entries.remove(pos);
        if let Some(timer) = entry.timer {
            timer.abort();
        }
        tracing::debug!(id, "Notification dismissed");
        true
    }

    /// Remove everything, cancelling all pending timers.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        for entry in inner.entries.drain(..) {
            if let Some(timer) = entry.timer {
                timer.abort();
            }
        }
    }

    /// Visible notifications, oldest first.
    pub fn visible(&self) -> Vec<Notification> {
        self.inner
            .lock()
            .entries
            .iter()
            .map(|e| e.notification.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_duplicate_is_dropped_while_visible() {
        let center = NotificationCenter::default();
        assert!(center.push("No movies found.", NotificationKind::Info).is_some());
        assert!(center.push("No movies found.", NotificationKind::Info).is_none());
        assert_eq!(center.len(), 1);

        // Same text, different kind is a distinct notification.
        assert!(center.push("No movies found.", NotificationKind::Error).is_some());
        assert_eq!(center.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ids_are_unique_within_one_millisecond() {
        let center = NotificationCenter::default();
        let a = center.push("a", NotificationKind::Success).unwrap();
        let b = center.push("b", NotificationKind::Recommendation).unwrap();
        assert!(b > a);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expires_after_ttl() {
        let center = NotificationCenter::new(Duration::from_millis(3000));
        center.push("hello", NotificationKind::Info);

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert_eq!(center.len(), 1);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(center.is_empty());

        // Once expired, the same message may be shown again.
        assert!(center.push("hello", NotificationKind::Info).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_ttl_applies_to_later_pushes() {
        let center = NotificationCenter::new(Duration::from_millis(3000));
        center.push("before", NotificationKind::Info);
        center.set_ttl(Duration::from_millis(500));
        assert_eq!(center.ttl(), Duration::from_millis(500));
        center.push("after", NotificationKind::Info);

        tokio::time::sleep(Duration::from_millis(501)).await;
        let visible = center.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "before");
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_cancels_timer() {
        let center = NotificationCenter::new(Duration::from_millis(100));
        let first = center.push("first", NotificationKind::Info).unwrap();
        assert!(center.dismiss(first));
        assert!(!center.dismiss(first));

        tokio::time::sleep(Duration::from_millis(50)).await;
        let second = center.push("second", NotificationKind::Info).unwrap();

        // The first timer would have fired here; the second must survive it.
        tokio::time::sleep(Duration::from_millis(60)).await;
        let visible = center.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_removes_all() {
        let center = NotificationCenter::default();
        center.push("a", NotificationKind::Info);
        center.push("b", NotificationKind::Error);
        center.clear();
        assert!(center.is_empty());

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert!(center.is_empty());
    }

    #[test]
    fn test_without_runtime_stays_until_dismissed() {
        let center = NotificationCenter::default();
        let id = center.push("offline", NotificationKind::Info).unwrap();
        assert_eq!(center.visible()[0].message, "offline");
        assert!(center.dismiss(id));
    }
}
