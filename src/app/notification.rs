//! Single-slot, auto-dismissing notification.
//!
//! Posting a notice replaces whatever was showing. A notice expires after the
//! configured time-to-live, measured with [`tokio::time::Instant`] so paused
//! test clocks drive expiry too.

use std::time::Duration;
use tokio::time::Instant;

/// Default time-to-live of a notice.
pub const DEFAULT_TTL: Duration = Duration::from_millis(3000);

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// One posted notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    /// Already-localized message text.
    pub message: String,
    pub posted_at: Instant,
}

/// Holds at most one notice at a time.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    ttl: Duration,
    slot: Option<Notice>,
}

impl NotificationCenter {
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self { ttl, slot: None }
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Shows `message`, replacing the current notice.
    pub fn post(&mut self, kind: NoticeKind, message: impl Into<String>) {
        let message = message.into();
        match kind {
            NoticeKind::Success => tracing::debug!(%message, "notice posted"),
            NoticeKind::Warning | NoticeKind::Error => {
                tracing::warn!(?kind, %message, "notice posted");
            }
        }
        self.slot = Some(Notice {
            kind,
            message,
            posted_at: Instant::now(),
        });
    }

    /// The visible notice, if one was posted and has not expired yet.
    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.slot
            .as_ref()
            .filter(|notice| notice.posted_at.elapsed() < self.ttl)
    }

    /// Drops the notice once it has expired. Returns `true` if one was dropped.
    pub fn expire(&mut self) -> bool {
        if self.slot.is_some() && self.current().is_none() {
            self.slot = None;
            true
        } else {
            false
        }
    }

    /// Hides the notice immediately.
    pub fn dismiss(&mut self) -> bool {
        self.slot.take().is_some()
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
    async fn later_notice_replaces_earlier_one() {
        let mut center = NotificationCenter::default();
        center.post(NoticeKind::Success, "Insert successful");
        center.post(NoticeKind::Error, "duplicate id");

        let notice = center.current().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "duplicate id");
    }

    #[tokio::test(start_paused = true)]
    async fn notice_expires_after_ttl() {
        let mut center = NotificationCenter::new(Duration::from_millis(3000));
        center.post(NoticeKind::Warning, "Please select items to delete");

        tokio::time::advance(Duration::from_millis(2999)).await;
        assert!(center.current().is_some());
        assert!(!center.expire());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(center.current().is_none());
        assert!(center.expire());
        assert!(!center.expire());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_clears_immediately() {
        let mut center = NotificationCenter::default();
        assert!(!center.dismiss());

        center.post(NoticeKind::Success, "ok");
        assert!(center.dismiss());
        assert!(center.current().is_none());
    }
}
