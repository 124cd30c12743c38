//! Minimum-duration busy indicator around one workflow at a time.
//!
//! [`LoadingGate::run`] sets the busy flag, drives the workflow and a timer of
//! the configured floor concurrently, and clears the flag once both are done.
//! The flag is cleared by a drop guard, so it is released exactly once on every
//! exit path: normal completion, an error value, a panic unwinding through the
//! workflow, or the caller dropping the future.
//!
//! The flag doubles as the mutual-exclusion lock for workflows: entering a busy
//! gate fails with [`ConsoleError::Busy`] and the workflow is never polled.
//!
//! # Example
//!
//! ```rust
//! use staffdesk::app::LoadingGate;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> staffdesk::Result<()> {
//! let gate = LoadingGate::new(Duration::from_millis(10));
//! let answer = gate.run(async { 42 }).await?;
//! assert_eq!(answer, 42);
//! assert!(!gate.is_busy());
//! # Ok(())
//! # }
//! ```

use crate::domain::{ConsoleError, Result};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Default floor for the busy indicator.
pub const DEFAULT_MIN_VISIBLE: Duration = Duration::from_millis(500);

/// Busy flag with a minimum visible duration.
///
/// Cloning the gate shares the flag, so a host can keep a clone (or a
/// [`watch::Receiver`] from [`LoadingGate::subscribe`]) to disable its triggers
/// while a workflow runs.
#[derive(Debug, Clone)]
pub struct LoadingGate {
    min_visible: Duration,
    busy: Arc<watch::Sender<bool>>,
}

impl LoadingGate {
    #[must_use]
    pub fn new(min_visible: Duration) -> Self {
        let (busy, _) = watch::channel(false);
        Self {
            min_visible,
            busy: Arc::new(busy),
        }
    }

    #[must_use]
    pub const fn min_visible(&self) -> Duration {
        self.min_visible
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        *self.busy.borrow()
    }

    /// Receiver that observes every busy/idle transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.busy.subscribe()
    }

    /// Runs `workflow` behind the busy indicator.
    ///
    /// The returned future completes no earlier than the floor passed to
    /// [`LoadingGate::new`], and no earlier than `workflow` itself. The
    /// workflow's output is returned untouched, errors included.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Busy`] without polling `workflow` if another
    /// workflow currently holds the gate.
    pub async fn run<F, T>(&self, workflow: F) -> Result<T>
    where
        F: Future<Output = T>,
    {
        let _guard = self.acquire()?;
        let started = tokio::time::Instant::now();

        let (output, ()) = tokio::join!(workflow, tokio::time::sleep(self.min_visible));

        tracing::trace!(elapsed_ms = started.elapsed().as_millis() as u64, "gated workflow finished");
        Ok(output)
    }

    fn acquire(&self) -> Result<BusyGuard> {
        let mut acquired = false;
        self.busy.send_if_modified(|busy| {
            if *busy {
                false
            } else {
                *busy = true;
                acquired = true;
                true
            }
        });

        if acquired {
            tracing::debug!("loading gate engaged");
            Ok(BusyGuard {
                busy: Arc::clone(&self.busy),
            })
        } else {
            tracing::debug!("loading gate already engaged, rejecting workflow");
            Err(ConsoleError::Busy)
        }
    }
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_VISIBLE)
    }
}

/// Clears the busy flag when dropped.
struct BusyGuard {
    busy: Arc<watch::Sender<bool>>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy.send_replace(false);
        tracing::debug!("loading gate released");
    }
}
