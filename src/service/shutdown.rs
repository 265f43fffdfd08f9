//! Shutdown Coordinator
//!
//! Implements the one-shot delayed termination sequence. The shutdown delay
//! is longer than the write delay, so creation requests already in flight
//! when shutdown begins normally have their delayed writes land before the
//! process exits. On top of that timing assumption, the coordinator waits
//! for the pending-write tracker to drain before signaling termination, so
//! the ordering holds even under scheduler starvation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

/// Delay between initiating shutdown and signaling process termination.
/// Strictly greater than [`DEFAULT_WRITE_DELAY`](crate::service::hasher::DEFAULT_WRITE_DELAY).
pub const DEFAULT_SHUTDOWN_DELAY: Duration = Duration::from_secs(6);

/// Process-wide one-shot shutdown gate.
///
/// The `false -> true` transition is irreversible for the process lifetime.
/// Once set, every endpoint refuses new work with a "service unavailable"
/// response.
pub struct ShutdownCoordinator {
    shutting_down: AtomicBool,
    delay: Duration,
    terminated: CancellationToken,
}

impl ShutdownCoordinator {
    pub fn new() -> Arc<Self> {
        Self::with_delay(DEFAULT_SHUTDOWN_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            shutting_down: AtomicBool::new(false),
            delay,
            terminated: CancellationToken::new(),
        })
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutting_down.load(Ordering::SeqCst)
    }

    /// Flips the shutdown flag and schedules termination.
    ///
    /// Returns `false` if shutdown was already in progress (the atomic swap
    /// makes double initiation impossible). The termination task sleeps for
    /// the shutdown delay, waits for all tracked delayed writes to finish,
    /// and then signals [`terminated`](Self::terminated).
    pub fn initiate(&self, pending_writes: TaskTracker) -> bool {
        if self.shutting_down.swap(true, Ordering::SeqCst) {
            return false;
        }

        let delay = self.delay;
        let terminated = self.terminated.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            pending_writes.close();
            pending_writes.wait().await;
            tracing::info!("Stopping hash service");
            terminated.cancel();
        });

        true
    }

    /// Resolves once the termination signal has been raised.
    pub async fn terminated(&self) {
        self.terminated.cancelled().await;
    }
}
