//! Hashing Service Implementation
//!
//! Owns the identifier allocator, the digest store, and the request
//! statistics. The submit path returns the identifier immediately; the
//! digest is computed and stored by a detached background task after the
//! write delay, simulating non-trivial work. Reads may race ahead of the
//! delayed write and observe "not found".

use crate::digest::sha512::sha512_base64;
use crate::store::allocator::IdAllocator;
use crate::store::memory::HashStore;
use crate::store::stats::RequestStats;

use std::sync::Arc;
use std::time::Duration;
use tokio_util::task::TaskTracker;

/// Delay between accepting a password and storing its digest.
pub const DEFAULT_WRITE_DELAY: Duration = Duration::from_secs(5);

/// The core password hashing service.
pub struct HashService {
    ids: IdAllocator,
    store: Arc<HashStore>,
    stats: RequestStats,
    write_delay: Duration,
    /// Tracks detached delayed writes so shutdown can wait for them to drain.
    pending_writes: TaskTracker,
}

impl HashService {
    pub fn new() -> Arc<Self> {
        Self::with_write_delay(DEFAULT_WRITE_DELAY)
    }

    pub fn with_write_delay(write_delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            ids: IdAllocator::new(),
            store: Arc::new(HashStore::new()),
            stats: RequestStats::new(),
            write_delay,
            pending_writes: TaskTracker::new(),
        })
    }

    /// Accepts a password and returns its identifier immediately.
    ///
    /// The digest computation and store write happen on a detached task after
    /// the write delay. No handle is retained to join or cancel it from the
    /// request path; the task is tracked only so shutdown can drain it.
    pub fn submit(&self, password: String) -> i64 {
        let id = self.ids.next();
        let store = self.store.clone();
        let delay = self.write_delay;

        self.pending_writes.spawn(async move {
            tokio::time::sleep(delay).await;
            let digest = sha512_base64(password.as_bytes());
            store.insert(id, digest);
            tracing::debug!("Stored digest for id={}", id);
        });

        id
    }

    /// Looks up the digest for `id`. `None` covers both "never created" and
    /// "delayed write still pending".
    pub fn lookup(&self, id: i64) -> Option<String> {
        self.store.get(id)
    }

    /// Records the latency of the synchronous portion of one creation request.
    pub fn record_request(&self, elapsed: Duration) {
        self.stats.record(elapsed);
    }

    /// Returns `(request_count, total_micros)` as a consistent pair.
    pub fn stats_snapshot(&self) -> (i64, i64) {
        self.stats.snapshot()
    }

    /// Handle to the tracker of in-flight delayed writes.
    pub fn pending_writes(&self) -> &TaskTracker {
        &self.pending_writes
    }
}
