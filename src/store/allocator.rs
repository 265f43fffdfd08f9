use std::sync::atomic::{AtomicI64, Ordering};

/// Thread-safe monotonic identifier allocator.
///
/// Starts at 0 internally; the first call to [`next`](Self::next) returns 1.
/// Identifiers are handed out in strictly increasing order with no duplicates
/// and no gaps, regardless of caller interleaving. Resets on process restart.
pub struct IdAllocator {
    counter: AtomicI64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            counter: AtomicI64::new(0),
        }
    }

    /// Atomically increments the counter and returns the new value.
    pub fn next(&self) -> i64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
