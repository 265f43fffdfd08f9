use std::sync::Mutex;
use std::sync::PoisonError;
use std::time::Duration;

/// Accumulators for completed creation requests.
///
/// Both fields live behind a single mutex so that [`RequestStats::snapshot`]
/// never observes a count without its matching latency sum. Both values only
/// ever increase; they reset only at process start.
struct StatsInner {
    /// Total number of completed creation requests.
    requests: i64,
    /// Sum of per-request latencies in microseconds.
    total_micros: i64,
}

/// Thread-safe request statistics tracker.
pub struct RequestStats {
    inner: Mutex<StatsInner>,
}

impl RequestStats {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StatsInner {
                requests: 0,
                total_micros: 0,
            }),
        }
    }

    /// Records one completed creation request and its elapsed wall-clock time.
    ///
    /// The elapsed time covers only the synchronous portion of the request,
    /// not the delayed background write.
    pub fn record(&self, elapsed: Duration) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.requests += 1;
        inner.total_micros += elapsed.as_micros() as i64;
    }

    /// Returns `(request_count, total_micros)` as a consistent pair.
    pub fn snapshot(&self) -> (i64, i64) {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        (inner.requests, inner.total_micros)
    }
}

impl Default for RequestStats {
    fn default() -> Self {
        Self::new()
    }
}
