//! Store Module Tests
//!
//! Validates the identifier allocator, the in-memory hash store, and the
//! statistics accumulators.
//!
//! ## Test Scopes
//! - **IdAllocator**: Sequential and concurrent allocation (no duplicates, no gaps).
//! - **HashStore**: Insert/get mechanics and absent-key behavior.
//! - **RequestStats**: Consistent snapshots and monotonic accumulation.

#[cfg(test)]
mod tests {
    use crate::store::allocator::IdAllocator;
    use crate::store::memory::HashStore;
    use crate::store::stats::RequestStats;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::time::Duration;

    // ============================================================
    // ID ALLOCATOR TESTS
    // ============================================================

    #[test]
    fn test_allocator_first_call_returns_one() {
        let ids = IdAllocator::new();
        assert_eq!(ids.next(), 1);
    }

    #[test]
    fn test_allocator_is_sequential() {
        let ids = IdAllocator::new();
        for expected in 1..=100 {
            assert_eq!(ids.next(), expected);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_allocator_concurrent_ids_are_distinct_and_consecutive() {
        let ids = Arc::new(IdAllocator::new());
        let tasks = 8;
        let per_task = 250;

        let mut handles = Vec::new();
        for _ in 0..tasks {
            let ids = ids.clone();
            handles.push(tokio::spawn(async move {
                let mut allocated = Vec::with_capacity(per_task);
                for _ in 0..per_task {
                    allocated.push(ids.next());
                }
                allocated
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.await.unwrap() {
                assert!(seen.insert(id), "Identifier {} allocated twice", id);
            }
        }

        // N distinct consecutive integers starting at 1: no gaps.
        let total = (tasks * per_task) as i64;
        assert_eq!(seen.len() as i64, total);
        for id in 1..=total {
            assert!(seen.contains(&id), "Identifier {} was skipped", id);
        }
    }

    // ============================================================
    // HASH STORE TESTS
    // ============================================================

    #[test]
    fn test_store_insert_and_get() {
        let store = HashStore::new();
        store.insert(1, "digest-one".to_string());

        assert_eq!(store.get(1), Some("digest-one".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_absent_key_returns_none() {
        let store = HashStore::new();
        assert!(store.get(42).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_keys_are_independent() {
        let store = HashStore::new();
        for id in 1..=50 {
            store.insert(id, format!("digest-{}", id));
        }

        for id in 1..=50 {
            assert_eq!(store.get(id), Some(format!("digest-{}", id)));
        }
        assert!(store.get(51).is_none());
    }

    // ============================================================
    // REQUEST STATS TESTS
    // ============================================================

    #[test]
    fn test_stats_start_at_zero() {
        let stats = RequestStats::new();
        assert_eq!(stats.snapshot(), (0, 0));
    }

    #[test]
    fn test_stats_accumulate_count_and_micros() {
        let stats = RequestStats::new();
        stats.record(Duration::from_micros(100));
        stats.record(Duration::from_micros(200));
        stats.record(Duration::from_micros(300));

        assert_eq!(stats.snapshot(), (3, 600));
    }

    #[test]
    fn test_stats_sub_microsecond_latency_counts_request() {
        let stats = RequestStats::new();
        stats.record(Duration::from_nanos(500));

        let (requests, total_micros) = stats.snapshot();
        assert_eq!(requests, 1);
        assert_eq!(total_micros, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_stats_concurrent_records_all_counted() {
        let stats = Arc::new(RequestStats::new());
        let tasks = 4;
        let per_task = 500;

        let mut handles = Vec::new();
        for _ in 0..tasks {
            let stats = stats.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..per_task {
                    stats.record(Duration::from_micros(10));
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let (requests, total_micros) = stats.snapshot();
        assert_eq!(requests, (tasks * per_task) as i64);
        assert_eq!(total_micros, (tasks * per_task * 10) as i64);
    }
}
