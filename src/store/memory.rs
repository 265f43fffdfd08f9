use dashmap::DashMap;

/// In-memory map from identifier to base64 digest string.
///
/// A record is inserted exactly once per identifier, asynchronously, after the
/// fixed write delay. A read arriving before the delayed write completes
/// observes `None`, which is indistinguishable from "never created". Records
/// are never mutated or deleted; the map lives for the process lifetime.
pub struct HashStore {
    records: DashMap<i64, String>,
}

impl HashStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Inserts the digest for `id`. Called once per identifier.
    pub fn insert(&self, id: i64, digest: String) {
        self.records.insert(id, digest);
    }

    /// Returns the stored digest for `id`, or `None` if it is absent
    /// (never created, or the delayed write has not completed yet).
    pub fn get(&self, id: i64) -> Option<String> {
        self.records.get(&id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for HashStore {
    fn default() -> Self {
        Self::new()
    }
}
