//! Favorites/watchlist store over a key-value backend.

use std::sync::Arc;

use tracing::warn;

use super::kv::KeyValueStore;
use super::{Collection, PreferenceRecord};

/// Store for the user's favorites and watchlist.
///
/// Each collection is a JSON array of [`PreferenceRecord`] under a fixed
/// storage key, read and rewritten whole on every mutation. All
/// operations fail soft: a missing or broken backend behaves like empty
/// collections, matching the contract that preference handling must never
/// take the page down.
pub struct PreferenceStore {
    backend: Option<Arc<dyn KeyValueStore>>,
}

impl PreferenceStore {
    /// Create a store over the given backend.
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Create a store with no backend: every read returns empty, every
    /// write is a no-op. For execution contexts without persistent
    /// storage.
    pub fn disabled() -> Self {
        Self { backend: None }
    }

    /// All records in a collection, in insertion order.
    ///
    /// Absent key, unreadable backend or malformed data all yield `[]`.
    pub fn list(&self, collection: Collection) -> Vec<PreferenceRecord> {
        let Some(backend) = &self.backend else {
            return Vec::new();
        };
        let Some(raw) = backend.get(collection.storage_key()) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(collection = collection.storage_key(), error = %e, "discarding malformed preference data");
                Vec::new()
            }
        }
    }

    /// Append `record` unless an entry with the same id already exists.
    pub fn add(&self, collection: Collection, record: PreferenceRecord) {
        if self.backend.is_none() {
            return;
        }
        let mut records = self.list(collection);
        if records.iter().any(|r| r.id == record.id) {
            return;
        }
        records.push(record);
        self.persist(collection, &records);
    }

    /// Remove the entry with `id`, if present.
    pub fn remove(&self, collection: Collection, id: u64) {
        if self.backend.is_none() {
            return;
        }
        let mut records = self.list(collection);
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() != before {
            self.persist(collection, &records);
        }
    }

    /// Whether an entry with `id` exists.
    pub fn contains(&self, collection: Collection, id: u64) -> bool {
        self.list(collection).iter().any(|r| r.id == id)
    }

    /// Flip membership of `record`. Returns the new membership.
    pub fn toggle(&self, collection: Collection, record: PreferenceRecord) -> bool {
        if self.backend.is_none() {
            return false;
        }
        if self.contains(collection, record.id) {
            self.remove(collection, record.id);
            false
        } else {
            self.add(collection, record);
            true
        }
    }

    fn persist(&self, collection: Collection, records: &[PreferenceRecord]) {
        let Some(backend) = &self.backend else { return };
        match serde_json::to_string(records) {
            Ok(serialized) => backend.set(collection.storage_key(), &serialized),
            Err(e) => {
                warn!(collection = collection.storage_key(), error = %e, "failed to serialize preference data");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryStore;
    use crate::testing::fixtures;

    fn store() -> (Arc<MemoryStore>, PreferenceStore) {
        let backend = Arc::new(MemoryStore::new());
        let store = PreferenceStore::new(backend.clone() as Arc<dyn KeyValueStore>);
        (backend, store)
    }

    #[test]
    fn test_list_empty_when_absent() {
        let (_, store) = store();
        assert!(store.list(Collection::Favorites).is_empty());
        assert!(store.list(Collection::Watchlist).is_empty());
    }

    #[test]
    fn test_add_is_idempotent_by_id() {
        let (_, store) = store();
        store.add(Collection::Favorites, fixtures::preference_record(42, "The Matrix"));
        store.add(Collection::Favorites, fixtures::preference_record(42, "The Matrix"));

        let records = store.list(Collection::Favorites);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 42);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let (_, store) = store();
        store.add(Collection::Watchlist, fixtures::preference_record(1, "Heat"));

        store.remove(Collection::Watchlist, 99);

        let records = store.list(Collection::Watchlist);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 1);
    }

    #[test]
    fn test_malformed_data_reads_as_empty() {
        let (backend, store) = store();
        backend.set(Collection::Favorites.storage_key(), "not-json");

        assert!(store.list(Collection::Favorites).is_empty());
        assert!(!store.contains(Collection::Favorites, 1));
    }

    #[test]
    fn test_collections_are_independent() {
        let (_, store) = store();
        store.add(Collection::Favorites, fixtures::preference_record(1, "Heat"));
        store.add(Collection::Watchlist, fixtures::preference_record(2, "Ronin"));

        assert!(store.contains(Collection::Favorites, 1));
        assert!(!store.contains(Collection::Watchlist, 1));
        assert!(store.contains(Collection::Watchlist, 2));
        assert!(!store.contains(Collection::Favorites, 2));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let (_, store) = store();
        for (id, title) in [(3, "C"), (1, "A"), (2, "B")] {
            store.add(Collection::Favorites, fixtures::preference_record(id, title));
        }

        let ids: Vec<u64> = store
            .list(Collection::Favorites)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_toggle_flips_membership() {
        let (_, store) = store();
        let record = fixtures::preference_record(7, "Alien");

        assert!(store.toggle(Collection::Favorites, record.clone()));
        assert!(store.contains(Collection::Favorites, 7));

        assert!(!store.toggle(Collection::Favorites, record));
        assert!(!store.contains(Collection::Favorites, 7));
    }

    #[test]
    fn test_disabled_store_is_inert() {
        let store = PreferenceStore::disabled();
        store.add(Collection::Favorites, fixtures::preference_record(1, "Heat"));

        assert!(store.list(Collection::Favorites).is_empty());
        assert!(!store.contains(Collection::Favorites, 1));
        assert!(!store.toggle(Collection::Favorites, fixtures::preference_record(1, "Heat")));
    }
}
