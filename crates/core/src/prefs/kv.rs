//! Key-value storage capability.
//!
//! The preference store persists through this minimal interface so the
//! backing medium is swappable: sqlite in the real binary, an in-memory
//! map in tests.

use std::collections::HashMap;
use std::sync::Mutex;

/// Minimal persistent string key-value capability.
///
/// Implementations fail soft: a broken backend reads as absent and drops
/// writes rather than surfacing errors to callers.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}

/// In-memory key-value store.
///
/// Used as the test fake and wherever persistence is not wanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("missing").is_none());

        store.set("key", "value");
        assert_eq!(store.get("key").as_deref(), Some("value"));

        store.set("key", "replaced");
        assert_eq!(store.get("key").as_deref(), Some("replaced"));
    }
}
