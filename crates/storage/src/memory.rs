//! In-memory byte store for tests/dev.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// HashMap-backed store.
///
/// Cloning shares the underlying map, so a test can hand the same storage
/// to a second store instance to simulate a process restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().map(|e| e.is_empty()).unwrap_or(true)
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<Vec<u8>> {
        // A poisoned lock degrades to a missing key.
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, bytes: &[u8]) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), bytes.to_vec());
        }
    }
}
