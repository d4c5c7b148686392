//! Key-value persistence backends
//!
//! Two [`PersistentKVStore`] implementations: an in-memory store for
//! tests and demo runs, and a JSON-file-backed store for native builds.
//! Persistence is best-effort: a corrupt or unwritable file degrades to
//! a fresh store with a log line, never an error surfaced to gameplay.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ports::PersistentKVStore;

/// In-memory store. `save` is a no-op; contents last for the process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    values: HashMap<String, i32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistentKVStore for MemoryStore {
    fn get_int(&self, key: &str, default: i32) -> i32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_int(&mut self, key: &str, value: i32) {
        self.values.insert(key.to_string(), value);
    }

    fn save(&mut self) {
        // Nothing to flush
    }
}

/// JSON file store. Loads existing values on open, writes the whole map
/// on `save`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct JsonFileStore {
    path: std::path::PathBuf,
    values: HashMap<String, i32>,
}

#[cfg(not(target_arch = "wasm32"))]
impl JsonFileStore {
    pub fn open(path: impl Into<std::path::PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<HashMap<String, i32>>(&json) {
                Ok(values) => {
                    log::info!("loaded {} stored values from {}", values.len(), path.display());
                    values
                }
                Err(err) => {
                    log::warn!("corrupt store {}: {err}; starting fresh", path.display());
                    HashMap::new()
                }
            },
            Err(_) => {
                log::info!("no store at {}, starting fresh", path.display());
                HashMap::new()
            }
        };
        Self { path, values }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PersistentKVStore for JsonFileStore {
    fn get_int(&self, key: &str, default: i32) -> i32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_int(&mut self, key: &str, value: i32) {
        self.values.insert(key.to_string(), value);
    }

    fn save(&mut self) {
        match serde_json::to_string(&self.values) {
            Ok(json) => {
                if let Err(err) = std::fs::write(&self.path, json) {
                    log::warn!("failed to write store {}: {err}", self.path.display());
                } else {
                    log::info!("store saved ({} values)", self.values.len());
                }
            }
            Err(err) => log::warn!("failed to serialize store: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_defaults_and_overwrites() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_int("HighScore", 0), 0);
        assert_eq!(store.get_int("HighScore", 42), 42);

        store.set_int("HighScore", 7);
        store.set_int("HighScore", 9);
        assert_eq!(store.get_int("HighScore", 0), 9);
    }

    #[test]
    fn test_json_file_store_round_trip() {
        let path = std::env::temp_dir().join("ice_dash_store_round_trip.json");
        let _ = std::fs::remove_file(&path);

        let mut store = JsonFileStore::open(&path);
        assert_eq!(store.get_int("HighScore", 0), 0);
        store.set_int("HighScore", 31);
        store.save();

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get_int("HighScore", 0), 31);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_json_file_store_survives_corrupt_file() {
        let path = std::env::temp_dir().join("ice_dash_store_corrupt.json");
        std::fs::write(&path, "not json{{").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get_int("HighScore", 0), 0);

        let _ = std::fs::remove_file(&path);
    }
}
