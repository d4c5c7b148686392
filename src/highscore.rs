//! Persisted best score
//!
//! A single integer under a configurable store key. It only ever
//! increases: a finished session's score is written back only when it
//! strictly beats the stored value, then flushed.

use log::info;

use crate::ports::PersistentKVStore;

/// Read the stored best score, 0 when absent.
pub fn read(store: &dyn PersistentKVStore, key: &str) -> i32 {
    store.get_int(key, 0)
}

/// Persist `score` if it beats the stored best. Returns true when a new
/// high score was written.
pub fn submit(store: &mut dyn PersistentKVStore, key: &str, score: i32) -> bool {
    if score > store.get_int(key, 0) {
        store.set_int(key, score);
        store.save();
        info!("new high score: {score}");
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_read_defaults_to_zero() {
        let store = MemoryStore::new();
        assert_eq!(read(&store, "HighScore"), 0);
    }

    #[test]
    fn test_submit_only_keeps_improvements() {
        let mut store = MemoryStore::new();
        assert!(submit(&mut store, "HighScore", 12));
        assert_eq!(read(&store, "HighScore"), 12);

        assert!(!submit(&mut store, "HighScore", 12));
        assert!(!submit(&mut store, "HighScore", 5));
        assert_eq!(read(&store, "HighScore"), 12);

        assert!(submit(&mut store, "HighScore", 40));
        assert_eq!(read(&store, "HighScore"), 40);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut store = MemoryStore::new();
        submit(&mut store, "HighScore", 9);
        assert_eq!(read(&store, "OtherMode"), 0);
    }
}
