use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

/// Ephemeral key-value store with per-entry expiration. Memory-only: the
/// contents live for the process lifetime and are gone on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Entry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: None,
            },
        );
    }

    pub fn set_with_ttl(&mut self, key: &str, value: &str, ttl: Duration) {
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Some(Instant::now() + ttl),
            },
        );
    }

    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(entry) => {
                if entry.expires_at.map_or(false, |at| Instant::now() >= at) {
                    self.entries.remove(key);
                    None
                } else {
                    Some(entry.value.clone())
                }
            }
            None => None,
        }
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn purge_expired(&mut self) {
        let now = Instant::now();
        self.entries
            .retain(|_, e| e.expires_at.map_or(true, |at| now < at));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn set_get_remove() {
        let mut store = MemoryStore::new();
        store.set("theme", "dark");
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert!(store.remove("theme"));
        assert!(store.get("theme").is_none());
        assert!(!store.remove("theme"));
    }

    #[test]
    fn ttl_expires_entries() {
        let mut store = MemoryStore::new();
        store.set_with_ttl("recent", "x", Duration::from_millis(20));
        assert_eq!(store.get("recent").as_deref(), Some("x"));

        thread::sleep(Duration::from_millis(40));
        assert!(store.get("recent").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn purge_removes_only_expired() {
        let mut store = MemoryStore::new();
        store.set("keep", "1");
        store.set_with_ttl("drop", "2", Duration::from_millis(10));
        thread::sleep(Duration::from_millis(30));
        store.purge_expired();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("keep").as_deref(), Some("1"));
    }
}
