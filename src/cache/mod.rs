//! Local Cache
//!
//! Advisory snapshot of the contact list plus the favorite-ID set.
//! Anything missing or malformed reads as empty; write failures are logged
//! and dropped.

mod kv;

use std::collections::BTreeSet;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::models::Contact;

pub use kv::{BrowserStorage, KeyValueStore, MemoryStore};

/// Cache capability injected into the view-model
pub trait CacheStore {
    /// Last fetched contact list, empty when absent or unreadable
    fn load_snapshot(&self) -> Vec<Contact>;
    fn save_snapshot(&self, contacts: &[Contact]);
    fn load_favorite_ids(&self) -> BTreeSet<u32>;
    fn save_favorite_ids(&self, ids: &BTreeSet<u32>);
    /// Remove both entries
    fn clear(&self);
}

impl<C: CacheStore + ?Sized> CacheStore for Rc<C> {
    fn load_snapshot(&self) -> Vec<Contact> {
        (**self).load_snapshot()
    }

    fn save_snapshot(&self, contacts: &[Contact]) {
        (**self).save_snapshot(contacts)
    }

    fn load_favorite_ids(&self) -> BTreeSet<u32> {
        (**self).load_favorite_ids()
    }

    fn save_favorite_ids(&self, ids: &BTreeSet<u32>) {
        (**self).save_favorite_ids(ids)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// `CacheStore` encoding both entries as JSON under two string keys
pub struct JsonCache<S> {
    store: S,
    snapshot_key: String,
    favorites_key: String,
}

impl<S: KeyValueStore> JsonCache<S> {
    pub fn new(store: S, snapshot_key: impl Into<String>, favorites_key: impl Into<String>) -> Self {
        Self {
            store,
            snapshot_key: snapshot_key.into(),
            favorites_key: favorites_key.into(),
        }
    }

    pub fn with_config(store: S, config: &AppConfig) -> Self {
        Self::new(store, config.snapshot_key.clone(), config.favorites_key.clone())
    }

    /// Underlying store (tests poke raw values through this)
    pub fn store(&self) -> &S {
        &self.store
    }

    fn read<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Some(raw) = self.store.get(key) else {
            return T::default();
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("[CACHE] Ignoring malformed entry {:?}: {}", key, e);
                T::default()
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(e) => {
                log::warn!("[CACHE] Could not encode {:?}: {}", key, e);
                return;
            }
        };
        if let Err(e) = self.store.set(key, &encoded) {
            log::warn!("[CACHE] {}", e);
        }
    }
}

impl<S: KeyValueStore> CacheStore for JsonCache<S> {
    fn load_snapshot(&self) -> Vec<Contact> {
        self.read(&self.snapshot_key)
    }

    fn save_snapshot(&self, contacts: &[Contact]) {
        log::debug!("[CACHE] Saving snapshot of {} contacts", contacts.len());
        self.write(&self.snapshot_key, contacts);
    }

    fn load_favorite_ids(&self) -> BTreeSet<u32> {
        self.read(&self.favorites_key)
    }

    fn save_favorite_ids(&self, ids: &BTreeSet<u32>) {
        self.write(&self.favorites_key, ids);
    }

    fn clear(&self) {
        self.store.remove(&self.snapshot_key);
        self.store.remove(&self.favorites_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhoneNumber;
    use chrono::{TimeZone, Utc};

    fn cache() -> JsonCache<MemoryStore> {
        JsonCache::with_config(MemoryStore::new(), &AppConfig::default())
    }

    fn contact(id: u32) -> Contact {
        Contact {
            id,
            first_name: "Alice".into(),
            last_name: "Walker".into(),
            phones: vec![PhoneNumber::new("5550001")],
            is_favorite: false,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
            Err("QuotaExceededError".into())
        }
        fn remove(&self, _key: &str) {}
    }

    #[test]
    fn test_empty_cache_reads_empty() {
        let cache = cache();
        assert!(cache.load_snapshot().is_empty());
        assert!(cache.load_favorite_ids().is_empty());
    }

    #[test]
    fn test_snapshot_and_favorites_persist() {
        let cache = cache();
        cache.save_snapshot(&[contact(1), contact(2)]);
        cache.save_favorite_ids(&BTreeSet::from([2]));

        let snapshot = cache.load_snapshot();
        assert_eq!(snapshot.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(cache.load_favorite_ids(), BTreeSet::from([2]));
        assert_eq!(cache.store().get("favoriteContactIds").as_deref(), Some("[2]"));
    }

    #[test]
    fn test_corrupt_entries_read_as_absent() {
        let cache = cache();
        cache.store().set("contactList", "{not json").unwrap();
        cache.store().set("favoriteContactIds", r#"["a","b"]"#).unwrap();

        assert!(cache.load_snapshot().is_empty());
        assert!(cache.load_favorite_ids().is_empty());
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let cache = cache();
        cache.save_snapshot(&[contact(1)]);
        cache.save_favorite_ids(&BTreeSet::from([1]));
        cache.clear();

        assert!(cache.store().get("contactList").is_none());
        assert!(cache.store().get("favoriteContactIds").is_none());
    }

    #[test]
    fn test_write_failure_is_not_fatal() {
        let cache = JsonCache::new(ReadOnlyStore, "a", "b");
        cache.save_snapshot(&[contact(1)]);
        cache.save_favorite_ids(&BTreeSet::from([1]));
        assert!(cache.load_snapshot().is_empty());
    }

    #[test]
    fn test_boxed_store() {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        let cache = JsonCache::new(store, "snap", "fav");
        cache.save_favorite_ids(&BTreeSet::from([3, 1]));
        assert_eq!(cache.load_favorite_ids(), BTreeSet::from([1, 3]));
    }
}
