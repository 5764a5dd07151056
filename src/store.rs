//! Concurrent in-memory item storage.
//!
//! `ItemStore` keeps every item in a single `RwLock<HashMap>`. Reads take the
//! shared side of the lock and hand back clones, so callers can never reach
//! the stored values outside the lock. Id generation goes through a separate
//! `AtomicI64`, which keeps ids unique and increasing without holding the
//! write lock while the id is chosen.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::models::Item;

/// Errors reported by [`ItemStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    NotFound(i64),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "Item {} not found", id),
        }
    }
}

impl std::error::Error for StoreError {}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub struct ItemStore {
    items: RwLock<HashMap<i64, Item>>,
    // Last issued id. The next id is `current_id + 1`.
    current_id: AtomicI64,
}

impl ItemStore {
    /// Create a store seeded with `Item 1` and `Item 2`; the next id is 3.
    pub fn new() -> Self {
        let seed = [
            Item::new(1, "Item 1".to_string()),
            Item::new(2, "Item 2".to_string()),
        ];

        Self {
            items: RwLock::new(seed.into_iter().map(|item| (item.id, item)).collect()),
            current_id: AtomicI64::new(2),
        }
    }

    /// Snapshot of all stored items, in no particular order
    pub fn list(&self) -> Vec<Item> {
        self.read().values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> StoreResult<Item> {
        self.read().get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// Store a new item under a freshly issued id and return a copy of it.
    pub fn create(&self, name: String) -> Item {
        let id = self.current_id.fetch_add(1, Ordering::SeqCst) + 1;
        let item = Item::new(id, name);

        self.write().insert(id, item.clone());
        debug!(id, "item created");

        item
    }

    /// Replace the name of an existing item, keeping its id.
    pub fn update(&self, id: i64, name: String) -> StoreResult<Item> {
        let mut items = self.write();
        let item = items.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        item.name = name;
        let updated = item.clone();
        drop(items);

        debug!(id, "item updated");
        Ok(updated)
    }

    pub fn delete(&self, id: i64) -> StoreResult<()> {
        let removed = self.write().remove(&id);
        match removed {
            Some(_) => {
                debug!(id, "item deleted");
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave an item half-written: every
    // write is a single insert/remove or a single field assignment. Poisoning
    // is therefore recovered instead of propagated.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<i64, Item>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<i64, Item>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn sorted(mut items: Vec<Item>) -> Vec<Item> {
        items.sort_by_key(|item| item.id);
        items
    }

    #[test]
    fn test_seeded_store() {
        let store = ItemStore::new();

        let items = sorted(store.list());
        assert_eq!(
            items,
            vec![
                Item::new(1, "Item 1".to_string()),
                Item::new(2, "Item 2".to_string()),
            ]
        );

        let created = store.create("Item 3".to_string());
        assert_eq!(created.id, 3);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_create_then_get() {
        let store = ItemStore::new();

        let created = store.create("widget".to_string());
        let fetched = store.get(created.id).unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "widget");
    }

    #[test]
    fn test_update_keeps_id() {
        let store = ItemStore::new();

        let updated = store.update(1, "renamed".to_string()).unwrap();
        assert_eq!(updated, Item::new(1, "renamed".to_string()));
        assert_eq!(store.get(1).unwrap(), updated);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_only_once() {
        let store = ItemStore::new();

        assert_eq!(store.delete(2), Ok(()));
        assert_eq!(store.delete(2), Err(StoreError::NotFound(2)));
        assert_eq!(store.get(2), Err(StoreError::NotFound(2)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_id_leaves_store_unchanged() {
        let store = ItemStore::new();
        let before = sorted(store.list());

        assert_eq!(store.get(999), Err(StoreError::NotFound(999)));
        assert_eq!(
            store.update(999, "x".to_string()),
            Err(StoreError::NotFound(999))
        );
        assert_eq!(store.delete(999), Err(StoreError::NotFound(999)));

        assert_eq!(sorted(store.list()), before);
        // A failed update must not consume an id.
        assert_eq!(store.create("next".to_string()).id, 3);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = ItemStore::new();

        let first = store.create("a".to_string());
        store.delete(first.id).unwrap();
        let second = store.create("b".to_string());

        assert!(second.id > first.id);
        assert_eq!(store.get(first.id), Err(StoreError::NotFound(first.id)));
    }

    #[test]
    fn test_list_returns_copies() {
        let store = ItemStore::new();

        let mut snapshot = store.list();
        for item in &mut snapshot {
            item.name.push_str(" (modified)");
        }

        assert_eq!(store.get(1).unwrap().name, "Item 1");
        assert_eq!(store.get(2).unwrap().name, "Item 2");
    }

    #[test]
    fn test_concurrent_creates_get_unique_ids() {
        let store = Arc::new(ItemStore::new());
        let threads = 8;
        let per_thread = 250;

        let ids: Vec<i64> = thread::scope(|scope| {
            let handles: Vec<_> = (0..threads)
                .map(|t| {
                    let store = &store;
                    scope.spawn(move || {
                        (0..per_thread)
                            .map(|i| store.create(format!("t{}-{}", t, i)).id)
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let unique: HashSet<i64> = ids.iter().copied().collect();
        assert_eq!(unique.len(), threads * per_thread);
        assert!(ids.iter().all(|id| *id >= 3));
        assert_eq!(store.len(), 2 + threads * per_thread);
    }

    #[test]
    fn test_readers_never_see_partial_names() {
        let store = ItemStore::new();
        let old_name = "a".repeat(64);
        let new_name = "b".repeat(64);
        store.update(1, old_name.clone()).unwrap();

        thread::scope(|scope| {
            scope.spawn(|| {
                for i in 0..2_000 {
                    let name = if i % 2 == 0 { &new_name } else { &old_name };
                    store.update(1, name.clone()).unwrap();
                }
            });
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..2_000 {
                        let item = store.get(1).unwrap();
                        assert_eq!(item.id, 1);
                        assert!(item.name == old_name || item.name == new_name);
                    }
                });
            }
        });
    }
}
