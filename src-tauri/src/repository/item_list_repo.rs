//! Item List Repository
//!
//! Full-snapshot persistence of the ordered item list under a single key.
//! No incremental writes: every mutation stores the whole sequence.

use crate::domain::{DomainError, DomainResult, Item, ItemStatus};

use super::kv::KvStore;

pub const KEY_ITEM_LIST: &str = "itemList";

pub struct ItemListRepository<'a> {
    store: &'a KvStore,
}

impl<'a> ItemListRepository<'a> {
    pub fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// Load the stored list, falling back to empty on anything unreadable
    ///
    /// Persistence failures never surface to the user; they are logged and
    /// replaced with the default. Loaded items are normalized so the
    /// status/finish_time pairing holds even for snapshots written by
    /// older builds.
    pub fn load(&self) -> Vec<Item> {
        let raw = match self.store.get(KEY_ITEM_LIST) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("failed to read stored item list, starting empty: {}", e);
                return Vec::new();
            }
        };

        let mut items: Vec<Item> = match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("stored item list is malformed, starting empty: {}", e);
                return Vec::new();
            }
        };

        for item in &mut items {
            match item.status {
                ItemStatus::Active if item.finish_time.is_some() => {
                    log::warn!("item {} was active with a finish time, clearing it", item.id);
                    item.finish_time = None;
                }
                ItemStatus::Done if item.finish_time.is_none() => {
                    log::warn!("item {} was done without a finish time, backfilling", item.id);
                    item.finish_time = Some(item.start_time);
                }
                _ => {}
            }
        }
        items
    }

    /// Write the full snapshot back to the store
    pub fn save(&self, items: &[Item]) -> DomainResult<()> {
        let raw = serde_json::to_string(items)
            .map_err(|e| DomainError::Internal(format!("serialize items: {}", e)))?;
        self.store.set(KEY_ITEM_LIST, &raw)
    }
}
