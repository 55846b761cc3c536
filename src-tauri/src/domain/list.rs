//! Item List Manager
//!
//! Owns the ordered sequence of to-do items and exposes the mutation
//! operations behind every user action. Pure in-memory: persistence is the
//! caller's side effect, performed after each mutation with a full snapshot.

use super::entity::{DomainError, DomainResult};
use super::item::{Item, ItemStatus};

/// Partial update for a single item
///
/// Unset fields leave the item untouched. A status change drives the
/// `finish_time` pairing itself; `finish_time` is only consulted when the
/// patch also moves the item into done (callers replaying history can pin
/// an explicit completion timestamp).
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub status: Option<ItemStatus>,
    pub finish_time: Option<i64>,
}

/// Ordered collection of to-do items, most recent first
///
/// Invariant: ids are pairwise distinct (freshly generated uuids on add).
#[derive(Debug, Default)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn snapshot(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Insert a new active item at the front of the sequence
    ///
    /// Empty titles are permitted. Returns the created item.
    pub fn add(&mut self, title: String, now_ms: i64) -> Item {
        let item = Item::new(title, now_ms);
        self.items.insert(0, item.clone());
        item
    }

    /// Apply a partial update to the item with the given id
    ///
    /// Returns `false` when no item matches; the caller decides whether to
    /// report that. Status transitions set or clear `finish_time` so the
    /// pairing invariant holds no matter what the caller passes.
    pub fn update(&mut self, id: &str, patch: ItemPatch, now_ms: i64) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };

        if let Some(title) = patch.title {
            item.title = title;
        }
        match patch.status {
            Some(ItemStatus::Done) => item.complete(patch.finish_time.unwrap_or(now_ms)),
            Some(ItemStatus::Active) => item.reopen(),
            None => {}
        }
        true
    }

    /// Remove the item with the given id
    ///
    /// Returns `false` when no item matches. User confirmation is a UI
    /// precondition, not part of this contract.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() < before
    }

    /// Move the element at `from` to position `to`, shifting the rest
    ///
    /// Out-of-range indices are rejected rather than corrupting the order.
    pub fn reorder(&mut self, from: usize, to: usize) -> DomainResult<()> {
        let len = self.items.len();
        if from >= len || to >= len {
            return Err(DomainError::InvalidInput(format!(
                "reorder indices out of range: from={}, to={}, len={}",
                from, to, len
            )));
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(titles: &[&str]) -> ItemList {
        let mut list = ItemList::default();
        for (i, title) in titles.iter().enumerate() {
            list.add(title.to_string(), 1000 + i as i64);
        }
        list
    }

    #[test]
    fn test_add_inserts_at_front_with_distinct_ids() {
        let mut list = ItemList::default();
        for i in 0..5 {
            list.add(format!("item {}", i), 1000 + i);
        }

        assert_eq!(list.items().len(), 5);
        // Most recent first
        assert_eq!(list.items()[0].title, "item 4");
        assert_eq!(list.items()[4].title, "item 0");

        let mut ids: Vec<_> = list.items().iter().map(|i| i.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_add_permits_empty_title() {
        let mut list = ItemList::default();
        let item = list.add(String::new(), 1000);
        assert_eq!(item.title, "");
        assert_eq!(list.items().len(), 1);
    }

    #[test]
    fn test_update_renames_title_only() {
        let mut list = list_with(&["old"]);
        let id = list.items()[0].id.clone();

        let changed = list.update(
            &id,
            ItemPatch {
                title: Some("new".to_string()),
                ..Default::default()
            },
            2000,
        );

        assert!(changed);
        let item = &list.items()[0];
        assert_eq!(item.title, "new");
        assert_eq!(item.status, ItemStatus::Active);
        assert!(item.finish_time.is_none());
    }

    #[test]
    fn test_update_done_then_active_clears_finish_time() {
        let mut list = list_with(&["toggle"]);
        let id = list.items()[0].id.clone();

        list.update(
            &id,
            ItemPatch {
                status: Some(ItemStatus::Done),
                finish_time: Some(1000),
                ..Default::default()
            },
            5000,
        );
        assert_eq!(list.items()[0].status, ItemStatus::Done);
        assert_eq!(list.items()[0].finish_time, Some(1000));

        // Back to active: finish_time must be cleared even without the
        // caller asking for it
        list.update(
            &id,
            ItemPatch {
                status: Some(ItemStatus::Active),
                ..Default::default()
            },
            6000,
        );
        assert_eq!(list.items()[0].status, ItemStatus::Active);
        assert!(list.items()[0].finish_time.is_none());
    }

    #[test]
    fn test_update_done_defaults_finish_time_to_now() {
        let mut list = list_with(&["done"]);
        let id = list.items()[0].id.clone();

        list.update(
            &id,
            ItemPatch {
                status: Some(ItemStatus::Done),
                ..Default::default()
            },
            7000,
        );
        assert_eq!(list.items()[0].finish_time, Some(7000));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut list = list_with(&["only"]);
        let changed = list.update(
            "no-such-id",
            ItemPatch {
                title: Some("x".to_string()),
                ..Default::default()
            },
            2000,
        );
        assert!(!changed);
        assert_eq!(list.items()[0].title, "only");
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut list = list_with(&["a", "b", "c"]);
        let id = list.items()[1].id.clone();

        assert!(list.delete(&id));
        assert_eq!(list.items().len(), 2);
        assert!(list.items().iter().all(|item| item.id != id));
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut list = list_with(&["a", "b"]);
        assert!(!list.delete("no-such-id"));
        assert_eq!(list.items().len(), 2);
    }

    #[test]
    fn test_reorder_round_trip_restores_order() {
        let mut list = list_with(&["a", "b", "c", "d"]);
        let original: Vec<_> = list.items().iter().map(|i| i.id.clone()).collect();

        list.reorder(0, 3).expect("reorder");
        assert_ne!(
            original,
            list.items().iter().map(|i| i.id.clone()).collect::<Vec<_>>()
        );

        list.reorder(3, 0).expect("reorder back");
        assert_eq!(
            original,
            list.items().iter().map(|i| i.id.clone()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_reorder_shifts_intervening_elements() {
        let mut list = list_with(&["a", "b", "c"]);
        // Front-insertion means current order is c, b, a
        list.reorder(0, 2).expect("reorder");
        let titles: Vec<_> = list.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_reorder_rejects_out_of_range() {
        let mut list = list_with(&["a", "b"]);
        assert!(matches!(
            list.reorder(0, 2),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            list.reorder(5, 0),
            Err(DomainError::InvalidInput(_))
        ));
        // Sequence untouched after a rejected reorder
        assert_eq!(list.items().len(), 2);
    }
}
