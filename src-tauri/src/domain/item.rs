//! Item Entity
//!
//! A single to-do entry. Serialized field names stay camelCase so stored
//! snapshots match what the frontend and the persistence layer exchange.

use serde::{Deserialize, Serialize};

/// Completion status of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Active,
    Done,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Active => "active",
            ItemStatus::Done => "done",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "done" => ItemStatus::Done,
            _ => ItemStatus::Active,
        }
    }
}

/// A single to-do item
///
/// Invariant: `finish_time` is `Some` exactly when `status` is `Done`.
/// Transitions go through [`Item::complete`] and [`Item::reopen`] so the
/// pairing is never left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, assigned at creation, immutable
    pub id: String,
    /// Display text, may be empty
    pub title: String,
    /// Completion status
    pub status: ItemStatus,
    /// Creation timestamp (epoch milliseconds), immutable
    pub start_time: i64,
    /// Completion timestamp, present only while status is done
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_time: Option<i64>,
}

impl Item {
    /// Create a new active item with a fresh unique id
    pub fn new(title: String, now_ms: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            status: ItemStatus::Active,
            start_time: now_ms,
            finish_time: None,
        }
    }

    /// Transition into done, recording the completion timestamp
    pub fn complete(&mut self, finish_ms: i64) {
        self.status = ItemStatus::Done;
        self.finish_time = Some(finish_ms);
    }

    /// Transition back to active, clearing the completion timestamp
    pub fn reopen(&mut self) {
        self.status = ItemStatus::Active;
        self.finish_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new("Test item".to_string(), 1000);
        assert!(!item.id.is_empty());
        assert_eq!(item.title, "Test item");
        assert_eq!(item.status, ItemStatus::Active);
        assert_eq!(item.start_time, 1000);
        assert!(item.finish_time.is_none());
    }

    #[test]
    fn test_complete_and_reopen_pair_finish_time() {
        let mut item = Item::new("Pair".to_string(), 1000);

        item.complete(2000);
        assert_eq!(item.status, ItemStatus::Done);
        assert_eq!(item.finish_time, Some(2000));

        item.reopen();
        assert_eq!(item.status, ItemStatus::Active);
        assert!(item.finish_time.is_none());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(ItemStatus::Done.as_str(), "done");
        assert_eq!(ItemStatus::from_str("done"), ItemStatus::Done);
        assert_eq!(ItemStatus::from_str("anything"), ItemStatus::Active);
    }

    #[test]
    fn test_item_json_shape() {
        let mut item = Item::new("json".to_string(), 1000);
        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["status"], "active");
        assert_eq!(json["startTime"], 1000);
        // finishTime is absent while active
        assert!(json.get("finishTime").is_none());

        item.complete(2000);
        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["finishTime"], 2000);
    }
}
