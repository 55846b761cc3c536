//! Repository Integration Tests
//!
//! Tests for the KV-backed repositories with an in-memory SQLite store.

#[cfg(test)]
mod tests {
    use crate::domain::{ItemList, ItemPatch, ItemStatus, Settings};
    use crate::repository::{load_initial_state, ItemListRepository, KvStore, SettingsRepository};

    fn setup_test_store() -> KvStore {
        KvStore::open_in_memory().expect("Failed to init test store")
    }

    #[test]
    fn test_kv_get_absent_key() {
        let store = setup_test_store();
        assert_eq!(store.get("missing").expect("get"), None);
    }

    #[test]
    fn test_kv_set_overwrites() {
        let store = setup_test_store();
        store.set("k", "1").expect("set");
        store.set("k", "2").expect("set");
        assert_eq!(store.get("k").expect("get"), Some("2".to_string()));
    }

    #[test]
    fn test_item_list_round_trip() {
        let store = setup_test_store();
        let repo = ItemListRepository::new(&store);

        let mut list = ItemList::default();
        list.add("buy milk".to_string(), 1000);
        list.add("water plants".to_string(), 2000);
        let id = list.items()[1].id.clone();
        list.update(
            &id,
            ItemPatch {
                status: Some(ItemStatus::Done),
                finish_time: Some(3000),
                ..Default::default()
            },
            3000,
        );

        repo.save(list.items()).expect("save");
        let reloaded = repo.load();

        assert_eq!(reloaded, list.snapshot());
    }

    #[test]
    fn test_item_list_absent_is_empty() {
        let store = setup_test_store();
        assert!(ItemListRepository::new(&store).load().is_empty());
    }

    #[test]
    fn test_item_list_malformed_falls_back_to_empty() {
        let store = setup_test_store();
        store.set("itemList", "{not json").expect("set");
        assert!(ItemListRepository::new(&store).load().is_empty());

        // Wrong shape, valid JSON
        store.set("itemList", "{\"a\": 1}").expect("set");
        assert!(ItemListRepository::new(&store).load().is_empty());
    }

    #[test]
    fn test_item_list_load_repairs_finish_time_pairing() {
        let store = setup_test_store();
        store
            .set(
                "itemList",
                r#"[{"id":"x","title":"stale","status":"active","startTime":1000,"finishTime":2000}]"#,
            )
            .expect("set");

        let items = ItemListRepository::new(&store).load();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].status, ItemStatus::Active);
        assert!(items[0].finish_time.is_none());
    }

    #[test]
    fn test_settings_defaults_when_absent() {
        let store = setup_test_store();
        let settings = SettingsRepository::new(&store).load();
        assert_eq!(settings, Settings::default());
        assert!(settings.pin);
        assert_eq!(settings.opacity, 100);
    }

    #[test]
    fn test_settings_round_trip() {
        let store = setup_test_store();
        let repo = SettingsRepository::new(&store);

        repo.save_pin(false).expect("save pin");
        repo.save_opacity(85).expect("save opacity");

        let settings = repo.load();
        assert!(!settings.pin);
        assert_eq!(settings.opacity, 85);
    }

    #[test]
    fn test_settings_load_clamps_out_of_range_opacity() {
        let store = setup_test_store();
        store.set("opacity", "70").expect("set");
        let settings = SettingsRepository::new(&store).load();
        assert_eq!(settings.opacity, 80);
        assert!((settings.opacity_fraction() - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_settings_malformed_uses_defaults() {
        let store = setup_test_store();
        store.set("pin", "maybe").expect("set");
        store.set("opacity", "\"high\"").expect("set");
        let settings = SettingsRepository::new(&store).load();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_initial_state_reads_everything() {
        let store = setup_test_store();

        let mut list = ItemList::default();
        list.add("persisted".to_string(), 1000);
        ItemListRepository::new(&store).save(list.items()).expect("save");
        SettingsRepository::new(&store).save_opacity(90).expect("save");

        let (items, settings) = load_initial_state(&store);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "persisted");
        assert_eq!(settings.opacity, 90);
        assert!(settings.pin);
    }
}
