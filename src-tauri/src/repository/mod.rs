//! Repository Layer
//!
//! Persistence over a string-keyed key-value store backed by SQLite.

mod item_list_repo;
mod kv;
mod settings_repo;

#[cfg(test)]
mod tests;

pub use item_list_repo::ItemListRepository;
pub use kv::KvStore;
pub use settings_repo::SettingsRepository;

use crate::domain::{Item, Settings};

/// One-shot startup read of everything the app holds in memory
///
/// Called once by the process entry point; the store is never read again
/// afterwards, only written back after each mutation.
pub fn load_initial_state(store: &KvStore) -> (Vec<Item>, Settings) {
    let items = ItemListRepository::new(store).load();
    let settings = SettingsRepository::new(store).load();
    (items, settings)
}
