//! Tauri Commands for the Item List
//!
//! Exposes list operations to the frontend via Tauri IPC. Every mutation
//! persists the full snapshot before returning, so the caller never sees
//! pending state; the new sequence comes back for the UI to adopt.

use serde::Serialize;
use tauri::State;

use crate::domain::{Item, ItemPatch, ItemStatus};
use crate::repository::ItemListRepository;
use crate::AppState;

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn persist(state: &AppState, items: &[Item]) -> Result<(), String> {
    let store = state.store.lock().map_err(|e| e.to_string())?;
    ItemListRepository::new(&store)
        .save(items)
        .map_err(|e| e.to_string())
}

/// Everything the frontend needs on mount, in one read
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialState {
    pub items: Vec<Item>,
    pub pin: bool,
    pub opacity: u8,
}

/// Snapshot of the state loaded at startup
#[tauri::command]
pub fn get_initial_state(state: State<'_, AppState>) -> Result<InitialState, String> {
    let list = state.list.lock().map_err(|e| e.to_string())?;
    let settings = state.settings.lock().map_err(|e| e.to_string())?;
    Ok(InitialState {
        items: list.snapshot(),
        pin: settings.pin,
        opacity: settings.opacity,
    })
}

/// Create a new item at the front of the list
#[tauri::command]
pub fn add_item(state: State<'_, AppState>, title: String) -> Result<Item, String> {
    let mut list = state.list.lock().map_err(|e| e.to_string())?;
    let item = list.add(title, now_ms());
    persist(&state, list.items())?;
    Ok(item)
}

/// Apply a partial update (rename and/or status toggle) to one item
///
/// A status change sets or clears the finish time automatically. An
/// unknown id is a reported no-op: logged, current list returned unchanged.
#[tauri::command]
pub fn update_item(
    state: State<'_, AppState>,
    id: String,
    title: Option<String>,
    status: Option<String>,
    finish_time: Option<i64>,
) -> Result<Vec<Item>, String> {
    let mut list = state.list.lock().map_err(|e| e.to_string())?;
    let patch = ItemPatch {
        title,
        status: status.as_deref().map(ItemStatus::from_str),
        finish_time,
    };
    if list.update(&id, patch, now_ms()) {
        persist(&state, list.items())?;
    } else {
        log::warn!("update for unknown item {}", id);
    }
    Ok(list.snapshot())
}

/// Delete one item
///
/// Confirmation happens in the UI before this is invoked. An unknown id
/// is a reported no-op.
#[tauri::command]
pub fn delete_item(state: State<'_, AppState>, id: String) -> Result<Vec<Item>, String> {
    let mut list = state.list.lock().map_err(|e| e.to_string())?;
    if list.delete(&id) {
        persist(&state, list.items())?;
    } else {
        log::warn!("delete for unknown item {}", id);
    }
    Ok(list.snapshot())
}

/// Move the item at `from` to position `to` after a completed drag gesture
#[tauri::command]
pub fn reorder_item(
    state: State<'_, AppState>,
    from: usize,
    to: usize,
) -> Result<Vec<Item>, String> {
    let mut list = state.list.lock().map_err(|e| e.to_string())?;
    list.reorder(from, to).map_err(|e| e.to_string())?;
    persist(&state, list.items())?;
    Ok(list.snapshot())
}
