//! Pintodo Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Key-value persistence over SQLite
//! - commands: Tauri command handlers

use std::path::PathBuf;
use std::sync::Mutex;

use tauri::Manager;

mod commands;
mod domain;
mod repository;

use domain::{ItemList, Settings};
use repository::KvStore;

/// Application state shared across commands
///
/// A single actor mutates everything in direct response to user actions,
/// so plain mutexes are all the coordination needed.
pub struct AppState {
    pub store: Mutex<KvStore>,
    pub list: Mutex<ItemList>,
    pub settings: Mutex<Settings>,
}

/// Get store path from app handle
fn store_path(app_handle: &tauri::AppHandle) -> tauri::Result<PathBuf> {
    let app_dir = app_handle.path().app_data_dir()?;
    std::fs::create_dir_all(&app_dir)?;
    Ok(app_dir.join("pintodo.db"))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                #[cfg(desktop)]
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            app_logger::init_logger(app_handle.path().app_log_dir()?, "Pintodo")?;

            // One-shot startup read; the store is write-only afterwards
            let store = KvStore::open(&store_path(&app_handle)?)?;
            let (items, settings) = repository::load_initial_state(&store);
            log::info!(
                "loaded {} items, pin={}, opacity={}",
                items.len(),
                settings.pin,
                settings.opacity
            );

            // Stored pin applies before the frontend sends anything
            if let Some(window) = app.get_webview_window("main") {
                let _ = window.set_always_on_top(settings.pin);
            }

            app.manage(AppState {
                store: Mutex::new(store),
                list: Mutex::new(ItemList::new(items)),
                settings: Mutex::new(settings),
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_initial_state,
            commands::add_item,
            commands::update_item,
            commands::delete_item,
            commands::reorder_item,
            commands::set_pinned,
            commands::set_opacity,
            commands::minimize_window,
            commands::close_window,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application")
}
