//! Window Commands
//!
//! Pin, opacity, and window controls. Pin and opacity persist first, then
//! fire a one-way signal toward the window shell; no acknowledgement is
//! expected and the most recent value wins.

use tauri::{AppHandle, Emitter, Manager, State};

use crate::domain::Settings;
use crate::repository::SettingsRepository;
use crate::AppState;

/// Event channel carrying the normalized opacity fraction to the shell
pub const OPACITY_CHANNEL: &str = "opacity";

/// Set window always-on-top state
#[tauri::command]
pub fn set_pinned(app: AppHandle, state: State<'_, AppState>, pin: bool) -> Result<(), String> {
    {
        let mut settings = state.settings.lock().map_err(|e| e.to_string())?;
        settings.pin = pin;
        let store = state.store.lock().map_err(|e| e.to_string())?;
        SettingsRepository::new(&store)
            .save_pin(pin)
            .map_err(|e| e.to_string())?;
    }

    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        let window = app.get_webview_window("main").ok_or("Window not found")?;
        window.set_always_on_top(pin).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Set window opacity from a percentage, clamped to the 80-100 range
///
/// Returns the clamped percentage so the UI can snap its slider.
#[tauri::command]
pub fn set_opacity(app: AppHandle, state: State<'_, AppState>, percent: u8) -> Result<u8, String> {
    let clamped = Settings::clamp_opacity(percent);
    let fraction;
    {
        let mut settings = state.settings.lock().map_err(|e| e.to_string())?;
        settings.opacity = clamped;
        fraction = settings.opacity_fraction();
        let store = state.store.lock().map_err(|e| e.to_string())?;
        SettingsRepository::new(&store)
            .save_opacity(clamped)
            .map_err(|e| e.to_string())?;
    }

    if let Err(e) = app.emit(OPACITY_CHANNEL, fraction) {
        log::warn!("failed to emit opacity signal: {}", e);
    }
    Ok(clamped)
}

/// Minimize window
#[tauri::command]
pub fn minimize_window(app: AppHandle) -> Result<(), String> {
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        let window = app.get_webview_window("main").ok_or("Window not found")?;
        window.minimize().map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Close window
#[tauri::command]
pub fn close_window(app: AppHandle) -> Result<(), String> {
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        let window = app.get_webview_window("main").ok_or("Window not found")?;
        window.close().map_err(|e| e.to_string())?;
    }
    Ok(())
}
