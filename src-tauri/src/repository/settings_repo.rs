//! Settings Repository
//!
//! Pin and opacity live under their own keys and follow the same
//! lifecycle as the item list: read once at startup, written on change.

use crate::domain::{DomainResult, Settings};

use super::kv::KvStore;

pub const KEY_PIN: &str = "pin";
pub const KEY_OPACITY: &str = "opacity";

pub struct SettingsRepository<'a> {
    store: &'a KvStore,
}

impl<'a> SettingsRepository<'a> {
    pub fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// Load settings, defaulting each field independently when its key is
    /// absent or unreadable. Out-of-range opacity values are clamped.
    pub fn load(&self) -> Settings {
        let defaults = Settings::default();

        let pin = match self.store.get(KEY_PIN) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("stored pin is malformed, using default: {}", e);
                defaults.pin
            }),
            Ok(None) => defaults.pin,
            Err(e) => {
                log::warn!("failed to read stored pin, using default: {}", e);
                defaults.pin
            }
        };

        let opacity = match self.store.get(KEY_OPACITY) {
            Ok(Some(raw)) => serde_json::from_str::<u8>(&raw)
                .map(Settings::clamp_opacity)
                .unwrap_or_else(|e| {
                    log::warn!("stored opacity is malformed, using default: {}", e);
                    defaults.opacity
                }),
            Ok(None) => defaults.opacity,
            Err(e) => {
                log::warn!("failed to read stored opacity, using default: {}", e);
                defaults.opacity
            }
        };

        Settings { pin, opacity }
    }

    pub fn save_pin(&self, pin: bool) -> DomainResult<()> {
        self.store.set(KEY_PIN, &pin.to_string())
    }

    pub fn save_opacity(&self, opacity: u8) -> DomainResult<()> {
        self.store.set(KEY_OPACITY, &opacity.to_string())
    }
}
