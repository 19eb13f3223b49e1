//! Gallery settings
//!
//! A tiny preferences blob, the only persistence in the gallery. Stored in
//! LocalStorage on the web build; native builds run with defaults.

use serde::{Deserialize, Serialize};

use crate::sim::NormalizationMode;

/// Gallery settings/preferences.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Drive the bouncing target with the shipped (buggy) direction
    /// normalization instead of true Euclidean normalization.
    #[serde(default)]
    pub legacy_target_normalization: bool,
    /// The cookie banner has been dismissed.
    #[serde(default)]
    pub banner_dismissed: bool,
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bad_widgets_settings";

    /// Normalization mode for a `TargetSim` built under these settings.
    pub fn normalization_mode(&self) -> NormalizationMode {
        if self.legacy_target_normalization {
            NormalizationMode::LegacyXor
        } else {
            NormalizationMode::Euclidean
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.legacy_target_normalization);
        assert!(!settings.banner_dismissed);
        assert_eq!(settings.normalization_mode(), NormalizationMode::Euclidean);
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            legacy_target_normalization: true,
            banner_dismissed: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert!(back.legacy_target_normalization);
        assert!(back.banner_dismissed);
        assert_eq!(back.normalization_mode(), NormalizationMode::LegacyXor);
    }

    #[test]
    fn test_missing_fields_default() {
        let back: Settings = serde_json::from_str("{}").unwrap();
        assert!(!back.banner_dismissed);
    }
}
