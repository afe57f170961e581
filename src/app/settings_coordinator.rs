//! Magnifier settings persistence coordination.
//!
//! Settings are stored in eframe's persistent storage as JSON strings.
//! Missing or malformed entries fall back to defaults, so a broken
//! settings file can never keep the viewer from starting.

use rloupe::MagnifierConfig;
use serde::{Deserialize, Serialize};

const MAGNIFIER_CONFIG_KEY: &str = "magnifier_config";

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads the magnifier configuration, or the defaults if none is stored.
    pub fn load_config(storage: Option<&dyn eframe::Storage>) -> MagnifierConfig {
        Self::load_setting_or(storage, MAGNIFIER_CONFIG_KEY, MagnifierConfig::default())
    }

    /// Saves the magnifier configuration.
    pub fn save_config(storage: &mut dyn eframe::Storage, config: &MagnifierConfig) {
        Self::save_setting(storage, MAGNIFIER_CONFIG_KEY, config);
    }

    /// Saves a setting to persistent storage.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this setting
    /// * `value` - The value to serialize and save
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => log::warn!("failed to serialize setting {}: {}", key, e),
        }
    }

    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    /// * `default` - The default value to use if loading fails
    ///
    /// # Returns
    /// The deserialized value if found and valid, otherwise the provided default
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = match storage.and_then(|s| s.get_string(key)) {
            Some(json_str) => json_str,
            None => return default,
        };
        match serde_json::from_str(&json_str) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("ignoring malformed setting {}: {}", key, e);
                default
            }
        }
    }
}
