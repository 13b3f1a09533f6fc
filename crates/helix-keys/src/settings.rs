//! # Plugin settings
//!
//! ## Overview
//!
//! The plugin keeps one persisted value, stored as JSON by the host under
//! the plugin's identifier.
//!
//! Loading is two separate steps: first fetch whatever bytes the host has
//! (having none is a normal first-run outcome, not an error), then merge the
//! persisted keys over the defaults, so that fields added in later versions
//! pick up their default value instead of failing to deserialize. Saving
//! happens immediately on every change; there is no debouncing.
use serde::{Deserialize, Serialize};

use notekit::data::DataStore;

use crate::{PluginError, PLUGIN_ID};

/// The persisted settings for the plugin.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Settings {
    /// The one configurable value, edited through the settings page.
    #[serde(rename = "mySetting")]
    pub my_setting: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings { my_setting: "default".to_string() }
    }
}

impl Settings {
    /// Fetch and merge the persisted settings from the host.
    ///
    /// Missing data yields the defaults. Keys present in the stored blob win
    /// over the defaults, and unknown keys are ignored.
    pub fn load(data: &dyn DataStore) -> Result<Settings, PluginError> {
        match data.load(PLUGIN_ID)? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Settings::default()),
        }
    }

    /// Persist the current settings through the host.
    pub fn save(&self, data: &mut dyn DataStore) -> Result<(), PluginError> {
        let bytes = serde_json::to_vec_pretty(self)?;

        data.save(PLUGIN_ID, &bytes)?;

        return Ok(());
    }
}
