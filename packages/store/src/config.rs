//! # Client configuration — `arcade.toml`
//!
//! Defines the TOML configuration bundled with the client
//! (filename: [`AppConfig::filename`] = `"arcade.toml"`). It names the
//! persisted storage keys and, on native platforms, the data directory the
//! keys are written to.
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! token_key = "authToken"
//! user_key = "authUser"
//! dir_name = "arcade"       # native data subdirectory
//! ```
//!
//! Every field has a default, so a missing or partial file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `arcade.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Where credentials are persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
    #[serde(default = "default_user_key")]
    pub user_key: String,
    /// Subdirectory of the platform data dir used by the file store.
    #[serde(default = "default_dir_name")]
    pub dir_name: String,
}

fn default_token_key() -> String {
    "authToken".to_string()
}

fn default_user_key() -> String {
    "authUser".to_string()
}

fn default_dir_name() -> String {
    "arcade".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            user_key: default_user_key(),
            dir_name: default_dir_name(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "arcade.toml"
    }

    /// Builder method to set the native data subdirectory.
    pub fn with_dir_name(mut self, dir_name: impl Into<String>) -> Self {
        self.storage.dir_name = dir_name.into();
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
