//! Persisted page configuration

use neon_math::Rgba;
use serde::{Serialize, Deserialize};

use crate::store::{Storage, StoreError};

/// The single storage key the page state lives under
pub const CONFIG_KEY: &str = "neon_cfg";

/// Default accent, the teal the whole theme is built around
pub const DEFAULT_ACCENT: &str = "#00fff6";

/// The JSON-shaped object persisted by the page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default)]
    pub note: String,
}

fn default_accent() -> String {
    DEFAULT_ACCENT.to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            accent: default_accent(),
            note: String::new(),
        }
    }
}

impl PageConfig {
    /// Parse the accent into a color, falling back to the default teal
    /// when the stored string is not a valid hex color.
    pub fn accent_color(&self) -> Rgba {
        Rgba::from_hex(&self.accent)
            .unwrap_or_else(|| Rgba::from_hex(DEFAULT_ACCENT).expect("default accent parses"))
    }
}

/// Typed facade over a [`Storage`] for the page config.
///
/// Loads never fail: anything unreadable or unparsable collapses to the
/// defaults.
pub struct ConfigStore<S: Storage> {
    store: S,
}

impl<S: Storage> ConfigStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the current config, or defaults when absent/corrupt
    pub fn load(&self) -> PageConfig {
        match self.store.get(CONFIG_KEY) {
            Ok(Some(value)) => serde_json::from_value(value).unwrap_or_default(),
            Ok(None) => PageConfig::default(),
            Err(e) => {
                log::warn!("Falling back to default page config: {}", e);
                PageConfig::default()
            }
        }
    }

    /// Persist the whole config (last write wins)
    pub fn save(&mut self, cfg: &PageConfig) -> Result<(), StoreError> {
        let value = serde_json::to_value(cfg)?;
        self.store.set(CONFIG_KEY, value)
    }

    /// Read-modify-write; returns the stored result
    pub fn update<F>(&mut self, apply: F) -> Result<PageConfig, StoreError>
    where
        F: FnOnce(&mut PageConfig),
    {
        let mut cfg = self.load();
        apply(&mut cfg);
        self.save(&cfg)?;
        Ok(cfg)
    }

    /// Write the defaults back and return them
    pub fn reset(&mut self) -> Result<PageConfig, StoreError> {
        let cfg = PageConfig::default();
        self.save(&cfg)?;
        Ok(cfg)
    }
}
