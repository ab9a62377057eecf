use serde::{Deserialize, Serialize};

use crate::store::SortMode;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Startup values for the list and the add-item form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Sort mode shown when the app starts.
    #[serde(default)]
    pub sort: SortMode,
    /// Quantity preselected in the form (default: 1).
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Add-item form limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Largest quantity the form offers (default: 20).
    #[serde(default = "default_max_quantity")]
    pub max_quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Ask before clearing the whole list (default: true).
    #[serde(default = "default_confirm_clear")]
    pub confirm_clear: bool,
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_quantity() -> u32 {
    1
}

fn default_max_quantity() -> u32 {
    20
}

fn default_confirm_clear() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            sort: SortMode::default(),
            quantity: default_quantity(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            max_quantity: default_max_quantity(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            confirm_clear: default_confirm_clear(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
