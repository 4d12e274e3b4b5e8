use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure parsed from `healthd.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub power_supply: PowerSupplyConfig,
    pub polling: PollingConfig,
    pub charger: ChargerConfig,
    pub theme: ThemeConfig,
}

/// Where the kernel exposes power-supply nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerSupplyConfig {
    pub root: PathBuf,
}

impl Default for PowerSupplyConfig {
    fn default() -> Self {
        Self { root: PathBuf::from("/sys/class/power_supply") }
    }
}

/// Polling cadence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Interval forced while an empty battery is on a charger (seconds).
    pub fast_interval_secs: i32,
    /// Host cadence used while the fast interval is disabled (seconds).
    pub default_interval_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            fast_interval_secs:    60,
            default_interval_secs: 60,
        }
    }
}

/// Charger flag publication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargerConfig {
    /// Property key other boot components read.
    pub shutdown_property: String,
    /// Directory backing the file property store.
    pub property_dir: PathBuf,
}

impl Default for ChargerConfig {
    fn default() -> Self {
        Self {
            shutdown_property: "init.shutdown_to_charging".to_string(),
            property_dir:      PathBuf::from("/run/healthd/properties"),
        }
    }
}

/// Charging-screen styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Percentage glyph color (hex, e.g. `"#a4c639"`).
    pub glyph_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { glyph_color: "#a4c639".to_string() }
    }
}
