pub mod schema;

pub use schema::{BoardConfig, ChargerConfig, PollingConfig, PowerSupplyConfig, ThemeConfig};

use healthd_core::{HealthError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `BoardConfig::default()` if
/// the file doesn't exist so the daemon always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<BoardConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(BoardConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| HealthError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let config: BoardConfig =
        toml::from_str(&raw).map_err(|e| HealthError::Config(format!("TOML parse error: {e}")))?;
    validate(&config)?;
    Ok(config)
}

/// Reject values the board logic cannot honour.
pub fn validate(config: &BoardConfig) -> Result<()> {
    // 1 is the just-booted sentinel and would be cleared on the next sample.
    if config.polling.fast_interval_secs <= 1 {
        return Err(HealthError::Config(format!(
            "polling.fast_interval_secs must be greater than 1, got {}",
            config.polling.fast_interval_secs
        )));
    }
    if config.polling.default_interval_secs == 0 {
        return Err(HealthError::Config(
            "polling.default_interval_secs must be non-zero".into(),
        ));
    }
    if config.charger.shutdown_property.trim().is_empty() {
        return Err(HealthError::Config("charger.shutdown_property is empty".into()));
    }
    Ok(())
}

/// Return the config path, honouring `$HEALTHD_CONFIG`.
pub fn default_path() -> PathBuf {
    std::env::var("HEALTHD_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/etc/healthd/healthd.toml"))
}
