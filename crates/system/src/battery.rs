//! Battery discovery under the kernel power-supply class.

use crate::file::{read_bounded_line, read_int_attribute, ATTR_BUF_SIZE};
use healthd_core::{HealthError, HealthdConfig, Result};
use rustix::fs::{access, Access};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Voltage attributes in order of preference: open-circuit voltage first.
pub const VOLTAGE_ATTRIBUTES: [&str; 3] = ["voltage_ocv", "voltage_now", "batt_vol"];

/// `true` iff the `type` attribute at `type_path` reads exactly `Battery`.
///
/// Read failures classify as "not a battery".
pub fn is_battery_supply(type_path: &Path) -> bool {
    match read_bounded_line(type_path, ATTR_BUF_SIZE) {
        Ok((len, kind)) if len > 0 => kind == "Battery",
        Ok(_) => false,
        Err(e) => {
            debug!("Skipping '{}': {e}", type_path.display());
            false
        }
    }
}

/// Find the voltage attribute of the first battery node under `root`.
///
/// Discovery failures are logged and reported as `None`.
pub fn resolve_battery_voltage_path(root: &Path) -> Option<PathBuf> {
    match find_voltage_path(root) {
        Ok(path) => Some(path),
        Err(e @ HealthError::Enumeration { .. }) => {
            error!("{e}");
            None
        }
        Err(e) => {
            debug!("{e}");
            None
        }
    }
}

fn find_voltage_path(root: &Path) -> Result<PathBuf> {
    let entries = std::fs::read_dir(root).map_err(|source| HealthError::Enumeration {
        path: root.to_path_buf(),
        source,
    })?;

    // `read_dir` never yields `.` or `..`.  Order is whatever the filesystem
    // returns; only the first battery node is ever considered.
    for entry in entries.map_while(std::result::Result::ok) {
        let node = entry.path();
        if !is_battery_supply(&node.join("type")) {
            continue;
        }

        return VOLTAGE_ATTRIBUTES
            .iter()
            .map(|attr| node.join(attr))
            .find(|path| is_readable(path))
            .ok_or_else(|| {
                warn!("Battery node '{}' exposes no voltage attribute", node.display());
                HealthError::NotFound(format!("voltage attribute under '{}'", node.display()))
            });
    }

    Err(HealthError::NotFound(format!("battery node under '{}'", root.display())))
}

fn is_readable(path: &Path) -> bool {
    access(path, Access::READ_OK).is_ok()
}

/// Resolve `battery_voltage_path` unless a previous call already did.
pub fn init_battery_path(root: &Path, config: &mut HealthdConfig) {
    if let Some(existing) = &config.battery_voltage_path {
        debug!("Battery voltage path already set to '{}'", existing.display());
        return;
    }

    config.battery_voltage_path = resolve_battery_voltage_path(root);
    match &config.battery_voltage_path {
        Some(path) => info!("Battery voltage source: {}", path.display()),
        None       => warn!("No battery voltage source under {}", root.display()),
    }
}

/// Current battery voltage in microvolts, read from the resolved attribute.
pub fn read_battery_voltage(config: &HealthdConfig) -> Result<i64> {
    let path = config
        .battery_voltage_path
        .as_deref()
        .ok_or_else(|| HealthError::NotFound("battery voltage path".into()))?;
    read_int_attribute(path)
}
