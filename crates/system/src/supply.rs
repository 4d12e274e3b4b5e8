//! Per-sample snapshot of charger and battery state from sysfs.

use crate::file::{read_bounded_line_quiet, read_int_attribute, ATTR_BUF_SIZE};
use healthd_core::{BatteryProperties, HealthError, Result};
use std::path::Path;
use tracing::debug;

/// What a power-supply node's `type` attribute says it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyKind {
    Battery,
    Ac,
    Usb,
    Wireless,
    Dock,
}

impl SupplyKind {
    /// Map a kernel `type` string; unknown kinds yield `None`.
    pub fn from_type(kind: &str) -> Option<Self> {
        match kind {
            "Battery"                  => Some(Self::Battery),
            "Mains"                    => Some(Self::Ac),
            k if k.starts_with("USB") => Some(Self::Usb),
            "Wireless"                 => Some(Self::Wireless),
            "Dock"                     => Some(Self::Dock),
            _                          => None,
        }
    }
}

/// Build a [`BatteryProperties`] snapshot from every node under `root`.
///
/// Nodes that cannot be read are skipped.  The level comes from the first
/// battery node's `capacity` and is `0` when unreadable.
pub fn read_properties(root: &Path) -> Result<BatteryProperties> {
    let entries = std::fs::read_dir(root).map_err(|source| HealthError::Enumeration {
        path: root.to_path_buf(),
        source,
    })?;

    let mut props = BatteryProperties::default();
    let mut battery_seen = false;

    for node in entries.map_while(std::result::Result::ok).map(|e| e.path()) {
        let kind = match read_bounded_line_quiet(&node.join("type"), ATTR_BUF_SIZE) {
            Ok((_, kind)) => kind,
            Err(e) => {
                debug!("{e}");
                continue;
            }
        };

        match SupplyKind::from_type(&kind) {
            Some(SupplyKind::Battery) if !battery_seen => {
                battery_seen = true;
                props.battery_level = read_int_attribute(&node.join("capacity"))
                    .map(|level| level.clamp(0, 100) as i32)
                    .unwrap_or_else(|e| {
                        debug!("{e}");
                        0
                    });
            }
            Some(SupplyKind::Battery) => {}
            Some(SupplyKind::Ac)       => props.charger_ac_online |= is_online(&node),
            Some(SupplyKind::Usb)      => props.charger_usb_online |= is_online(&node),
            Some(SupplyKind::Wireless) => props.charger_wireless_online |= is_online(&node),
            Some(SupplyKind::Dock)     => props.charger_dock_online |= is_online(&node),
            None => debug!("Ignoring '{}' of type '{kind}'", node.display()),
        }
    }

    Ok(props)
}

fn is_online(node: &Path) -> bool {
    match read_int_attribute(&node.join("online")) {
        Ok(v) => v != 0,
        Err(e) => {
            debug!("{e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::count_warnings;
    use std::fs;
    use tempfile::TempDir;

    fn node(root: &TempDir, name: &str, attrs: &[(&str, &str)]) {
        let dir = root.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        for (attr, value) in attrs {
            fs::write(dir.join(attr), value).unwrap();
        }
    }

    #[test]
    fn maps_kernel_types() {
        assert_eq!(SupplyKind::from_type("Mains"), Some(SupplyKind::Ac));
        assert_eq!(SupplyKind::from_type("USB_PD"), Some(SupplyKind::Usb));
        assert_eq!(SupplyKind::from_type("UPS"), None);
    }

    #[test]
    fn collects_online_flags_and_level() {
        let root = TempDir::new().unwrap();
        node(&root, "ac", &[("type", "Mains\n"), ("online", "1\n")]);
        node(&root, "usb", &[("type", "USB\n"), ("online", "0\n")]);
        node(&root, "dock", &[("type", "Dock\n"), ("online", "1\n")]);
        node(&root, "battery", &[("type", "Battery\n"), ("capacity", "42\n")]);

        let props = read_properties(root.path()).unwrap();
        assert_eq!(
            props,
            BatteryProperties {
                charger_ac_online:       true,
                charger_usb_online:      false,
                charger_wireless_online: false,
                charger_dock_online:     true,
                battery_level:           42,
            }
        );
    }

    #[test]
    fn unreadable_capacity_reads_as_empty() {
        let root = TempDir::new().unwrap();
        node(&root, "battery", &[("type", "Battery\n")]);
        node(&root, "wireless", &[("type", "Wireless\n"), ("online", "1\n")]);

        let props = read_properties(root.path()).unwrap();
        assert_eq!(props.battery_level, 0);
        assert!(props.charger_wireless_online);
    }

    #[test]
    fn missing_attributes_do_not_warn() {
        let root = TempDir::new().unwrap();
        node(&root, "ac", &[("type", "Mains\n")]);
        node(&root, "battery", &[("type", "Battery\n")]);
        node(&root, "stray", &[]);

        let warnings = count_warnings(|| {
            let props = read_properties(root.path()).unwrap();
            assert!(!props.charger_ac_online);
            assert_eq!(props.battery_level, 0);
        });
        assert_eq!(warnings, 0);
    }

    #[test]
    fn missing_root_is_enumeration_error() {
        let root = TempDir::new().unwrap();
        let err = read_properties(&root.path().join("absent")).unwrap_err();
        assert!(matches!(err, HealthError::Enumeration { .. }));
    }
}
