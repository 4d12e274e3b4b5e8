use std::path::PathBuf;

/// Raw value of the fast interval right after board init: poll once, quickly.
pub const INTERVAL_FAST_INITIAL: i32 = 1;
/// Raw value meaning "disabled, fall back to the daemon's own cadence".
pub const INTERVAL_DISABLED: i32 = -1;
/// Fast interval forced while charging an empty battery (seconds).
pub const INTERVAL_FAST_FORCED: i32 = 60;

/// Daemon configuration that the board adapter reads and mutates.
///
/// The host daemon owns this value and hands it to the board hooks; the
/// scheduler consumes the interval fields as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthdConfig {
    /// Attribute file exposing the battery voltage. Set at most once.
    pub battery_voltage_path: Option<PathBuf>,
    /// Seconds between fast polls; negative = disabled, `1` = just booted.
    pub periodic_chores_interval_fast: i32,
    /// Seconds between slow polls; negative = disabled.
    pub periodic_chores_interval_slow: i32,
}

impl Default for HealthdConfig {
    fn default() -> Self {
        Self {
            battery_voltage_path:          None,
            periodic_chores_interval_fast: INTERVAL_FAST_FORCED,
            periodic_chores_interval_slow: 600,
        }
    }
}

impl HealthdConfig {
    /// Interpret the raw fast interval as a controller state.
    #[must_use]
    pub fn fast_interval(&self) -> ChoresInterval {
        ChoresInterval::from_raw(self.periodic_chores_interval_fast)
    }
}

/// Typed view over the raw `periodic_chores_interval_fast` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoresInterval {
    /// Daemon just started.
    Initial,
    /// Use the daemon's default cadence.
    Disabled,
    /// A concrete fast interval in seconds.
    Fast(i32),
}

impl ChoresInterval {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            INTERVAL_FAST_INITIAL => Self::Initial,
            r if r < 0            => Self::Disabled,
            r                     => Self::Fast(r),
        }
    }

    pub fn to_raw(self) -> i32 {
        match self {
            Self::Initial  => INTERVAL_FAST_INITIAL,
            Self::Disabled => INTERVAL_DISABLED,
            Self::Fast(s)  => s,
        }
    }
}

/// One telemetry sample handed to the board hooks by the daemon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatteryProperties {
    pub charger_ac_online:       bool,
    pub charger_usb_online:      bool,
    pub charger_wireless_online: bool,
    pub charger_dock_online:     bool,
    /// Charge level (0–100).
    pub battery_level: i32,
}

impl BatteryProperties {
    /// Any of the sources that can charge the battery directly is online.
    /// Docks are left out, so a dock alone never forces fast polling.
    #[must_use]
    pub fn charging_source_online(&self) -> bool {
        self.charger_ac_online || self.charger_usb_online || self.charger_wireless_online
    }

    /// Any charger, docks included, is online.
    #[must_use]
    pub fn any_charger_online(&self) -> bool {
        self.charging_source_online() || self.charger_dock_online
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_interval_mapping() {
        assert_eq!(ChoresInterval::from_raw(1), ChoresInterval::Initial);
        assert_eq!(ChoresInterval::from_raw(-1), ChoresInterval::Disabled);
        assert_eq!(ChoresInterval::from_raw(60), ChoresInterval::Fast(60));
        assert_eq!(ChoresInterval::Disabled.to_raw(), INTERVAL_DISABLED);
    }

    #[test]
    fn dock_counts_as_connected_but_not_charging() {
        let props = BatteryProperties { charger_dock_online: true, ..Default::default() };
        assert!(props.any_charger_online());
        assert!(!props.charging_source_online());
    }
}
