use healthd_core::state::{INTERVAL_DISABLED, INTERVAL_FAST_FORCED};
use healthd_core::{BatteryProperties, ChoresInterval, HealthdConfig};
use tracing::debug;

/// Drives `periodic_chores_interval_fast` from battery samples.
///
/// Only ever writes `Disabled` or the forced fast interval after init; it
/// never reads back to check whether fast polling is already forced.
#[derive(Debug, Clone, Copy)]
pub struct PollingIntervalController {
    fast_secs: i32,
}

impl Default for PollingIntervalController {
    fn default() -> Self {
        Self::new(INTERVAL_FAST_FORCED)
    }
}

impl PollingIntervalController {
    pub fn new(fast_secs: i32) -> Self {
        Self { fast_secs }
    }

    /// Board-init: poll once quickly, and turn slow polling off for good.
    pub fn init(&self, config: &mut HealthdConfig) {
        config.periodic_chores_interval_fast = ChoresInterval::Initial.to_raw();
        config.periodic_chores_interval_slow = INTERVAL_DISABLED;
    }

    pub fn on_sample(&self, config: &mut HealthdConfig, props: &BatteryProperties) {
        if config.fast_interval() == ChoresInterval::Initial {
            config.periodic_chores_interval_fast = INTERVAL_DISABLED;
        }

        if props.charging_source_online() && props.battery_level == 0 {
            debug!("Empty battery on charger; forcing {}s polling", self.fast_secs);
            config.periodic_chores_interval_fast = self.fast_secs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(ac: bool, level: i32) -> BatteryProperties {
        BatteryProperties { charger_ac_online: ac, battery_level: level, ..Default::default() }
    }

    fn booted() -> (PollingIntervalController, HealthdConfig) {
        let ctl = PollingIntervalController::default();
        let mut config = HealthdConfig::default();
        ctl.init(&mut config);
        (ctl, config)
    }

    #[test]
    fn init_sets_initial_and_disables_slow() {
        let (_, config) = booted();
        assert_eq!(config.fast_interval(), ChoresInterval::Initial);
        assert_eq!(config.periodic_chores_interval_slow, INTERVAL_DISABLED);
    }

    #[test]
    fn first_sample_clears_initial() {
        let (ctl, mut config) = booted();
        ctl.on_sample(&mut config, &sample(true, 80));
        assert_eq!(config.fast_interval(), ChoresInterval::Disabled);
    }

    #[test]
    fn empty_battery_on_charger_forces_fast() {
        let (ctl, mut config) = booted();
        ctl.on_sample(&mut config, &sample(false, 50));
        ctl.on_sample(&mut config, &sample(true, 0));
        assert_eq!(config.fast_interval(), ChoresInterval::Fast(60));
    }

    #[test]
    fn initial_and_forced_in_same_sample() {
        let (ctl, mut config) = booted();
        ctl.on_sample(&mut config, &sample(true, 0));
        assert_eq!(config.periodic_chores_interval_fast, INTERVAL_FAST_FORCED);
    }

    #[test]
    fn forced_interval_has_no_exit() {
        let (ctl, mut config) = booted();
        ctl.on_sample(&mut config, &sample(true, 0));
        ctl.on_sample(&mut config, &sample(false, 10));
        ctl.on_sample(&mut config, &sample(true, 90));
        assert_eq!(config.fast_interval(), ChoresInterval::Fast(60));
    }

    #[test]
    fn empty_battery_without_charger_stays_disabled() {
        let (ctl, mut config) = booted();
        ctl.on_sample(&mut config, &sample(false, 0));
        assert_eq!(config.fast_interval(), ChoresInterval::Disabled);
    }

    #[test]
    fn dock_alone_does_not_force_fast() {
        let (ctl, mut config) = booted();
        let props = BatteryProperties { charger_dock_online: true, ..Default::default() };
        ctl.on_sample(&mut config, &props);
        assert_eq!(config.fast_interval(), ChoresInterval::Disabled);
    }

    #[test]
    fn usb_and_wireless_force_fast() {
        for props in [
            BatteryProperties { charger_usb_online: true, ..Default::default() },
            BatteryProperties { charger_wireless_online: true, ..Default::default() },
        ] {
            let (ctl, mut config) = booted();
            ctl.on_sample(&mut config, &props);
            assert_eq!(config.fast_interval(), ChoresInterval::Fast(60));
        }
    }

    #[test]
    fn configured_fast_interval_is_used() {
        let ctl = PollingIntervalController::new(30);
        let mut config = HealthdConfig::default();
        ctl.init(&mut config);
        ctl.on_sample(&mut config, &sample(true, 0));
        assert_eq!(config.periodic_chores_interval_fast, 30);
    }
}
