//! Board hooks of the health daemon: battery discovery at init, polling
//! cadence and charger flag on every sample, and the percentage glyph of the
//! charging screen.

pub mod charger;
pub mod interval;
pub mod property;

pub use charger::{ChargerStateTracker, SHUTDOWN_PROPERTY};
pub use interval::PollingIntervalController;
pub use property::{FilePropertyStore, MemoryPropertyStore, PropertyStore};

use healthd_config::BoardConfig;
use healthd_core::{BatteryProperties, ChoresInterval, HealthdConfig};
use healthd_renderer::{BatteryGlyphRenderer, DisplaySurface};
use healthd_theme::ChargerTheme;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Session state of the board adapter, owned by the host daemon for the
/// lifetime of the process.
#[derive(Debug)]
pub struct Board<S: PropertyStore> {
    power_supply_root: PathBuf,
    default_interval:  Duration,
    interval:          PollingIntervalController,
    charger:           ChargerStateTracker,
    store:             S,
    theme:             ChargerTheme,
    glyph:             Option<BatteryGlyphRenderer>,
}

impl<S: PropertyStore> Board<S> {
    pub fn new(settings: &BoardConfig, store: S) -> Self {
        Self {
            power_supply_root: settings.power_supply.root.clone(),
            default_interval:  Duration::from_secs(settings.polling.default_interval_secs),
            interval:          PollingIntervalController::new(settings.polling.fast_interval_secs),
            charger:           ChargerStateTracker::new(settings.charger.shutdown_property.clone()),
            store,
            theme:             ChargerTheme::from_config(&settings.theme),
            glyph:             None,
        }
    }

    pub fn power_supply_root(&self) -> &Path {
        &self.power_supply_root
    }

    /// Resolve the voltage source and arm the one-shot fast startup poll.
    pub fn init(&self, config: &mut HealthdConfig) {
        healthd_system::init_battery_path(&self.power_supply_root, config);
        self.interval.init(config);
    }

    /// Per-sample hook.  Returns the new charger flag when it changed.
    pub fn battery_update(
        &mut self,
        config: &mut HealthdConfig,
        props: &BatteryProperties,
    ) -> Option<bool> {
        self.interval.on_sample(config, props);
        self.charger.update(props, &mut self.store)
    }

    /// Charging-UI bring-up: take the font metrics of `surface` once.
    pub fn charger_mode_init(&mut self, surface: &impl DisplaySurface) {
        self.glyph = Some(BatteryGlyphRenderer::new(surface, &self.theme));
    }

    /// Charging-UI frame hook: draw the battery percentage centred on `surface`.
    ///
    /// Does nothing until [`Board::charger_mode_init`] has run.
    pub fn draw_battery(&self, props: &BatteryProperties, surface: &mut impl DisplaySurface) {
        match &self.glyph {
            Some(glyph) => glyph.draw_battery_percent(props.battery_level, surface),
            None        => tracing::debug!("Charging screen not initialised; skipping glyph"),
        }
    }

    pub fn charger_connected(&self) -> bool {
        self.charger.is_connected()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Delay until the next sample: a positive fast interval wins, otherwise
    /// the host's default cadence.
    pub fn next_poll_interval(&self, config: &HealthdConfig) -> Duration {
        match config.fast_interval() {
            ChoresInterval::Initial            => Duration::from_secs(1),
            ChoresInterval::Fast(s) if s > 0   => Duration::from_secs(s as u64),
            _                                  => self.default_interval,
        }
    }
}
