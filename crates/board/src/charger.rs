use crate::property::PropertyStore;
use healthd_core::BatteryProperties;
use tracing::{info, warn};

/// Key read by boot components deciding whether to enter the charging UI.
pub const SHUTDOWN_PROPERTY: &str = "init.shutdown_to_charging";

/// Debounced "any charger connected" flag.
///
/// The flag is published to a [`PropertyStore`] only when it changes.
#[derive(Debug, Clone)]
pub struct ChargerStateTracker {
    key: String,
    connected: bool,
}

impl Default for ChargerStateTracker {
    fn default() -> Self {
        Self::new(SHUTDOWN_PROPERTY)
    }
}

impl ChargerStateTracker {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), connected: false }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Fold one sample in.  Returns the new flag when it changed.
    ///
    /// A failed publish is logged; the in-memory flag still follows the sample.
    pub fn update(
        &mut self,
        props: &BatteryProperties,
        store: &mut dyn PropertyStore,
    ) -> Option<bool> {
        let connected = props.any_charger_online();
        if connected == self.connected {
            return None;
        }

        self.connected = connected;
        info!("Charger {}", if connected { "connected" } else { "disconnected" });
        if let Err(e) = store.set(&self.key, if connected { "1" } else { "0" }) {
            warn!("Could not publish {}: {e}", self.key);
        }
        Some(connected)
    }
}
