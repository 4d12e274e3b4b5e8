pub mod battery;
pub mod file;
pub mod supply;

#[cfg(test)]
mod test_support;

pub use battery::{init_battery_path, is_battery_supply, read_battery_voltage, resolve_battery_voltage_path};
pub use file::{read_bounded_line, read_bounded_line_quiet};

use healthd_core::BatteryProperties;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant};
use tracing::warn;

/// Spawn a background Tokio task that samples the power-supply nodes under
/// `root` and forwards [`BatteryProperties`] through the returned channel.
///
/// The delay after each sample is read from `cadence`; a new value published
/// while the task sleeps reschedules the pending wake-up.  The task stops when
/// the receiver or the cadence sender is dropped.
pub fn spawn_monitor(
    root: PathBuf,
    mut cadence: watch::Receiver<Duration>,
) -> mpsc::Receiver<BatteryProperties> {
    let (tx, rx) = mpsc::channel(4);

    tokio::spawn(async move {
        loop {
            match supply::read_properties(&root) {
                Ok(props) => {
                    if tx.send(props).await.is_err() {
                        break; // all receivers dropped
                    }
                }
                Err(e) => warn!("Power-supply snapshot failed: {e}"),
            }

            let delay = *cadence.borrow_and_update();
            let sleep = time::sleep(delay);
            tokio::pin!(sleep);

            loop {
                tokio::select! {
                    _ = &mut sleep => break,
                    changed = cadence.changed() => {
                        if changed.is_err() {
                            return; // cadence owner gone
                        }
                        let delay = *cadence.borrow_and_update();
                        sleep.as_mut().reset(Instant::now() + delay);
                    }
                }
            }
        }
    });

    rx
}
