//! healthd: board adapter daemon for battery discovery, polling cadence and
//! the charger-connected flag.
//!
//! Run with:  `RUST_LOG=info healthd`

use anyhow::Result;
use healthd_board::{Board, FilePropertyStore};
use healthd_core::HealthdConfig;
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging; RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("healthd v{} starting", env!("CARGO_PKG_VERSION"));

    let settings = healthd_config::load(healthd_config::default_path())?;
    let store = FilePropertyStore::new(&settings.charger.property_dir);
    let mut board = Board::new(&settings, store);

    let mut config = HealthdConfig::default();
    board.init(&mut config);
    if config.battery_voltage_path.is_some() {
        match healthd_system::read_battery_voltage(&config) {
            Ok(uv)  => info!("Battery voltage: {uv} uV"),
            Err(e)  => warn!("Battery voltage unavailable: {e}"),
        }
    }

    let (cadence_tx, cadence_rx) = watch::channel(board.next_poll_interval(&config));
    let mut samples =
        healthd_system::spawn_monitor(board.power_supply_root().to_path_buf(), cadence_rx);

    loop {
        tokio::select! {
            sample = samples.recv() => {
                let Some(props) = sample else { break };
                board.battery_update(&mut config, &props);

                let next = board.next_poll_interval(&config);
                cadence_tx.send_if_modified(|current| {
                    if *current == next {
                        return false;
                    }
                    info!("Polling every {}s", next.as_secs());
                    *current = next;
                    true
                });
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }

    Ok(())
}
