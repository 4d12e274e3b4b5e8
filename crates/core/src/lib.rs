pub mod error;
pub mod state;

pub use error::{HealthError, Result};
pub use state::{BatteryProperties, ChoresInterval, HealthdConfig};
