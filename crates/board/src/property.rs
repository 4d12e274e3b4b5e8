//! Key/value stores the charger flag is published to.

use healthd_core::{HealthError, Result};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// A system property sink.  Values are only ever written, never read back.
pub trait PropertyStore: Send + std::fmt::Debug {
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One file per key under a directory, value written newline-terminated.
#[derive(Debug, Clone)]
pub struct FilePropertyStore {
    dir: PathBuf,
}

impl FilePropertyStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl PropertyStore for FilePropertyStore {
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() || key.contains('/') || key.starts_with('.') {
            return Err(HealthError::Property(format!("invalid key '{key}'")));
        }

        std::fs::create_dir_all(&self.dir).map_err(|e| {
            HealthError::Property(format!("cannot create '{}': {e}", self.dir.display()))
        })?;

        // Readers must never observe a truncated value: stage the write next
        // to the target and rename it into place.
        let path = self.dir.join(key);
        let write_err =
            |e: std::io::Error| HealthError::Property(format!("cannot write '{}': {e}", path.display()));

        let mut staged = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        writeln!(staged, "{value}").map_err(write_err)?;
        staged.persist(&path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

/// In-process store that records every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryPropertyStore {
    writes: Vec<(String, String)>,
}

impl MemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(key, value)` write in order.
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }

    /// Latest value written under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.writes
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl PropertyStore for MemoryPropertyStore {
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.writes.push((key.to_string(), value.to_string()));
        Ok(())
    }
}
