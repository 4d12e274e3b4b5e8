use healthd_core::{HealthError, Result};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::warn;

/// Buffer size used for short attribute files such as `type`.
pub const ATTR_BUF_SIZE: usize = 128;

/// Read at most `capacity` bytes from `path` and keep everything before the
/// last newline.
///
/// Returns the number of bytes read together with the line content.  Sysfs
/// attributes are newline terminated, so a buffer without any newline yields
/// an empty string (the byte count is still reported).
pub fn read_bounded_line(path: &Path, capacity: usize) -> Result<(usize, String)> {
    read_bounded_line_quiet(path, capacity).inspect_err(|e| {
        if let HealthError::Open { source, .. } = e {
            warn!("Could not open '{}': {source}", path.display());
        }
    })
}

/// [`read_bounded_line`] without the open-failure warning, for attributes
/// polled on every sample where a missing file is routine.
pub fn read_bounded_line_quiet(path: &Path, capacity: usize) -> Result<(usize, String)> {
    if path.as_os_str().is_empty() {
        return Err(HealthError::InvalidArgument("empty attribute path".into()));
    }

    let mut file = File::open(path)
        .map_err(|source| HealthError::Open { path: path.to_path_buf(), source })?;

    let mut buf = vec![0u8; capacity];
    let count = loop {
        match file.read(&mut buf) {
            Ok(n) => break n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(HealthError::Read { path: path.to_path_buf(), source });
            }
        }
    };

    let content = buf[..count]
        .iter()
        .rposition(|&b| b == b'\n')
        .map(|nl| String::from_utf8_lossy(&buf[..nl]).into_owned())
        .unwrap_or_default();

    Ok((count, content))
}

/// Read a newline-terminated integer attribute (e.g. `capacity`, `voltage_now`).
///
/// Open failures are returned without logging; callers decide how loud to be.
pub fn read_int_attribute(path: &Path) -> Result<i64> {
    let (_, content) = read_bounded_line_quiet(path, ATTR_BUF_SIZE)?;
    content.trim().parse::<i64>().map_err(|e| {
        HealthError::Parse(format!("'{}' holds '{content}': {e}", path.display()))
    })
}
