//! Artifact writing: JSON through the serializer, stable field order.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::{IoError, IoResult};

/// Serialize `value` as pretty JSON (trailing newline) and write it to
/// `path`, creating parent directories as needed. Field order is the struct
/// declaration order, so artifacts diff cleanly between runs.
pub fn write_json_file<T: Serialize>(value: &T, path: &Path) -> IoResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| IoError::Path(format!("{}: {e}", parent.display())))?;
        }
    }
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    fs::write(path, bytes).map_err(|e| IoError::Path(format!("{}: {e}", path.display())))?;
    Ok(())
}
