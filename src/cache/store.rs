// Snapshot and watermark store.
// Handles JSON serialization and atomic filesystem writes for per-site state.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{BlogspinError, Result};

/// Read a site's snapshot from disk.
///
/// A missing file is `Ok(None)` (the site has never been built). A file
/// that exists but fails to deserialize is `CorruptSnapshot` — it must not
/// be mistaken for an empty index, which would trigger a silent rebuild.
pub fn read_snapshot<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let snapshot = serde_json::from_str(&contents).map_err(|source| {
        BlogspinError::CorruptSnapshot {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(Some(snapshot))
}

/// Write a site's snapshot as JSON.
pub fn write_snapshot<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| BlogspinError::Other(format!("snapshot serialization failed: {}", e)))?;
    write_atomic(path, json.as_bytes())
}

/// Read a site's watermark: a single ISO-8601 UTC timestamp.
///
/// A missing file means "no prior watermark" and requests all history,
/// which is the safe default rather than an error.
pub fn read_watermark(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    Ok(Some(contents.trim_end().to_string()))
}

/// Write a site's watermark.
pub fn write_watermark(path: &Path, timestamp: &str) -> Result<()> {
    write_atomic(path, timestamp.as_bytes())
}

/// Write via temp file and rename so a crash never leaves a truncated file.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
