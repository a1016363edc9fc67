//! File I/O utilities with atomic writes
//!
//! Reads report whether a file was absent, corrupt or present instead of
//! failing, so callers can fall back to defaults while still noticing damaged
//! data. Writes go through a temp file and a rename.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::SpendError;

/// Outcome of reading persisted data
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    /// Nothing has been saved yet
    Absent,
    /// A file exists but could not be read or parsed
    Corrupt(String),
    /// Data loaded successfully
    Present(T),
}

/// Read JSON from a file, classifying the result
pub fn read_json<T, P>(path: P) -> LoadOutcome<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return LoadOutcome::Absent;
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return LoadOutcome::Corrupt(format!("Failed to open {}: {}", path.display(), e)),
    };

    let reader = BufReader::new(file);
    match serde_json::from_reader(reader) {
        Ok(value) => LoadOutcome::Present(value),
        Err(e) => LoadOutcome::Corrupt(format!("Failed to parse {}: {}", path.display(), e)),
    }
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The parent directory is created if it does not exist yet.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), SpendError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SpendError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| {
        SpendError::Io(format!("Failed to create {}: {}", temp_path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)?;

    writer
        .flush()
        .map_err(|e| SpendError::Io(format!("Failed to flush {}: {}", temp_path.display(), e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| SpendError::Io(format!("Failed to sync {}: {}", temp_path.display(), e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SpendError::Io(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}
