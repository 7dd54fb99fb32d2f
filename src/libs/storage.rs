//! Flat-file persistence for the task collection.
//!
//! The whole collection lives in one JSON array. Every call reads or writes
//! the complete document; nothing is cached and nothing is locked. Two
//! processes writing the same file race and the last save wins.

use super::error::StoreError;
use super::task::Task;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Persistence seam used by the task service.
pub trait TaskStore {
    fn load(&self) -> Result<Vec<Task>, StoreError>;
    fn save(&self, tasks: &[Task]) -> Result<(), StoreError>;
}

/// [`TaskStore`] backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        load(&self.path)
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        save(&self.path, tasks)
    }
}

/// Reads the collection stored at `path`.
///
/// An absent file yields [`StoreError::NotFound`] so callers can decide
/// whether that means "empty collection".
pub fn load(path: &Path) -> Result<Vec<Task>, StoreError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
        _ => StoreError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let tasks: Vec<Task> = serde_json::from_slice(&bytes).map_err(|source| StoreError::Serialization {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), count = tasks.len(), "loaded tasks");
    Ok(tasks)
}

/// Overwrites `path` with the full collection.
///
/// The document is written to a uniquely named temporary file in the same
/// directory and then renamed over the target, so a reader sees either the
/// old or the new collection.
pub fn save(path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    let io_error = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_vec(tasks).map_err(|source| StoreError::Serialization {
        path: path.to_path_buf(),
        source,
    })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(io_error)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_error)?;
    tmp.write_all(&json).map_err(io_error)?;
    tmp.persist(path).map_err(|err| io_error(err.error))?;

    debug!(path = %path.display(), count = tasks.len(), "saved tasks");
    Ok(())
}

/// Removes the file at `path`. A missing file is not an error.
pub fn delete_file(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed task file");
            Ok(())
        }
        Err(source) if source.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
