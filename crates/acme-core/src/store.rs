//! # Record Repositories
//!
//! A [`Repository`] holds one ordered sequence of records and supports two
//! operations: read it all, or replace it all. The catalog and the call-log
//! recorder are written against the trait, so the medium behind them can
//! change without touching either.
//!
//! - [`JsonFileStore`] keeps the sequence as a JSON array in one file. A
//!   missing file reads as an empty sequence. Writes go to a temporary file
//!   in the same directory which is then renamed over the target, so readers
//!   never observe a half-written array.
//! - [`MemoryStore`] keeps the sequence in process memory.

use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

/// Ordered, whole-sequence storage for records of type `T`.
pub trait Repository<T>: Send + Sync {
    /// Read the full sequence in stored order.
    fn load(&self) -> Result<Vec<T>, StorageError>;

    /// Replace the stored sequence with `records`.
    fn save(&self, records: &[T]) -> Result<(), StorageError>;
}

// ── JSON File ───────────────────────────────────────────────────────────────

/// A JSON array on disk.
#[derive(Debug)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonFileStore<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            _records: PhantomData,
        }
    }
}

impl<T> JsonFileStore<T> {
    /// Create a store backed by the file at `path`. The file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _records: PhantomData,
        }
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl<T> Repository<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Vec<T>, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, records: &[T]) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        {
            let mut writer = BufWriter::new(&mut staged);
            serde_json::to_writer_pretty(&mut writer, records)?;
            writer.flush().map_err(|e| self.io_error(e))?;
        }
        staged
            .as_file()
            .sync_all()
            .map_err(|e| self.io_error(e))?;
        staged
            .persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;
        Ok(())
    }
}

// ── In-Memory ───────────────────────────────────────────────────────────────

/// Thread-safe, cloneable in-memory sequence. Clones share the same data.
#[derive(Debug)]
pub struct MemoryStore<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T> MemoryStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store pre-populated with `records`.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Repository<T> for MemoryStore<T>
where
    T: Clone + Send + Sync,
{
    fn load(&self) -> Result<Vec<T>, StorageError> {
        Ok(self.records.read().clone())
    }

    fn save(&self, records: &[T]) -> Result<(), StorageError> {
        *self.records.write() = records.to_vec();
        Ok(())
    }
}
