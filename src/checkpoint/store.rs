//! Durable byte stores for stack checkpoints.

use crate::checkpoint::error::PersistenceError;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Durable key-value slot holding one checkpoint.
///
/// `write` must replace the previous bytes atomically: a reader sees either
/// the old checkpoint or the new one, never a mix.
pub trait StackStore: Send + Sync {
    /// Stored bytes, or `None` when nothing was ever written.
    fn read(&self) -> Result<Option<Vec<u8>>, PersistenceError>;

    fn write(&self, bytes: &[u8]) -> Result<(), PersistenceError>;
}

/// Atomically replace `path` with `content`.
///
/// 1. Write to a `.tmp` sibling
/// 2. `sync_all` to flush it to disk
/// 3. Rename over the final path
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(&temp_path)?;
    file.write_all(content)?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Checkpoint kept in a single file, replaced by atomic rename.
#[derive(Clone, Debug)]
pub struct FileStackStore {
    path: PathBuf,
}

impl FileStackStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StackStore for FileStackStore {
    fn read(&self) -> Result<Option<Vec<u8>>, PersistenceError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, bytes: &[u8]) -> Result<(), PersistenceError> {
        atomic_write(&self.path, bytes)?;
        Ok(())
    }
}

/// Checkpoint kept in memory; useful for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryStackStore {
    slot: Mutex<Option<Vec<u8>>>,
}

impl MemoryStackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store bytes verbatim, bypassing checkpoint encoding.
    pub fn set_raw(&self, bytes: Vec<u8>) {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(bytes);
    }
}

impl StackStore for MemoryStackStore {
    fn read(&self) -> Result<Option<Vec<u8>>, PersistenceError> {
        Ok(self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn write(&self, bytes: &[u8]) -> Result<(), PersistenceError> {
        self.set_raw(bytes.to_vec());
        Ok(())
    }
}

impl<T: StackStore + ?Sized> StackStore for std::sync::Arc<T> {
    fn read(&self) -> Result<Option<Vec<u8>>, PersistenceError> {
        (**self).read()
    }

    fn write(&self, bytes: &[u8]) -> Result<(), PersistenceError> {
        (**self).write(bytes)
    }
}
