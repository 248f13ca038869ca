//! File store capability backing the `/files` routes.
//!
//! Handlers never touch the filesystem directly; they go through the
//! [`FileStore`] trait and match its failure kinds exhaustively.

use std::io;
use std::path::{Path, PathBuf};

/// Why a store operation failed.
///
/// Handlers collapse both kinds into a uniform 404 toward the client; the
/// distinction exists for logging only.
#[derive(Debug)]
pub enum StoreError {
    /// No entry under the requested name.
    NotFound,
    /// The entry could not be read or written.
    Io(io::Error),
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound
        } else {
            StoreError::Io(err)
        }
    }
}

/// A path-keyed byte store supporting whole-entry reads and writes.
pub trait FileStore {
    fn read(&self, name: &str) -> Result<Vec<u8>, StoreError>;
    fn write(&self, name: &str, contents: &[u8]) -> Result<(), StoreError>;
}

/// Byte store backed by a directory on the local filesystem.
///
/// Names are resolved relative to the configured root; writes create or
/// overwrite the named file.
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileStore for DirStore {
    fn read(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        Ok(std::fs::read(self.root.join(name))?)
    }

    fn write(&self, name: &str, contents: &[u8]) -> Result<(), StoreError> {
        Ok(std::fs::write(self.root.join(name), contents)?)
    }
}
