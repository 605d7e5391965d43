//! Storage backend abstraction for mediaman.
//!
//! All media paths handled here are storage-relative, forward-slash keys
//! (e.g. `images/photo.jpg`). The [`StorageAdapter`] trait is the capability
//! the file handle operates against; [`LocalStorage`] is the disk-backed
//! implementation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{MediaError, Result};

/// Key-addressed blob store consumed by the file lifecycle operations.
///
/// Errors from the backend propagate unmodified; there is no retry policy.
pub trait StorageAdapter: Send + Sync {
    /// Check whether a path exists in storage.
    fn exists(&self, path: &str) -> bool;

    /// List all files under a directory, recursively.
    ///
    /// Returned paths are storage-relative with forward slashes. Listing a
    /// nonexistent directory is a `NotFound` error.
    fn list_files_recursive(&self, path: &str) -> Result<Vec<String>>;

    /// Move a file, creating missing destination parent directories.
    fn move_file(&self, src: &str, dst: &str) -> Result<()>;

    /// Delete a file. A missing path is a `NotFound` error.
    fn delete(&self, path: &str) -> Result<()>;

    /// Resolve a storage-relative path to an absolute filesystem path.
    fn resolve_full_path(&self, path: &str) -> PathBuf;

    /// Public URL under which the file is served.
    fn public_url(&self, path: &str) -> String;
}

/// Disk-backed storage rooted at a base directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
    public_base: String,
}

impl LocalStorage {
    /// Create a new LocalStorage with the given root directory and public
    /// URL prefix. The root directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;

        Ok(Self {
            root,
            public_base: public_base.into().trim_end_matches('/').to_string(),
        })
    }

    /// Get the root directory of this storage.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

impl StorageAdapter for LocalStorage {
    fn exists(&self, path: &str) -> bool {
        self.full(path).exists()
    }

    fn list_files_recursive(&self, path: &str) -> Result<Vec<String>> {
        let dir = self.full(path);
        if !dir.is_dir() {
            return Err(MediaError::NotFound(format!("directory {path}")));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir) {
            let entry = entry.map_err(|e| MediaError::Storage(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(&self.root)
                .map_err(|e| MediaError::Storage(e.to_string()))?;
            files.push(rel.to_string_lossy().replace('\\', "/"));
        }

        Ok(files)
    }

    fn move_file(&self, src: &str, dst: &str) -> Result<()> {
        let src_path = self.full(src);
        let dst_path = self.full(dst);

        if let Some(parent) = dst_path.parent() {
            fs::create_dir_all(parent)?;
        }

        match fs::rename(&src_path, &dst_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(MediaError::NotFound(format!("file {src}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&self, path: &str) -> Result<()> {
        match fs::remove_file(self.full(path)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(MediaError::NotFound(format!("file {path}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn resolve_full_path(&self, path: &str) -> PathBuf {
        self.full(path)
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.public_base, path.trim_start_matches('/'))
    }
}
