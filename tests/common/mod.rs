//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use walkdir::WalkDir;

use mediaman::{LocalStorage, StorageAdapter};

/// Create a disk-backed storage rooted in a fresh temp directory.
pub fn setup_storage() -> (TempDir, LocalStorage) {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path(), "/storage").unwrap();
    (temp_dir, storage)
}

/// Write a file into storage, creating parent directories.
pub fn seed(storage: &LocalStorage, path: &str, content: &[u8]) {
    let full = storage.resolve_full_path(path);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, content).unwrap();
}

/// Count regular files under the storage root.
pub fn count_files(root: &Path) -> usize {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}
