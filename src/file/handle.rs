//! Managed file handle and lifecycle operations.

use std::path::Path;

use tracing::debug;

use crate::config::DisplayConfig;
use crate::storage::StorageAdapter;
use crate::{MediaError, Result};

use super::presenter::{self, FileRecord};
use super::thumbnail;
use super::thumbs::{find_thumbs, ThumbVariant};
use super::{join_path, THUMB_PREFIX};

/// Handle on a primary file in the media tree.
///
/// Constructed from a storage-relative path; path components are resolved
/// once at construction. Each lifecycle operation re-derives the current
/// thumbnail set on demand, so a handle stays valid only for one logical
/// operation (request-scoped use). Operations are sequential and
/// non-transactional: a partial failure leaves no rollback.
pub struct MediaFile<'a> {
    storage: &'a dyn StorageAdapter,
    path: String,
    dir: String,
    name: String,
    extension: String,
}

impl<'a> MediaFile<'a> {
    /// Create a handle for the file at the given storage-relative path.
    ///
    /// Leading and trailing `/` are stripped; the path is decomposed into
    /// base directory (empty for the storage root), file name and extension.
    pub fn new(storage: &'a dyn StorageAdapter, path: impl Into<String>) -> Self {
        let path = path.into().trim_matches('/').to_string();

        let (dir, name) = match path.rsplit_once('/') {
            Some((dir, name)) => (dir.to_string(), name.to_string()),
            None => (String::new(), path.clone()),
        };

        let extension = Path::new(&name)
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();

        Self {
            storage,
            path,
            dir,
            name,
            extension,
        }
    }

    /// Storage-relative path of the primary file.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Base directory, empty for the storage root.
    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// File name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File extension without the dot, empty when the name has none.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub(crate) fn storage(&self) -> &dyn StorageAdapter {
        self.storage
    }

    /// Path of the reserved auto thumbnail, a sibling named
    /// `thumb_<file-name>`.
    pub fn auto_thumb_path(&self) -> String {
        join_path(&self.dir, &format!("{THUMB_PREFIX}{}", self.name))
    }

    /// Whether this file is itself an auto thumbnail. Such a file never
    /// gets an auto thumbnail of its own (prevents thumbnail chains).
    pub fn is_auto_thumb(&self) -> bool {
        self.name.starts_with(THUMB_PREFIX)
    }

    fn has_auto_thumb(&self) -> bool {
        self.storage.exists(&self.auto_thumb_path())
    }

    /// All thumbnail variants currently stored for this file.
    pub fn thumbs(&self) -> Result<Vec<ThumbVariant>> {
        find_thumbs(self.storage, &self.dir, &self.name)
    }

    /// Rename the file and every associated thumbnail.
    ///
    /// Thumbnail variants move first, then the primary file, then the auto
    /// thumbnail. The auto thumbnail is probed at its pre-move location, so
    /// the primary move must not reorder ahead of the probe.
    pub fn rename(&self, new_name: &str) -> Result<()> {
        if new_name.is_empty() || new_name.contains('/') {
            return Err(MediaError::Validation(format!(
                "invalid file name '{new_name}'"
            )));
        }

        for thumb in self.thumbs()? {
            self.storage
                .move_file(&thumb.full_path, &format!("{}/{new_name}", thumb.dir_name))?;
        }

        self.storage
            .move_file(&self.path, &join_path(&self.dir, new_name))?;

        if self.has_auto_thumb() {
            self.storage.move_file(
                &self.auto_thumb_path(),
                &join_path(&self.dir, &format!("{THUMB_PREFIX}{new_name}")),
            )?;
        }

        debug!(path = %self.path, new_name, "renamed file");
        Ok(())
    }

    /// Delete the file and every associated thumbnail.
    ///
    /// Thumbnails are deleted before the primary file so a failure partway
    /// cannot leave variants orphaned behind a missing primary.
    pub fn delete(&self) -> Result<()> {
        for thumb in self.thumbs()? {
            self.storage.delete(&thumb.full_path)?;
        }

        if self.has_auto_thumb() {
            self.storage.delete(&self.auto_thumb_path())?;
        }

        self.storage.delete(&self.path)?;

        debug!(path = %self.path, "deleted file");
        Ok(())
    }

    /// Move the file and every associated thumbnail to another directory.
    ///
    /// The destination gets its own parallel `thumbs/` tree: each variant
    /// keeps its `<kind>/<variant-subpath>` identifier under the new
    /// directory.
    pub fn move_to(&self, destination: &str) -> Result<()> {
        let dest = destination.trim_matches('/');

        for thumb in self.thumbs()? {
            let target = join_path(&join_path("thumbs", dest), &thumb.variant);
            self.storage
                .move_file(&thumb.full_path, &format!("{target}/{}", thumb.file_name))?;
        }

        self.storage
            .move_file(&self.path, &join_path(dest, &self.name))?;

        if self.has_auto_thumb() {
            self.storage.move_file(
                &self.auto_thumb_path(),
                &join_path(dest, &format!("{THUMB_PREFIX}{}", self.name)),
            )?;
        }

        debug!(path = %self.path, dest, "moved file");
        Ok(())
    }

    /// Generate the auto thumbnail if this file is an image and the
    /// thumbnail does not already exist. Returns whether an encode ran.
    pub fn generate_thumb(&self) -> Result<bool> {
        thumbnail::generate_auto_thumb(self)
    }

    /// Produce the display record for this file.
    pub fn to_record(&self, config: &DisplayConfig) -> Result<FileRecord> {
        presenter::present(self, config)
    }
}
