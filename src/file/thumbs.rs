//! Thumbnail variant discovery.
//!
//! Thumbnail variants of a primary file live under the path convention
//! `thumbs/<dir>/<kind>/<variant-subpath>/<file-name>`, where kind is one of
//! `fit` or `resize` and the variant subpath identifies the transform used
//! to produce the variant (e.g. `150x150`). Variants are created by the
//! image pipeline; this module only locates the ones that currently exist.

use crate::storage::StorageAdapter;
use crate::Result;

use super::join_path;

/// Kind of thumbnail transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbKind {
    /// Cropped to fill the target dimensions.
    Fit,
    /// Resized to fit within the target dimensions.
    Resize,
}

impl ThumbKind {
    /// All thumbnail kinds, in discovery order.
    pub const ALL: [ThumbKind; 2] = [ThumbKind::Fit, ThumbKind::Resize];

    /// Path segment for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ThumbKind::Fit => "fit",
            ThumbKind::Resize => "resize",
        }
    }
}

impl std::fmt::Display for ThumbKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discovered thumbnail variant of a primary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbVariant {
    /// Full storage path of the variant
    /// (e.g. `thumbs/images/fit/150x150/photo.jpg`).
    pub full_path: String,
    /// Containing directory (e.g. `thumbs/images/fit/150x150`).
    pub dir_name: String,
    /// File name, always equal to the primary file's name.
    pub file_name: String,
    /// Reconstructed `<kind>/<variant-subpath>` identifier
    /// (e.g. `fit/150x150`).
    pub variant: String,
}

/// Test whether a listed storage path is a thumbnail variant of the given
/// file name for the given kind.
///
/// The path must start with `thumbs/`, contain a `<kind>/` segment, and end
/// with `/<file_name>`; the variant subpath is everything between the first
/// `<kind>/` occurrence and the trailing file name. A file with the same
/// name but a different structure under `thumbs/` does not match. A variant
/// subpath containing further `/` separators is accepted as-is.
pub fn match_variant(path: &str, kind: ThumbKind, file_name: &str) -> Option<ThumbVariant> {
    let rest = path.strip_prefix("thumbs/")?;

    let marker = format!("{kind}/");
    let idx = rest.find(&marker)?;
    let after = &rest[idx + marker.len()..];

    let suffix = format!("/{file_name}");
    let subpath = after.strip_suffix(suffix.as_str())?;

    Some(ThumbVariant {
        full_path: path.to_string(),
        dir_name: path[..path.len() - suffix.len()].to_string(),
        file_name: file_name.to_string(),
        variant: format!("{kind}/{subpath}"),
    })
}

/// Root directory of one thumbnail kind for a primary directory.
fn kind_root(dir: &str, kind: ThumbKind) -> String {
    join_path(&join_path("thumbs", dir), kind.as_str())
}

/// Find all existing thumbnail variants for a primary file.
///
/// The set is derived fresh from storage on every call; nothing is cached.
/// Returns an empty set when no thumbs subtree exists for the directory.
/// No ordering is guaranteed.
pub fn find_thumbs(
    storage: &dyn StorageAdapter,
    dir: &str,
    file_name: &str,
) -> Result<Vec<ThumbVariant>> {
    let mut variants = Vec::new();

    for kind in ThumbKind::ALL {
        let root = kind_root(dir, kind);
        if !storage.exists(&root) {
            continue;
        }
        for path in storage.list_files_recursive(&root)? {
            if let Some(variant) = match_variant(&path, kind, file_name) {
                variants.push(variant);
            }
        }
    }

    Ok(variants)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_basic_variant() {
        let variant =
            match_variant("thumbs/images/fit/150x150/photo.jpg", ThumbKind::Fit, "photo.jpg")
                .unwrap();

        assert_eq!(variant.full_path, "thumbs/images/fit/150x150/photo.jpg");
        assert_eq!(variant.dir_name, "thumbs/images/fit/150x150");
        assert_eq!(variant.file_name, "photo.jpg");
        assert_eq!(variant.variant, "fit/150x150");
    }

    #[test]
    fn test_match_resize_kind() {
        let variant = match_variant(
            "thumbs/images/resize/300x300/photo.jpg",
            ThumbKind::Resize,
            "photo.jpg",
        )
        .unwrap();

        assert_eq!(variant.variant, "resize/300x300");
    }

    #[test]
    fn test_match_root_level_file() {
        // Primary file at storage root: thumbs tree has no directory segment.
        let variant =
            match_variant("thumbs/fit/150x150/photo.jpg", ThumbKind::Fit, "photo.jpg").unwrap();

        assert_eq!(variant.variant, "fit/150x150");
        assert_eq!(variant.dir_name, "thumbs/fit/150x150");
    }

    #[test]
    fn test_no_match_different_name() {
        assert!(
            match_variant("thumbs/images/fit/150x150/other.jpg", ThumbKind::Fit, "photo.jpg")
                .is_none()
        );
    }

    #[test]
    fn test_no_match_name_as_suffix_only() {
        // "my_photo.jpg" ends with "photo.jpg" as a substring but not as a
        // whole path segment.
        assert!(match_variant(
            "thumbs/images/fit/150x150/my_photo.jpg",
            ThumbKind::Fit,
            "photo.jpg"
        )
        .is_none());
    }

    #[test]
    fn test_no_match_wrong_kind() {
        assert!(match_variant(
            "thumbs/images/resize/150x150/photo.jpg",
            ThumbKind::Fit,
            "photo.jpg"
        )
        .is_none());
    }

    #[test]
    fn test_no_match_without_variant_subpath() {
        // The convention requires a variant subpath segment between the kind
        // and the file name.
        assert!(match_variant("thumbs/images/fit/photo.jpg", ThumbKind::Fit, "photo.jpg").is_none());
    }

    #[test]
    fn test_no_match_outside_thumbs_tree() {
        assert!(match_variant("images/fit/150x150/photo.jpg", ThumbKind::Fit, "photo.jpg").is_none());
    }

    #[test]
    fn test_match_nested_variant_subpath() {
        // A variant subpath with further separators is captured as-is.
        let variant = match_variant(
            "thumbs/images/fit/150x150/webp/photo.jpg",
            ThumbKind::Fit,
            "photo.jpg",
        )
        .unwrap();

        assert_eq!(variant.variant, "fit/150x150/webp");
    }

    #[test]
    fn test_kind_root() {
        assert_eq!(kind_root("images", ThumbKind::Fit), "thumbs/images/fit");
        assert_eq!(kind_root("", ThumbKind::Resize), "thumbs/resize");
        assert_eq!(
            kind_root("images/2024", ThumbKind::Fit),
            "thumbs/images/2024/fit"
        );
    }
}
