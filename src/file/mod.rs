//! Managed media file module.
//!
//! This module provides the managed file abstraction of the media manager:
//! - Lifecycle operations (rename, move, delete) that keep the derived
//!   thumbnail set in sync with the primary file
//! - Thumbnail variant discovery under the `thumbs/` path convention
//! - Display metadata records for the listing UI
//! - Lazy generation of the reserved auto thumbnail

mod handle;
mod presenter;
mod thumbnail;
mod thumbs;

pub use handle::MediaFile;
pub use presenter::{
    detect_file_type, human_size, icon_for, matches_extension, present, present_dir, FileRecord,
    FALLBACK_TYPE,
};
pub use thumbnail::generate_auto_thumb;
pub use thumbs::{find_thumbs, match_variant, ThumbKind, ThumbVariant};

/// Name prefix of the reserved auto thumbnail.
pub const THUMB_PREFIX: &str = "thumb_";

/// Edge length of the auto thumbnail (square, cropped to fill).
pub const THUMB_SIZE: u32 = 150;

/// JPEG quality used when encoding the auto thumbnail.
pub const THUMB_QUALITY: u8 = 75;

/// Extensions eligible for auto thumbnail generation (lowercase).
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "gif", "png", "bmp", "tif"];

/// Join two storage path segments, tolerating an empty side.
pub(crate) fn join_path(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else if name.is_empty() {
        dir.to_string()
    } else {
        format!("{dir}/{name}")
    }
}
