//! mediaman - backend core for a web media manager.
//!
//! A managed [`MediaFile`] handle performs filesystem operations (rename,
//! move, delete) on a primary asset while keeping its derived thumbnail set
//! in sync, computes display metadata for the listing UI, and lazily
//! generates a reserved auto thumbnail for image files.
//!
//! Storage is abstracted behind the [`StorageAdapter`] capability;
//! [`LocalStorage`] is the disk-backed implementation. Handles are
//! request-scoped: construct one, run one logical operation, discard it.

pub mod config;
pub mod datetime;
pub mod error;
pub mod file;
pub mod logging;
pub mod storage;

pub use config::{Config, DisplayConfig, FileTypeRule, LoggingConfig, StorageConfig};
pub use error::{MediaError, Result};
pub use file::{
    detect_file_type, find_thumbs, generate_auto_thumb, human_size, match_variant, present,
    present_dir, FileRecord, MediaFile, ThumbKind, ThumbVariant, IMAGE_EXTENSIONS, THUMB_PREFIX,
    THUMB_QUALITY, THUMB_SIZE,
};
pub use storage::{LocalStorage, StorageAdapter};
