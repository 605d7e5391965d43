//! Lazy generation of the reserved auto thumbnail.

use std::fs;
use std::io::BufWriter;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use tracing::debug;

use crate::Result;

use super::handle::MediaFile;
use super::{IMAGE_EXTENSIONS, THUMB_QUALITY, THUMB_SIZE};

/// Generate the auto thumbnail for a primary file if it is missing.
///
/// Returns whether an encode was performed. No-op when the file is itself
/// an auto thumbnail, when its extension is not a supported image format,
/// or when the thumbnail already exists. A source that fails to decode
/// surfaces as an image error; no fallback thumbnail is produced.
pub fn generate_auto_thumb(file: &MediaFile<'_>) -> Result<bool> {
    if file.is_auto_thumb() {
        return Ok(false);
    }

    let ext = file.extension().to_ascii_lowercase();
    if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Ok(false);
    }

    let dest = file.auto_thumb_path();
    if file.storage().exists(&dest) {
        return Ok(false);
    }

    let source = file.storage().resolve_full_path(file.path());
    let img = image::open(&source)?;
    let thumb = img.resize_to_fill(THUMB_SIZE, THUMB_SIZE, FilterType::Lanczos3);

    let dest_full = file.storage().resolve_full_path(&dest);
    if let Some(parent) = dest_full.parent() {
        fs::create_dir_all(parent)?;
    }

    match ext.as_str() {
        "jpg" | "jpeg" => {
            let writer = BufWriter::new(fs::File::create(&dest_full)?);
            let encoder = JpegEncoder::new_with_quality(writer, THUMB_QUALITY);
            thumb.write_with_encoder(encoder)?;
        }
        _ => thumb.save(&dest_full)?,
    }

    debug!(path = %file.path(), thumb = %dest, "generated auto thumbnail");
    Ok(true)
}
