//! Display metadata for the listing UI.
//!
//! Pure read path: nothing here touches the thumbnail set. The wire field
//! names of [`FileRecord`] are a contract with the listing frontend and
//! must not change.

use std::fs;
use std::io;
use std::time::UNIX_EPOCH;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::DisplayConfig;
use crate::datetime::format_utc_datetime;
use crate::{MediaError, Result};

use super::handle::MediaFile;

/// Fallback type for extensions matching no configured rule.
pub const FALLBACK_TYPE: &str = "file";

/// Display record for one entry of a media listing.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    /// Reserved, always empty.
    pub download: String,
    /// Icon identifier.
    pub icon: String,
    /// Detected file type.
    #[serde(rename = "type")]
    pub file_type: String,
    /// File or directory name.
    pub name: String,
    /// Whether the entry is a directory.
    #[serde(rename = "isDir")]
    pub is_dir: bool,
    /// Human-readable size.
    pub size: String,
    /// Listing link (`<route_path>?path=...`).
    pub link: String,
    /// Public URL with a cache-busting timestamp query.
    pub url: String,
    /// Formatted modification time.
    pub time: String,
    /// Last-modified Unix timestamp.
    pub ts: i64,
}

/// Test an extension against a pipe-separated alternation pattern,
/// anchored and case-insensitive (`jpg|jpeg` matches `JPG`, not `jpgx`).
pub fn matches_extension(pattern: &str, extension: &str) -> bool {
    pattern
        .split('|')
        .any(|alt| alt.eq_ignore_ascii_case(extension))
}

/// Detect the file type for an extension: the first configured rule whose
/// pattern matches wins, falling back to [`FALLBACK_TYPE`].
pub fn detect_file_type<'a>(config: &'a DisplayConfig, extension: &str) -> &'a str {
    for rule in &config.filetypes {
        if matches_extension(&rule.pattern, extension) {
            return &rule.name;
        }
    }
    FALLBACK_TYPE
}

/// Icon identifier for a detected type.
///
/// Every detectable type must be mapped; a missing entry is a configuration
/// error, not a recoverable condition.
pub fn icon_for<'a>(config: &'a DisplayConfig, file_type: &str) -> Result<&'a str> {
    config
        .icons
        .get(file_type)
        .map(String::as_str)
        .ok_or_else(|| MediaError::Config(format!("no icon mapped for type '{file_type}'")))
}

/// Render a byte count as a human-readable size.
///
/// Divides by 1024 while at least one whole unit remains, over
/// `B KB MB GB TB PB`, rounding to two decimals.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{} {}", (value * 100.0).round() / 100.0, UNITS[unit])
}

/// Last metadata-change time of the file (ctime on Unix, modification time
/// elsewhere).
fn changed_time(meta: &fs::Metadata) -> Result<DateTime<Utc>> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        Ok(DateTime::<Utc>::from_timestamp(meta.ctime(), 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH))
    }
    #[cfg(not(unix))]
    {
        Ok(DateTime::<Utc>::from(meta.modified()?))
    }
}

/// Produce the display record for a primary file.
pub fn present(file: &MediaFile<'_>, config: &DisplayConfig) -> Result<FileRecord> {
    let full = file.storage().resolve_full_path(file.path());
    let meta = match fs::metadata(&full) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(MediaError::NotFound(format!("file {}", file.path())));
        }
        Err(e) => return Err(e.into()),
    };

    let ts = meta
        .modified()?
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);

    let file_type = detect_file_type(config, file.extension());
    let icon = icon_for(config, file_type)?;

    Ok(FileRecord {
        download: String::new(),
        icon: icon.to_string(),
        file_type: file_type.to_string(),
        name: file.name().to_string(),
        is_dir: false,
        size: human_size(meta.len()),
        link: format!(
            "{}?path={}",
            config.route_path,
            urlencoding::encode(file.path())
        ),
        url: format!("{}?{ts}", file.storage().public_url(file.path())),
        time: format_utc_datetime(&changed_time(&meta)?, &config.timezone, &config.date_format),
        ts,
    })
}

/// Produce the display record for a directory entry of a listing.
///
/// Directories carry no size, URL or timestamps; the frontend only needs
/// the name, the icon and the navigation link.
pub fn present_dir(name: &str, path: &str, config: &DisplayConfig) -> Result<FileRecord> {
    let icon = icon_for(config, "folder")?;

    Ok(FileRecord {
        download: String::new(),
        icon: icon.to_string(),
        file_type: "dir".to_string(),
        name: name.to_string(),
        is_dir: true,
        size: String::new(),
        link: format!(
            "{}?path={}",
            config.route_path,
            urlencoding::encode(path.trim_matches('/'))
        ),
        url: String::new(),
        time: String::new(),
        ts: 0,
    })
}
