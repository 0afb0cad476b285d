//! # Recent Work Gallery
//!
//! Photos are whatever image files sit in the gallery folder; adding a job
//! to the page means dropping a file in, no code change.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::{LandscapeError, LandscapeResult};

/// Image extensions picked up by the gallery (compared case-insensitively)
pub const GALLERY_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Returns true if the path has a gallery image extension
pub fn is_gallery_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| GALLERY_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// List the images directly inside `dir`, sorted by path.
///
/// A missing folder is an empty gallery. Subfolders are not searched.
pub fn collect_images(dir: &Path) -> LandscapeResult<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "gallery folder not found");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(LandscapeError::file_error("read_dir", dir.display().to_string(), e.to_string()));
        }
    };

    let mut images = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| LandscapeError::file_error("read_dir", dir.display().to_string(), e.to_string()))?;
        let path = entry.path();
        if path.is_file() && is_gallery_image(&path) {
            images.push(path);
        }
    }
    images.sort();
    tracing::debug!(dir = %dir.display(), count = images.len(), "collected gallery images");
    Ok(images)
}
