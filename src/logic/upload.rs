//! Client-side image validation
//!
//! Files are checked before staging: the type must indicate an image
//! (matching the upload types the backend accepts) and the size must
//! not exceed the backend's 16 MiB request limit. Violations abort the
//! staging with no network call.

use std::fmt;
use std::path::Path;

pub const MAX_IMAGE_BYTES: u64 = 16 * 1024 * 1024;

const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    NotAnImage,
    TooLarge { size: u64 },
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::NotAnImage => write!(f, "Please select an image file (png/jpg/jpeg/gif)"),
            UploadError::TooLarge { size } => write!(
                f,
                "File size must be less than 16MB (got {:.1} MB)",
                *size as f64 / (1024.0 * 1024.0)
            ),
        }
    }
}

impl std::error::Error for UploadError {}

/// Whether the file extension indicates a supported image type.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Validate a candidate upload. Type is checked before size so a huge
/// non-image reports the more actionable error.
pub fn validate_image(path: &Path, size: u64) -> Result<(), UploadError> {
    if !is_image_file(path) {
        return Err(UploadError::NotAnImage);
    }
    if size > MAX_IMAGE_BYTES {
        return Err(UploadError::TooLarge { size });
    }
    Ok(())
}

/// MIME type for the multipart upload, derived from the extension.
pub fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    }
}
