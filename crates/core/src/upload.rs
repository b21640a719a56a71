//! Upload validation rules shared by the upload handler and its tests.

use crate::error::CoreError;

/// Maximum accepted upload size: 5 MiB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Only images are accepted for upload.
pub const ALLOWED_MIME_PREFIX: &str = "image/";

/// Validate an incoming upload's declared MIME type and size.
///
/// Returns `CoreError::Validation` with a client-facing message when the
/// file is not an image or exceeds [`MAX_UPLOAD_BYTES`].
pub fn validate_upload(content_type: &str, size_bytes: usize) -> Result<(), CoreError> {
    if !content_type.starts_with(ALLOWED_MIME_PREFIX) {
        return Err(CoreError::Validation("File must be an image".to_string()));
    }
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(
            "File size must be less than 5MB".to_string(),
        ));
    }
    Ok(())
}

/// Extract the lowercase extension from a filename, if any.
///
/// `"photo.JPG"` -> `Some("jpg")`, `"README"` -> `None`.
pub fn file_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
