//! Upload validation
//!
//! File-level checks applied before anything touches disk or the database:
//! MIME allowlist, size cap, and presence checks. All failures are typed so
//! the api crate can map them to HTTP responses uniformly.

use thiserror::Error;

/// Content types accepted for image uploads. `image/jpg` is not a registered
/// MIME type but is sent by enough clients that it is accepted alongside the
/// canonical `image/jpeg`.
pub const ALLOWED_IMAGE_CONTENT_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/jpg"];

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("File size {size} bytes exceeds maximum of {max} bytes")]
    FileTooLarge { size: usize, max: usize },

    #[error("Invalid content type '{content_type}'; allowed: image/jpeg, image/png, image/jpg")]
    InvalidContentType { content_type: String },

    #[error("File is empty")]
    EmptyFile,

    #[error("No file provided under field '{0}'")]
    MissingFile(String),

    #[error("Too many files: {count} provided, maximum is {max}")]
    TooManyFiles { count: usize, max: usize },

    #[error("Image list must not be empty")]
    EmptyImageList,

    #[error("Unsupported category '{0}'")]
    UnsupportedCategory(String),
}

/// Normalize a MIME type by stripping parameters
/// (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Validate a content type against the image allowlist. Compares the
/// normalized MIME type only, so parameters cannot bypass the check.
pub fn validate_image_content_type(content_type: &str) -> Result<(), ValidationError> {
    let normalized = normalize_mime_type(content_type).to_lowercase();
    if !ALLOWED_IMAGE_CONTENT_TYPES
        .iter()
        .any(|ct| normalized == *ct)
    {
        return Err(ValidationError::InvalidContentType {
            content_type: content_type.to_string(),
        });
    }
    Ok(())
}

/// Validate file size against the configured maximum. Empty files are
/// rejected outright.
pub fn validate_file_size(size: usize, max: usize) -> Result<(), ValidationError> {
    if size == 0 {
        return Err(ValidationError::EmptyFile);
    }
    if size > max {
        return Err(ValidationError::FileTooLarge { size, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_and_png_accepted() {
        assert!(validate_image_content_type("image/jpeg").is_ok());
        assert!(validate_image_content_type("image/png").is_ok());
        assert!(validate_image_content_type("image/jpg").is_ok());
    }

    #[test]
    fn test_gif_rejected() {
        let err = validate_image_content_type("image/gif").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidContentType { .. }));
    }

    #[test]
    fn test_content_type_parameters_stripped() {
        assert!(validate_image_content_type("image/png; charset=utf-8").is_ok());
        assert!(validate_image_content_type("IMAGE/JPEG").is_ok());
    }

    #[test]
    fn test_parameter_cannot_smuggle_type() {
        assert!(validate_image_content_type("image/gif; fake=image/png").is_err());
    }

    #[test]
    fn test_oversized_file_rejected() {
        let max = 40 * 1024 * 1024;
        let err = validate_file_size(max + 1, max).unwrap_err();
        assert!(matches!(err, ValidationError::FileTooLarge { .. }));
        assert!(validate_file_size(max, max).is_ok());
    }

    #[test]
    fn test_empty_file_rejected() {
        assert!(matches!(
            validate_file_size(0, 1024),
            Err(ValidationError::EmptyFile)
        ));
    }
}
