//! Generated filenames, storage keys, and public URLs.
//!
//! Key format: `uploads/{category}/{filename}`. Generated filenames are
//! `{millis-timestamp}-{sanitized-stem}{original-extension}`; the stem is
//! lowercased with whitespace runs collapsed to hyphens, the extension is kept
//! verbatim. Two uploads of the same name in the same millisecond collide;
//! the timestamp prefix is the only uniqueness mechanism.

use chrono::Utc;
use vitrine_core::models::Category;

use crate::traits::{StorageError, StorageResult};

/// Reject filenames that could escape the category directory.
pub fn validate_filename(filename: &str) -> StorageResult<()> {
    if filename.is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains("..")
    {
        return Err(StorageError::InvalidFilename(filename.to_string()));
    }
    Ok(())
}

/// Lowercase a filename stem and collapse whitespace runs to single hyphens.
fn sanitize_stem(stem: &str) -> String {
    let sanitized = stem
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");

    if sanitized.is_empty() {
        "file".to_string()
    } else {
        sanitized
    }
}

/// Build the generated filename for an uploaded file:
/// `{millis}-{sanitized-stem}{extension}`, extension verbatim.
pub fn generated_filename(original_filename: &str) -> String {
    let (stem, extension) = match original_filename.rfind('.') {
        Some(idx) if idx > 0 => original_filename.split_at(idx),
        _ => (original_filename, ""),
    };

    format!(
        "{}-{}{}",
        Utc::now().timestamp_millis(),
        sanitize_stem(stem),
        extension
    )
}

/// Storage key for a stored file: `uploads/{category}/{filename}`.
pub fn storage_key(category: Category, filename: &str) -> String {
    format!("uploads/{}/{}", category.upload_dir(), filename)
}

/// Public URL for a stored file: `{base}/uploads/{category}/{filename}`.
pub fn public_url(base_url: &str, category: Category, filename: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        storage_key(category, filename)
    )
}

/// Reduce an image reference (plain filename or full URL) to its basename.
pub fn basename(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_filename_sanitizes_stem_and_keeps_extension() {
        let name = generated_filename("My Photo.PNG");

        let (prefix, rest) = name.split_once('-').unwrap();
        assert!(!prefix.is_empty());
        assert!(prefix.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(rest, "my-photo.PNG");
    }

    #[test]
    fn test_generated_filename_collapses_whitespace_runs() {
        let name = generated_filename("a   b\tc.jpg");
        assert!(name.ends_with("-a-b-c.jpg"));
    }

    #[test]
    fn test_generated_filename_without_extension() {
        let name = generated_filename("Noext");
        assert!(name.ends_with("-noext"));
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_generated_filename_empty_stem() {
        let name = generated_filename(".png");
        assert!(name.ends_with("-file.png"));
    }

    #[test]
    fn test_validate_filename_rejects_traversal() {
        assert!(validate_filename("../etc/passwd").is_err());
        assert!(validate_filename("a/b.png").is_err());
        assert!(validate_filename("a\\b.png").is_err());
        assert!(validate_filename("").is_err());
        assert!(validate_filename("1712000000000-photo.png").is_ok());
    }

    #[test]
    fn test_public_url_composition() {
        let url = public_url("http://localhost:3000/", Category::Qna, "1-a.png");
        assert_eq!(url, "http://localhost:3000/uploads/qna/1-a.png");
    }

    #[test]
    fn test_basename_strips_url_prefix() {
        assert_eq!(
            basename("http://localhost:3000/uploads/products/1-a.png"),
            "1-a.png"
        );
        assert_eq!(basename("1-a.png"), "1-a.png");
    }
}
