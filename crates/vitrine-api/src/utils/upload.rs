//! Common utilities for file upload handlers

use axum::extract::Multipart;
use serde_json::{Map, Value};
use vitrine_core::AppError;

/// One file received in a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub data: Vec<u8>,
    pub original_filename: String,
    pub content_type: String,
}

/// Walk a multipart form, collecting files under `file_field` and plain text
/// fields into the document map.
///
/// File parts under any other field name are rejected; at most `max_files`
/// files are accepted. Text fields with the same name overwrite each other
/// (last wins). Presence of at least one file is the caller's check: an empty
/// result is not an error here.
pub async fn extract_upload_form(
    mut multipart: Multipart,
    file_field: &str,
    max_files: usize,
) -> Result<(Vec<UploadedFile>, Map<String, Value>), AppError> {
    let mut files: Vec<UploadedFile> = Vec::new();
    let mut fields: Map<String, Value> = Map::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field.file_name().is_some() {
            if field_name != file_field {
                return Err(AppError::InvalidInput(format!(
                    "Unexpected file field '{}'; files must be sent under '{}'",
                    field_name, file_field
                )));
            }
            if files.len() >= max_files {
                return Err(AppError::InvalidInput(format!(
                    "Too many files: maximum is {}",
                    max_files
                )));
            }

            let original_filename = field
                .file_name()
                .map(|s: &str| s.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            let content_type = field
                .content_type()
                .map(|s: &str| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

            files.push(UploadedFile {
                data: data.to_vec(),
                original_filename,
                content_type,
            });
        } else if !field_name.is_empty() {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read field: {}", e)))?;
            fields.insert(field_name, Value::String(text));
        }
    }

    Ok((files, fields))
}
