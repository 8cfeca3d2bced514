//! Common utilities for file upload and retrieval handlers

use axum::extract::Multipart;
use notary_core::AppError;

/// Extract file data, filename, and content type from multipart form.
/// Only one field named "file" is accepted; multiple file fields are rejected.
pub async fn extract_multipart_file(
    mut multipart: Multipart,
) -> Result<(Vec<u8>, Option<String>, Option<String>), AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut filename: Option<String> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name == "file" {
            if file_data.is_some() {
                return Err(AppError::InvalidInput(
                    "Multiple file fields are not allowed; send exactly one field named 'file'"
                        .to_string(),
                ));
            }
            filename = field.file_name().map(|s: &str| s.to_string());
            content_type = field.content_type().map(|s: &str| s.to_string());

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

            file_data = Some(data.to_vec());
        }
    }

    let file_data =
        file_data.ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))?;

    Ok((file_data, filename, content_type))
}

/// Sanitize filename to prevent path traversal and invalid characters.
/// Returns an error if the filename contains path traversal attempts.
pub fn sanitize_filename(filename: &str) -> Result<String, AppError> {
    const MAX_FILENAME_LENGTH: usize = 255;

    let path = std::path::Path::new(filename);
    let filename_only = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    if filename_only.contains("..") {
        return Err(AppError::InvalidInput(
            "Filename contains invalid path traversal".to_string(),
        ));
    }

    let sanitized: String = filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim().is_empty() || sanitized.len() < 3 {
        return Ok("file".to_string());
    }

    Ok(sanitized)
}

/// Extension of `filename` as a dotted suffix, with a JPEG fallback for
/// extension-less uploads.
pub fn dotted_extension_or_default(filename: &str) -> String {
    std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_else(|| ".jpg".to_string())
}

/// Guess a Content-Type from the file extension. Files are stored without
/// recorded content types, so serving falls back to this mapping.
pub fn content_type_for(filename: &str) -> &'static str {
    let extension = filename
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_filename_rejects_path_traversal() {
        assert!(sanitize_filename("..").is_err());
        assert!(sanitize_filename("....").is_err());
    }

    #[test]
    fn sanitize_filename_keeps_only_final_component() {
        assert_eq!(sanitize_filename("/tmp/deed.png").unwrap(), "deed.png");
        assert_eq!(sanitize_filename("a/b/deed.png").unwrap(), "deed.png");
    }

    #[test]
    fn sanitize_filename_accepts_valid_names() {
        assert_eq!(sanitize_filename("image.png").unwrap(), "image.png");
        assert_eq!(sanitize_filename("my-file_1.jpg").unwrap(), "my-file_1.jpg");
    }

    #[test]
    fn dotted_extension_falls_back_to_jpg() {
        assert_eq!(dotted_extension_or_default("scan.PNG"), ".png");
        assert_eq!(dotted_extension_or_default("scan"), ".jpg");
    }

    #[test]
    fn content_type_is_guessed_from_extension() {
        assert_eq!(content_type_for("a.png"), "image/png");
        assert_eq!(content_type_for("a.JPG"), "image/jpeg");
        assert_eq!(content_type_for("doc.txt"), "text/plain; charset=utf-8");
        assert_eq!(content_type_for("mystery"), "application/octet-stream");
    }
}
