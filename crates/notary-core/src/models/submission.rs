use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// An uploaded document submission.
///
/// Created once per upload request and never updated; the service keeps no
/// index of submissions beyond the files written under the upload directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    /// Filename as supplied by the client, reduced to its final path component.
    pub original_filename: String,
    /// Name the raw upload was persisted under (`{id}{ext}`).
    pub stored_filename: String,
    pub ocr_text: String,
    pub faces_found: usize,
    /// Name the QR image was persisted under (`{id}_qr.png`).
    pub qr_filename: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Metadata encoded into the QR image for an upload. Kept minimal so the
/// payload fits comfortably in a QR code at the configured module size.
#[derive(Debug, Serialize)]
pub struct UploadQrPayload<'a> {
    pub id: Uuid,
    pub filename: &'a str,
    pub faces: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub file_id: Uuid,
    pub filename: String,
    pub ocr_text: String,
    pub faces_found: usize,
    pub qr_url: String,
}

impl UploadResponse {
    pub fn new(submission: Submission, qr_url: String) -> Self {
        UploadResponse {
            file_id: submission.id,
            filename: submission.original_filename,
            ocr_text: submission.ocr_text,
            faces_found: submission.faces_found,
            qr_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_from_submission() {
        let id = Uuid::new_v4();
        let submission = Submission {
            id,
            original_filename: "deed.png".to_string(),
            stored_filename: format!("{}.png", id),
            ocr_text: "SALE DEED".to_string(),
            faces_found: 2,
            qr_filename: format!("{}_qr.png", id),
            uploaded_at: Utc::now(),
        };

        let qr_url = format!("http://127.0.0.1:8000/file/{}_qr.png", id);
        let response = UploadResponse::new(submission, qr_url.clone());

        assert_eq!(response.file_id, id);
        assert_eq!(response.filename, "deed.png");
        assert_eq!(response.ocr_text, "SALE DEED");
        assert_eq!(response.faces_found, 2);
        assert_eq!(response.qr_url, qr_url);
    }

    #[test]
    fn test_upload_qr_payload_field_order() {
        let id = Uuid::new_v4();
        let payload = UploadQrPayload {
            id,
            filename: "deed.png",
            faces: 1,
        };
        let json = serde_json::to_string(&payload).expect("serialize");
        assert_eq!(
            json,
            format!("{{\"id\":\"{}\",\"filename\":\"deed.png\",\"faces\":1}}", id)
        );
    }
}
