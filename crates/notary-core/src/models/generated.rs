use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// The two document templates the generator knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    SaleDeed,
    Will,
}

/// Returned when a client asks for a document type the generator does not
/// support. Rejection happens before anything is written to disk.
#[derive(Debug, thiserror::Error)]
#[error("Unsupported document type: {0}")]
pub struct UnsupportedDocumentType(pub String);

impl FromStr for DocumentKind {
    type Err = UnsupportedDocumentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sale_deed" => Ok(DocumentKind::SaleDeed),
            "will" => Ok(DocumentKind::Will),
            other => Err(UnsupportedDocumentType(other.to_string())),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::SaleDeed => write!(f, "sale_deed"),
            DocumentKind::Will => write!(f, "will"),
        }
    }
}

/// A generated plaintext document. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub id: Uuid,
    pub kind: DocumentKind,
    pub owner_name: String,
    pub property_address: Option<String>,
    pub content: String,
    /// Name the QR image was persisted under (`{id}_qr.png`).
    pub qr_filename: String,
    pub created_at: DateTime<Utc>,
}

/// Metadata encoded into the QR image for a generated document.
#[derive(Debug, Serialize)]
pub struct GeneratedQrPayload<'a> {
    pub doc_id: Uuid,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub owner: &'a str,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub doc_id: Uuid,
    /// Absolute URL of the rendered plaintext document.
    pub download: String,
    /// Absolute URL of the QR image for the document.
    pub qr: String,
}
