use serde::{Deserialize, Serialize};

use crate::domain::{Document, DocumentCategory, ModelDescriptor, StatusHistoryEntry};

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub filename: String,
    pub original_filename: String,
    pub file_path: String,
    pub file_size: u64,
    pub mime_type: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Document> for DocumentResponse {
    fn from(d: Document) -> Self {
        Self {
            id: d.id.as_uuid().to_string(),
            user_id: d.owner_id,
            category_id: d.category_id,
            filename: d.stored_filename,
            original_filename: d.original_filename,
            file_path: d.storage_path.to_string(),
            file_size: d.size_bytes,
            mime_type: d.mime_type,
            status: d.status.as_str().to_string(),
            created_at: d.created_at.to_rfc3339(),
            updated_at: d.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusHistoryResponse {
    pub id: String,
    pub document_id: String,
    pub status: String,
    pub details: Option<serde_json::Value>,
    pub created_at: String,
}

impl From<StatusHistoryEntry> for StatusHistoryResponse {
    fn from(e: StatusHistoryEntry) -> Self {
        Self {
            id: e.id.to_string(),
            document_id: e.document_id.as_uuid().to_string(),
            status: e.status.as_str().to_string(),
            details: e.details,
            created_at: e.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub required: bool,
}

impl From<DocumentCategory> for CategoryResponse {
    fn from(c: DocumentCategory) -> Self {
        Self {
            id: c.id,
            title: c.title,
            subtitle: c.subtitle,
            required: c.required,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub success: bool,
    pub models: Vec<ModelDescriptor>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}
