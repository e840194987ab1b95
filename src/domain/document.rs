use chrono::{DateTime, Utc};

use super::{DocumentId, DocumentStatus, StoragePath};

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub owner_id: String,
    pub category_id: String,
    pub stored_filename: String,
    pub original_filename: String,
    pub storage_path: StoragePath,
    pub size_bytes: u64,
    pub mime_type: Option<String>,
    pub status: DocumentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn new(
        owner_id: String,
        category_id: String,
        stored_filename: String,
        original_filename: String,
        size_bytes: u64,
        mime_type: Option<String>,
    ) -> Self {
        let now = Utc::now();
        let storage_path = StoragePath::new(&owner_id, &category_id, &stored_filename);
        Self {
            id: DocumentId::new(),
            owner_id,
            category_id,
            stored_filename,
            original_filename,
            storage_path,
            size_bytes,
            mime_type,
            status: DocumentStatus::Uploaded,
            created_at: now,
            updated_at: now,
        }
    }
}
