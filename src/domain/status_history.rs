use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{DocumentId, DocumentStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct StatusHistoryEntry {
    pub id: Uuid,
    pub document_id: DocumentId,
    pub status: DocumentStatus,
    pub details: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl StatusHistoryEntry {
    pub fn new(
        document_id: DocumentId,
        status: DocumentStatus,
        details: Option<serde_json::Value>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            document_id,
            status,
            details,
            created_at: Utc::now(),
        }
    }
}
