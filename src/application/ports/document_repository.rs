use async_trait::async_trait;

use crate::domain::{Document, DocumentId, DocumentStatus, StatusHistoryEntry};

use super::RepositoryError;

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Creates the owner row if it does not exist yet.
    async fn ensure_owner(&self, owner_id: &str) -> Result<(), RepositoryError>;

    async fn create(&self, document: &Document) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: DocumentId) -> Result<Option<Document>, RepositoryError>;

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Document>, RepositoryError>;

    async fn update_status(
        &self,
        id: DocumentId,
        status: DocumentStatus,
    ) -> Result<(), RepositoryError>;

    /// Removes the document and its history. Returns `false` when nothing matched.
    async fn delete(&self, id: DocumentId) -> Result<bool, RepositoryError>;

    async fn append_history(&self, entry: &StatusHistoryEntry) -> Result<(), RepositoryError>;

    async fn list_history(
        &self,
        document_id: DocumentId,
    ) -> Result<Vec<StatusHistoryEntry>, RepositoryError>;
}
