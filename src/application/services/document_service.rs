use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;

use crate::application::ports::{
    CategoryRepository, DocumentRepository, FileStore, FileStoreError, RepositoryError,
};
use crate::domain::{
    DEFAULT_CATEGORY_ID, Document, DocumentCategory, DocumentId, DocumentStatus,
    StatusHistoryEntry, generate_stored_filename,
};

use super::{FileIntakeValidator, IntakeError};

pub struct UploadRequest {
    pub owner_id: String,
    /// `None` files the upload under [`DEFAULT_CATEGORY_ID`].
    pub category_id: Option<String>,
    pub original_filename: String,
    pub mime_type: Option<String>,
    pub data: Bytes,
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error("Invalid category_id: '{0}'. Category does not exist.")]
    UnknownCategory(String),
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("storage error: {0}")]
    Storage(#[from] FileStoreError),
}

pub struct DocumentService {
    documents: Arc<dyn DocumentRepository>,
    categories: Arc<dyn CategoryRepository>,
    file_store: Arc<dyn FileStore>,
    intake: FileIntakeValidator,
}

impl DocumentService {
    pub fn new(
        documents: Arc<dyn DocumentRepository>,
        categories: Arc<dyn CategoryRepository>,
        file_store: Arc<dyn FileStore>,
        intake: FileIntakeValidator,
    ) -> Self {
        Self {
            documents,
            categories,
            file_store,
            intake,
        }
    }

    pub fn intake(&self) -> &FileIntakeValidator {
        &self.intake
    }

    #[tracing::instrument(
        skip(self, request),
        fields(
            owner_id = %request.owner_id,
            filename = %request.original_filename,
            bytes = request.data.len()
        )
    )]
    pub async fn upload(&self, request: UploadRequest) -> Result<Document, DocumentServiceError> {
        let category_id = match request.category_id {
            Some(category_id) => {
                if self.categories.get(&category_id).await?.is_none() {
                    return Err(DocumentServiceError::UnknownCategory(category_id));
                }
                category_id
            }
            None => DEFAULT_CATEGORY_ID.to_string(),
        };

        self.intake
            .validate(&request.original_filename, request.data.len() as u64)?;

        self.documents.ensure_owner(&request.owner_id).await?;

        let stored_filename = generate_stored_filename(&request.original_filename, Utc::now());
        let document = Document::new(
            request.owner_id,
            category_id,
            stored_filename,
            request.original_filename,
            request.data.len() as u64,
            request.mime_type,
        );

        self.file_store
            .store(&document.storage_path, request.data)
            .await?;

        if let Err(e) = self.documents.create(&document).await {
            if let Err(del_err) = self.file_store.delete(&document.storage_path).await {
                tracing::warn!(
                    error = %del_err,
                    path = %document.storage_path,
                    "Failed to remove stored file after metadata insert failure"
                );
            }
            return Err(e.into());
        }

        self.documents
            .append_history(&StatusHistoryEntry::new(
                document.id,
                DocumentStatus::Uploaded,
                None,
            ))
            .await?;

        tracing::info!(
            document_id = %document.id.as_uuid(),
            category_id = %document.category_id,
            path = %document.storage_path,
            "Document stored"
        );

        Ok(document)
    }

    pub async fn get(&self, id: DocumentId) -> Result<Document, DocumentServiceError> {
        self.documents
            .get_by_id(id)
            .await?
            .ok_or_else(|| DocumentServiceError::NotFound(id.as_uuid().to_string()))
    }

    pub async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<Document>, DocumentServiceError> {
        Ok(self.documents.list_by_owner(owner_id).await?)
    }

    pub async fn fetch_content(&self, id: DocumentId) -> Result<Vec<u8>, DocumentServiceError> {
        let document = self.get(id).await?;
        Ok(self.file_store.fetch(&document.storage_path).await?)
    }

    #[tracing::instrument(skip(self, details), fields(document_id = %id.as_uuid(), status = %status))]
    pub async fn update_status(
        &self,
        id: DocumentId,
        status: DocumentStatus,
        details: Option<serde_json::Value>,
    ) -> Result<Document, DocumentServiceError> {
        let mut document = self.get(id).await?;

        self.documents.update_status(id, status).await?;
        self.documents
            .append_history(&StatusHistoryEntry::new(id, status, details))
            .await?;

        document.status = status;
        document.updated_at = Utc::now();
        Ok(document)
    }

    pub async fn history(
        &self,
        id: DocumentId,
    ) -> Result<Vec<StatusHistoryEntry>, DocumentServiceError> {
        self.get(id).await?;
        Ok(self.documents.list_history(id).await?)
    }

    #[tracing::instrument(skip(self), fields(document_id = %id.as_uuid()))]
    pub async fn delete(&self, id: DocumentId) -> Result<(), DocumentServiceError> {
        let document = self.get(id).await?;

        match self.file_store.delete(&document.storage_path).await {
            Ok(()) | Err(FileStoreError::NotFound(_)) => {}
            Err(e) => return Err(e.into()),
        }

        if !self.documents.delete(id).await? {
            return Err(DocumentServiceError::NotFound(id.as_uuid().to_string()));
        }

        tracing::info!(path = %document.storage_path, "Document deleted");
        Ok(())
    }

    pub async fn list_categories(&self) -> Result<Vec<DocumentCategory>, DocumentServiceError> {
        Ok(self.categories.list().await?)
    }
}
