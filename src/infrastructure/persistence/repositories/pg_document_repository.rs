use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{DocumentRepository, RepositoryError};
use crate::domain::{Document, DocumentId, DocumentStatus, StatusHistoryEntry, StoragePath};

use super::map_sqlx_error;

pub struct PgDocumentRepository {
    pool: PgPool,
}

impl PgDocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    user_id: String,
    category_id: String,
    filename: String,
    original_filename: String,
    file_path: String,
    file_size: i64,
    mime_type: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<DocumentRow> for Document {
    type Error = RepositoryError;

    fn try_from(r: DocumentRow) -> Result<Self, Self::Error> {
        let status = r
            .status
            .parse::<DocumentStatus>()
            .map_err(RepositoryError::InvalidRow)?;

        Ok(Document {
            id: DocumentId::from_uuid(r.id),
            owner_id: r.user_id,
            category_id: r.category_id,
            stored_filename: r.filename,
            original_filename: r.original_filename,
            storage_path: StoragePath::from_raw(r.file_path),
            size_bytes: r.file_size.max(0) as u64,
            mime_type: r.mime_type,
            status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct HistoryRow {
    id: Uuid,
    document_id: Uuid,
    status: String,
    details: Option<serde_json::Value>,
    created_at: DateTime<Utc>,
}

impl TryFrom<HistoryRow> for StatusHistoryEntry {
    type Error = RepositoryError;

    fn try_from(r: HistoryRow) -> Result<Self, Self::Error> {
        let status = r
            .status
            .parse::<DocumentStatus>()
            .map_err(RepositoryError::InvalidRow)?;

        Ok(StatusHistoryEntry {
            id: r.id,
            document_id: DocumentId::from_uuid(r.document_id),
            status,
            details: r.details,
            created_at: r.created_at,
        })
    }
}

#[async_trait]
impl DocumentRepository for PgDocumentRepository {
    #[instrument(skip(self))]
    async fn ensure_owner(&self, owner_id: &str) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO users (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    #[instrument(skip(self, document), fields(document_id = %document.id.as_uuid()))]
    async fn create(&self, document: &Document) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO documents
                (id, user_id, category_id, filename, original_filename, file_path,
                 file_size, mime_type, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(document.id.as_uuid())
        .bind(&document.owner_id)
        .bind(&document.category_id)
        .bind(&document.stored_filename)
        .bind(&document.original_filename)
        .bind(document.storage_path.as_str())
        .bind(document.size_bytes as i64)
        .bind(document.mime_type.as_deref())
        .bind(document.status.as_str())
        .bind(document.created_at)
        .bind(document.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    #[instrument(skip(self), fields(document_id = %id.as_uuid()))]
    async fn get_by_id(&self, id: DocumentId) -> Result<Option<Document>, RepositoryError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, user_id, category_id, filename, original_filename, file_path,
                   file_size, mime_type, status, created_at, updated_at
            FROM documents
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(Document::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Document>, RepositoryError> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, user_id, category_id, filename, original_filename, file_path,
                   file_size, mime_type, status, created_at, updated_at
            FROM documents
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(Document::try_from).collect()
    }

    #[instrument(skip(self), fields(document_id = %id.as_uuid(), status = %status))]
    async fn update_status(
        &self,
        id: DocumentId,
        status: DocumentStatus,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE documents
            SET status = $1, updated_at = $2
            WHERE id = $3
            "#,
        )
        .bind(status.as_str())
        .bind(Utc::now())
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id.as_uuid().to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self), fields(document_id = %id.as_uuid()))]
    async fn delete(&self, id: DocumentId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, entry), fields(document_id = %entry.document_id.as_uuid(), status = %entry.status))]
    async fn append_history(&self, entry: &StatusHistoryEntry) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO document_status_history (id, document_id, status, details, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(entry.id)
        .bind(entry.document_id.as_uuid())
        .bind(entry.status.as_str())
        .bind(&entry.details)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    #[instrument(skip(self), fields(document_id = %document_id.as_uuid()))]
    async fn list_history(
        &self,
        document_id: DocumentId,
    ) -> Result<Vec<StatusHistoryEntry>, RepositoryError> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
            SELECT id, document_id, status, details, created_at
            FROM document_status_history
            WHERE document_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(document_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(StatusHistoryEntry::try_from).collect()
    }
}
