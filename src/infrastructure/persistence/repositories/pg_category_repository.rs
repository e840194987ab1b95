use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{CategoryRepository, RepositoryError};
use crate::domain::DocumentCategory;

use super::map_sqlx_error;

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: String,
    title: String,
    subtitle: Option<String>,
    required: bool,
}

impl From<CategoryRow> for DocumentCategory {
    fn from(r: CategoryRow) -> Self {
        DocumentCategory {
            id: r.id,
            title: r.title,
            subtitle: r.subtitle.filter(|s| !s.is_empty()),
            required: r.required,
        }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> Result<Option<DocumentCategory>, RepositoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, title, subtitle, required FROM document_categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(DocumentCategory::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<DocumentCategory>, RepositoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, title, subtitle, required FROM document_categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(DocumentCategory::from).collect())
    }
}
