mod mock_repository;
mod pg_category_repository;
mod pg_document_repository;

pub use mock_repository::{InMemoryCategoryRepository, InMemoryDocumentRepository};
pub use pg_category_repository::PgCategoryRepository;
pub use pg_document_repository::PgDocumentRepository;

use crate::application::ports::RepositoryError;

fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match &e {
        sqlx::Error::Database(db)
            if db.is_unique_violation() || db.is_foreign_key_violation() =>
        {
            RepositoryError::ConstraintViolation(db.message().to_string())
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::ConnectionFailed(e.to_string())
        }
        _ => RepositoryError::QueryFailed(e.to_string()),
    }
}
