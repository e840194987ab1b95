use async_trait::async_trait;

use crate::domain::DocumentCategory;

use super::RepositoryError;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<DocumentCategory>, RepositoryError>;

    async fn list(&self) -> Result<Vec<DocumentCategory>, RepositoryError>;
}
