use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::application::ports::{CategoryRepository, DocumentRepository, RepositoryError};
use crate::domain::{Document, DocumentCategory, DocumentId, DocumentStatus, StatusHistoryEntry};

/// Keeps documents and their history in memory.
#[derive(Default)]
pub struct InMemoryDocumentRepository {
    owners: RwLock<Vec<String>>,
    documents: RwLock<HashMap<DocumentId, Document>>,
    history: RwLock<Vec<StatusHistoryEntry>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn owners(&self) -> Vec<String> {
        self.owners.read().await.clone()
    }
}

#[async_trait::async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn ensure_owner(&self, owner_id: &str) -> Result<(), RepositoryError> {
        let mut owners = self.owners.write().await;
        if !owners.iter().any(|o| o == owner_id) {
            owners.push(owner_id.to_string());
        }
        Ok(())
    }

    async fn create(&self, document: &Document) -> Result<(), RepositoryError> {
        let mut documents = self.documents.write().await;
        if documents.contains_key(&document.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "duplicate document id {}",
                document.id.as_uuid()
            )));
        }
        documents.insert(document.id, document.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: DocumentId) -> Result<Option<Document>, RepositoryError> {
        Ok(self.documents.read().await.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Document>, RepositoryError> {
        let mut documents: Vec<Document> = self
            .documents
            .read()
            .await
            .values()
            .filter(|d| d.owner_id == owner_id)
            .cloned()
            .collect();
        documents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(documents)
    }

    async fn update_status(
        &self,
        id: DocumentId,
        status: DocumentStatus,
    ) -> Result<(), RepositoryError> {
        let mut documents = self.documents.write().await;
        let document = documents
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(id.as_uuid().to_string()))?;
        document.status = status;
        document.updated_at = chrono::Utc::now();
        Ok(())
    }

    async fn delete(&self, id: DocumentId) -> Result<bool, RepositoryError> {
        let removed = self.documents.write().await.remove(&id).is_some();
        if removed {
            self.history.write().await.retain(|e| e.document_id != id);
        }
        Ok(removed)
    }

    async fn append_history(&self, entry: &StatusHistoryEntry) -> Result<(), RepositoryError> {
        self.history.write().await.push(entry.clone());
        Ok(())
    }

    async fn list_history(
        &self,
        document_id: DocumentId,
    ) -> Result<Vec<StatusHistoryEntry>, RepositoryError> {
        Ok(self
            .history
            .read()
            .await
            .iter()
            .filter(|e| e.document_id == document_id)
            .cloned()
            .collect())
    }
}

/// Serves a fixed category list.
pub struct InMemoryCategoryRepository {
    categories: Vec<DocumentCategory>,
}

impl InMemoryCategoryRepository {
    pub fn new(categories: Vec<DocumentCategory>) -> Self {
        Self { categories }
    }

    /// The seven SBA loan categories seeded by the initial migration.
    pub fn with_sba_categories() -> Self {
        let category = |id: &str, title: &str, subtitle: Option<&str>, required: bool| {
            DocumentCategory {
                id: id.to_string(),
                title: title.to_string(),
                subtitle: subtitle.map(str::to_string),
                required,
            }
        };

        Self::new(vec![
            category("balance-sheet", "Business Balance Sheet", Some("(Interim/YE)"), true),
            category("debt-schedule", "Business Debt Schedule", None, true),
            category("profit-loss", "Business Profit & Loss", Some("(Interim/YE)"), true),
            category("business-tax-returns", "Business Tax Returns", Some("(BTR)"), true),
            category("personal-tax-returns", "Personal Tax Returns", Some("(PTR)"), true),
            category(
                "project-costs",
                "Project Costs Documents",
                Some("Working Capital/Start-Up Costs"),
                false,
            ),
            category(
                "personal-financial-statement",
                "SBA Form 413 Personal Financial Statement (PFS)",
                None,
                true,
            ),
        ])
    }
}

#[async_trait::async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get(&self, id: &str) -> Result<Option<DocumentCategory>, RepositoryError> {
        Ok(self.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<DocumentCategory>, RepositoryError> {
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(categories)
    }
}
