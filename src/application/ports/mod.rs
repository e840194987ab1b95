mod category_repository;
mod document_analyzer;
mod document_repository;
mod file_store;
mod llm_client;
mod repository_error;

pub use category_repository::CategoryRepository;
pub use document_analyzer::{
    CancelHandle, CancelSignal, DocumentAnalyzer, DocumentAnalyzerError, JobResult,
};
pub use document_repository::DocumentRepository;
pub use file_store::{FileStore, FileStoreError};
pub use llm_client::{LlmClient, LlmClientError};
pub use repository_error::RepositoryError;
