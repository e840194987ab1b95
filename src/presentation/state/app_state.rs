use std::sync::Arc;

use crate::application::ports::{DocumentAnalyzer, LlmClient};
use crate::application::services::{AnalysisService, DocumentService};

pub struct AppState<A: ?Sized, L: ?Sized>
where
    A: DocumentAnalyzer,
    L: LlmClient,
{
    pub analysis_service: Arc<AnalysisService<A, L>>,
    pub document_service: Arc<DocumentService>,
}

impl<A: ?Sized, L: ?Sized> Clone for AppState<A, L>
where
    A: DocumentAnalyzer,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
            document_service: Arc::clone(&self.document_service),
        }
    }
}
