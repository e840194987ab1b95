use std::sync::Arc;

use serde::Serialize;

use crate::application::ports::{
    CancelSignal, DocumentAnalyzer, DocumentAnalyzerError, LlmClient,
};
use crate::domain::{ModelDescriptor, ValidationResult};

use super::TaxDocumentVerifier;

/// Combined outcome of document analysis and model verification.
#[derive(Debug, Clone, Serialize)]
pub struct TaxDocumentAnalysis {
    pub success: bool,
    pub message: String,
    pub validation: ValidationResult,
    pub analysis: serde_json::Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("no document content provided")]
    EmptyDocument,
    #[error("document analysis failed: {0}")]
    Analyzer(#[from] DocumentAnalyzerError),
}

pub struct AnalysisService<A: ?Sized, L: ?Sized> {
    analyzer: Arc<A>,
    verifier: TaxDocumentVerifier<L>,
}

impl<A, L> AnalysisService<A, L>
where
    A: DocumentAnalyzer + ?Sized,
    L: LlmClient + ?Sized,
{
    pub fn new(analyzer: Arc<A>, llm_client: Arc<L>) -> Self {
        Self {
            analyzer,
            verifier: TaxDocumentVerifier::new(llm_client),
        }
    }

    pub async fn analyze_tax_document(
        &self,
        data: &[u8],
    ) -> Result<TaxDocumentAnalysis, AnalysisError> {
        self.analyze_tax_document_with_cancel(data, CancelSignal::never())
            .await
    }

    #[tracing::instrument(skip(self, data, cancel), fields(bytes = data.len()))]
    pub async fn analyze_tax_document_with_cancel(
        &self,
        data: &[u8],
        cancel: CancelSignal,
    ) -> Result<TaxDocumentAnalysis, AnalysisError> {
        if data.is_empty() {
            return Err(AnalysisError::EmptyDocument);
        }

        let job_result = self.analyzer.submit_and_await(data, cancel).await?;

        tracing::info!(
            content_chars = job_result.content.chars().count(),
            "Document analysis completed"
        );

        let validation = self.verifier.verify(&job_result.content).await;

        tracing::info!(
            is_valid = validation.is_valid,
            form_type = %validation.form_type,
            confidence = validation.confidence,
            "Document verification completed"
        );

        Ok(TaxDocumentAnalysis {
            success: true,
            message: "Document analyzed and verified".to_string(),
            validation,
            analysis: job_result.payload,
        })
    }

    pub async fn list_available_models(&self) -> Result<Vec<ModelDescriptor>, AnalysisError> {
        Ok(self.analyzer.list_models().await?)
    }
}
