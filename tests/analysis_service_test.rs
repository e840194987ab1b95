use std::sync::{Arc, Mutex};

use taxdoc_analyzer::application::ports::{
    CancelSignal, DocumentAnalyzer, DocumentAnalyzerError, JobResult, LlmClient, LlmClientError,
};
use taxdoc_analyzer::application::services::{
    AnalysisError, AnalysisService, MAX_PROMPT_CONTENT_CHARS, SYSTEM_PROMPT,
};
use taxdoc_analyzer::domain::{ModelDescriptor, ValidationResult};
use taxdoc_analyzer::infrastructure::document_intelligence::MockDocumentAnalyzer;
use taxdoc_analyzer::infrastructure::llm::MockLlmClient;

/// Records every prompt it receives and answers with a fixed reply.
struct RecordingLlmClient {
    reply: String,
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingLlmClient {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for RecordingLlmClient {
    async fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String, LlmClientError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), prompt.to_string()));
        Ok(self.reply.clone())
    }
}

struct FailingAnalyzer;

#[async_trait::async_trait]
impl DocumentAnalyzer for FailingAnalyzer {
    async fn submit_and_await(
        &self,
        _data: &[u8],
        _cancel: CancelSignal,
    ) -> Result<JobResult, DocumentAnalyzerError> {
        Err(DocumentAnalyzerError::AnalysisFailed("Corrupt PDF".to_string()))
    }

    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, DocumentAnalyzerError> {
        Err(DocumentAnalyzerError::RequestFailed("offline".to_string()))
    }
}

const GOOD_REPLY: &str =
    "VALID: Yes\nFORM_TYPE: Form 1040\nCONFIDENCE: 9\nEXPLANATION: looks right\nISSUES: none";

#[tokio::test]
async fn given_1040_content_when_analyzing_then_returns_validation_and_payload() {
    let llm = Arc::new(RecordingLlmClient::new(GOOD_REPLY));
    let service = AnalysisService::new(
        Arc::new(MockDocumentAnalyzer::with_content("Form 1040 ...")),
        Arc::clone(&llm),
    );

    let analysis = service.analyze_tax_document(b"%PDF-1.4").await.unwrap();

    assert!(analysis.success);
    assert_eq!(
        analysis.validation,
        ValidationResult {
            is_valid: true,
            form_type: "Form 1040".to_string(),
            confidence: 9,
            explanation: "looks right".to_string(),
            issues: "none".to_string(),
        }
    );
    assert_eq!(analysis.analysis["analyzeResult"]["content"], "Form 1040 ...");

    let calls = llm.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, SYSTEM_PROMPT);
    assert!(calls[0].1.contains("Form 1040 ..."));
}

#[tokio::test]
async fn given_long_content_when_analyzing_then_prompt_carries_only_the_first_chars() {
    let content = format!("{}SECRET-TAIL", "x".repeat(MAX_PROMPT_CONTENT_CHARS));
    let llm = Arc::new(RecordingLlmClient::new(GOOD_REPLY));
    let service = AnalysisService::new(
        Arc::new(MockDocumentAnalyzer::with_content(content)),
        Arc::clone(&llm),
    );

    service.analyze_tax_document(b"%PDF-1.4").await.unwrap();

    let calls = llm.calls.lock().unwrap();
    assert!(!calls[0].1.contains("SECRET-TAIL"));
}

#[tokio::test]
async fn given_llm_failure_when_analyzing_then_returns_service_error_verdict() {
    let service = AnalysisService::new(
        Arc::new(MockDocumentAnalyzer::default()),
        Arc::new(MockLlmClient::failing()),
    );

    let analysis = service.analyze_tax_document(b"%PDF-1.4").await.unwrap();

    assert!(analysis.success);
    assert!(!analysis.validation.is_valid);
    assert_eq!(analysis.validation.form_type, "Unknown");
    assert_eq!(analysis.validation.confidence, 0);
    assert!(
        analysis
            .validation
            .explanation
            .starts_with("Error during verification: ")
    );
    assert_eq!(
        analysis.validation.issues,
        "Unable to verify document due to service error"
    );
}

#[tokio::test]
async fn given_analyzer_failure_when_analyzing_then_llm_is_not_called() {
    let llm = Arc::new(RecordingLlmClient::new(GOOD_REPLY));
    let service = AnalysisService::new(Arc::new(FailingAnalyzer), Arc::clone(&llm));

    let result = service.analyze_tax_document(b"%PDF-1.4").await;

    assert!(matches!(
        result,
        Err(AnalysisError::Analyzer(DocumentAnalyzerError::AnalysisFailed(_)))
    ));
    assert!(llm.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_empty_document_when_analyzing_then_rejects_before_submitting() {
    let service = AnalysisService::new(Arc::new(FailingAnalyzer), Arc::new(MockLlmClient::default()));

    let result = service.analyze_tax_document(b"").await;

    assert!(matches!(result, Err(AnalysisError::EmptyDocument)));
}

#[tokio::test]
async fn given_cancelled_signal_when_analyzing_then_returns_cancelled() {
    let service = AnalysisService::new(
        Arc::new(MockDocumentAnalyzer::default()),
        Arc::new(MockLlmClient::default()),
    );
    let (handle, signal) = CancelSignal::new();
    handle.cancel();

    let result = service
        .analyze_tax_document_with_cancel(b"%PDF-1.4", signal)
        .await;

    assert!(matches!(
        result,
        Err(AnalysisError::Analyzer(DocumentAnalyzerError::Cancelled))
    ));
}

#[tokio::test]
async fn given_mock_analyzer_when_listing_models_then_returns_passthrough() {
    let service = AnalysisService::new(
        Arc::new(MockDocumentAnalyzer::default()),
        Arc::new(MockLlmClient::default()),
    );

    let models = service.list_available_models().await.unwrap();

    assert_eq!(models.len(), 1);
}

#[tokio::test]
async fn given_analyzer_offline_when_listing_models_then_returns_error() {
    let service = AnalysisService::new(Arc::new(FailingAnalyzer), Arc::new(MockLlmClient::default()));

    let result = service.list_available_models().await;

    assert!(matches!(
        result,
        Err(AnalysisError::Analyzer(DocumentAnalyzerError::RequestFailed(_)))
    ));
}
