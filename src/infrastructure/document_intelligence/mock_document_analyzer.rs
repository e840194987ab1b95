use crate::application::ports::{CancelSignal, DocumentAnalyzer, DocumentAnalyzerError, JobResult};
use crate::domain::ModelDescriptor;

pub const MOCK_EXTRACTED_CONTENT: &str = "Form 1040 U.S. Individual Income Tax Return";

/// Answers every submission with a succeeded job carrying fixed content.
pub struct MockDocumentAnalyzer {
    content: String,
}

impl MockDocumentAnalyzer {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Default for MockDocumentAnalyzer {
    fn default() -> Self {
        Self::with_content(MOCK_EXTRACTED_CONTENT)
    }
}

#[async_trait::async_trait]
impl DocumentAnalyzer for MockDocumentAnalyzer {
    async fn submit_and_await(
        &self,
        _data: &[u8],
        cancel: CancelSignal,
    ) -> Result<JobResult, DocumentAnalyzerError> {
        if cancel.is_cancelled() {
            return Err(DocumentAnalyzerError::Cancelled);
        }
        Ok(JobResult {
            payload: serde_json::json!({
                "status": "succeeded",
                "analyzeResult": { "content": self.content },
            }),
            content: self.content.clone(),
        })
    }

    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, DocumentAnalyzerError> {
        Ok(vec![ModelDescriptor {
            model_id: "mock-tax.us.1040".to_string(),
            description: Some("Scaffold model".to_string()),
            api_version: None,
            created_date_time: None,
            expiration_date_time: None,
        }])
    }
}
