mod azure_doc_intel_adapter;
mod mock_document_analyzer;
mod poll_policy;

pub use azure_doc_intel_adapter::{
    API_VERSION, AnalyzeOperation, AnalyzeResult, AzureDocIntelAdapter, DEFAULT_MODEL_ID,
    DEFAULT_REQUEST_TIMEOUT, ModelList, OPERATION_LOCATION_HEADER, OperationError,
    SUBSCRIPTION_KEY_HEADER,
};
pub use mock_document_analyzer::{MOCK_EXTRACTED_CONTENT, MockDocumentAnalyzer};
pub use poll_policy::{DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL, PollPolicy};
