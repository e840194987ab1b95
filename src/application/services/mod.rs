mod analysis_service;
mod document_service;
mod file_intake;
mod tax_verifier;
mod verification_parser;

pub use analysis_service::{AnalysisError, AnalysisService, TaxDocumentAnalysis};
pub use document_service::{DocumentService, DocumentServiceError, UploadRequest};
pub use file_intake::{
    DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_MAX_FILE_SIZE_MB, FileIntakeValidator, IntakeError,
};
pub use tax_verifier::{
    MAX_PROMPT_CONTENT_CHARS, SYSTEM_PROMPT, TaxDocumentVerifier, build_verification_prompt,
};
pub use verification_parser::parse_verification_reply;
