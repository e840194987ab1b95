mod analysis_job;
mod document;
mod document_category;
mod document_id;
mod document_status;
mod model_descriptor;
mod status_history;
mod storage_path;
mod stored_filename;
mod validation_result;

pub use analysis_job::{AnalysisJob, AnalysisJobStatus, JobHandle};
pub use document::Document;
pub use document_category::{DEFAULT_CATEGORY_ID, DocumentCategory};
pub use document_id::DocumentId;
pub use document_status::DocumentStatus;
pub use model_descriptor::ModelDescriptor;
pub use status_history::StatusHistoryEntry;
pub use storage_path::StoragePath;
pub use stored_filename::{file_extension, generate_stored_filename};
pub use validation_result::{UNKNOWN_FORM_TYPE, UNPARSED_MESSAGE, ValidationResult};
