mod analyze;
mod documents;
pub mod dto;
mod error;
mod health;
mod models;
mod multipart_form;
mod upload;

pub use analyze::{analyze_document_handler, analyze_handler};
pub use documents::{
    categories_handler, delete_document_handler, get_document_handler, list_documents_handler,
    status_history_handler, update_status_handler,
};
pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use models::models_handler;
pub use multipart_form::{DEFAULT_USER_ID, UploadForm, read_upload_form};
pub use upload::{upload_handler, upload_with_category_handler};
