use axum::extract::Multipart;
use bytes::Bytes;

use super::ApiError;

pub const FILE_FIELD: &str = "file";
pub const USER_ID_FIELD: &str = "user_id";
pub const DEFAULT_USER_ID: &str = "default";

/// Fields of an upload form: one `file` part plus an optional `user_id`.
pub struct UploadForm {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Bytes,
    pub user_id: String,
}

pub async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, ApiError> {
    let mut file: Option<(String, Option<String>, Bytes)> = None;
    let mut user_id: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart: {}", e)))?
    {
        match field.name() {
            Some(FILE_FIELD) => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;
                file = Some((filename, content_type, data));
            }
            Some(USER_ID_FIELD) => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read user_id: {}", e)))?;
                user_id = Some(value.trim().to_string()).filter(|v| !v.is_empty());
            }
            other => {
                tracing::debug!(field = ?other, "Ignoring unexpected multipart field");
            }
        }
    }

    let (filename, content_type, data) =
        file.ok_or_else(|| ApiError::BadRequest("No file uploaded".to_string()))?;

    tracing::debug!(filename = %filename, bytes = data.len(), "Upload form received");

    Ok(UploadForm {
        filename,
        content_type,
        data,
        user_id: user_id.unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
    })
}
