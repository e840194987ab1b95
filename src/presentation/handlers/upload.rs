use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{DocumentAnalyzer, LlmClient};
use crate::application::services::UploadRequest;
use crate::presentation::state::AppState;

use super::dto::UploadResponse;
use super::multipart_form::read_upload_form;
use super::ApiError;

/// `POST /files/upload`: files the upload under the default category.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<A, L>(
    State(state): State<AppState<A, L>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError>
where
    A: DocumentAnalyzer + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    store_upload(&state, multipart, None, "File uploaded and classified").await
}

/// `POST /files/upload/{category_id}`
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_with_category_handler<A, L>(
    State(state): State<AppState<A, L>>,
    Path(category_id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError>
where
    A: DocumentAnalyzer + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    store_upload(
        &state,
        multipart,
        Some(category_id),
        "File uploaded to specified category",
    )
    .await
}

async fn store_upload<A, L>(
    state: &AppState<A, L>,
    multipart: Multipart,
    category_id: Option<String>,
    message: &str,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError>
where
    A: DocumentAnalyzer + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let form = read_upload_form(multipart).await?;

    let document = state
        .document_service
        .upload(UploadRequest {
            owner_id: form.user_id,
            category_id,
            original_filename: form.filename,
            mime_type: form.content_type,
            data: form.data,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(UploadResponse {
            message: message.to_string(),
            filename: document.stored_filename,
        }),
    ))
}
