use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::application::ports::{DocumentAnalyzer, LlmClient};
use crate::domain::{DocumentId, DocumentStatus};
use crate::presentation::state::AppState;

use super::ApiError;
use super::dto::{CategoryResponse, DocumentResponse, StatusHistoryResponse, UpdateStatusRequest};

pub(super) fn parse_document_id(raw: &str) -> Result<DocumentId, ApiError> {
    Uuid::parse_str(raw)
        .map(DocumentId::from_uuid)
        .map_err(|_| ApiError::BadRequest(format!("Invalid document ID: {}", raw)))
}

/// `GET /files/documents/{user_id}`
#[tracing::instrument(skip(state))]
pub async fn list_documents_handler<A, L>(
    State(state): State<AppState<A, L>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    A: DocumentAnalyzer + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let documents = state.document_service.list_for_owner(&user_id).await?;
    let body: Vec<DocumentResponse> = documents.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(body)))
}

/// `GET /files/document/{document_id}`
#[tracing::instrument(skip(state))]
pub async fn get_document_handler<A, L>(
    State(state): State<AppState<A, L>>,
    Path(document_id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    A: DocumentAnalyzer + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let id = parse_document_id(&document_id)?;
    let document = state.document_service.get(id).await?;
    Ok((StatusCode::OK, Json(DocumentResponse::from(document))))
}

/// `DELETE /files/documents/{document_id}`
#[tracing::instrument(skip(state))]
pub async fn delete_document_handler<A, L>(
    State(state): State<AppState<A, L>>,
    Path(document_id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    A: DocumentAnalyzer + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let id = parse_document_id(&document_id)?;
    state.document_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PATCH /files/document/{document_id}/status`
#[tracing::instrument(skip(state, request))]
pub async fn update_status_handler<A, L>(
    State(state): State<AppState<A, L>>,
    Path(document_id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    A: DocumentAnalyzer + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let id = parse_document_id(&document_id)?;
    let status = request
        .status
        .parse::<DocumentStatus>()
        .map_err(ApiError::BadRequest)?;

    let document = state
        .document_service
        .update_status(id, status, request.details)
        .await?;

    Ok((StatusCode::OK, Json(DocumentResponse::from(document))))
}

/// `GET /files/document/{document_id}/history`
#[tracing::instrument(skip(state))]
pub async fn status_history_handler<A, L>(
    State(state): State<AppState<A, L>>,
    Path(document_id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    A: DocumentAnalyzer + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let id = parse_document_id(&document_id)?;
    let history = state.document_service.history(id).await?;
    let body: Vec<StatusHistoryResponse> = history.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(body)))
}

/// `GET /categories`
pub async fn categories_handler<A, L>(
    State(state): State<AppState<A, L>>,
) -> Result<impl IntoResponse, ApiError>
where
    A: DocumentAnalyzer + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let categories = state.document_service.list_categories().await?;
    let body: Vec<CategoryResponse> = categories.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(body)))
}
