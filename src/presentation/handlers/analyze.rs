use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{DocumentAnalyzer, LlmClient};
use crate::domain::{DocumentId, DocumentStatus};
use crate::presentation::state::AppState;

use super::ApiError;
use super::documents::parse_document_id;
use super::multipart_form::read_upload_form;

/// `POST /tax/analyze`: analyzes and verifies an uploaded PDF without storing it.
#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_handler<A, L>(
    State(state): State<AppState<A, L>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError>
where
    A: DocumentAnalyzer + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let form = read_upload_form(multipart).await?;

    state
        .document_service
        .intake()
        .validate_pdf(&form.filename, form.data.len() as u64)?;

    let analysis = state
        .analysis_service
        .analyze_tax_document(&form.data)
        .await?;

    Ok((StatusCode::OK, Json(analysis)))
}

/// `POST /files/document/{document_id}/analyze`: runs analysis on a stored
/// document and records the outcome as status transitions.
#[tracing::instrument(skip(state))]
pub async fn analyze_document_handler<A, L>(
    State(state): State<AppState<A, L>>,
    Path(document_id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    A: DocumentAnalyzer + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let id = parse_document_id(&document_id)?;
    let document = state.document_service.get(id).await?;

    state
        .document_service
        .intake()
        .validate_pdf(&document.original_filename, document.size_bytes)?;

    let data = state.document_service.fetch_content(id).await?;

    state
        .document_service
        .update_status(id, DocumentStatus::Processing, None)
        .await?;

    match state.analysis_service.analyze_tax_document(&data).await {
        Ok(analysis) => {
            let details = serde_json::json!({ "validation": analysis.validation });
            if let Err(e) = state
                .document_service
                .update_status(id, DocumentStatus::Completed, Some(details))
                .await
            {
                record_failure(&state, id, e.to_string()).await;
                return Err(e.into());
            }
            Ok((StatusCode::OK, Json(analysis)))
        }
        Err(e) => {
            record_failure(&state, id, e.to_string()).await;
            Err(e.into())
        }
    }
}

/// Records `failed` with the error. A failing status write is only logged.
async fn record_failure<A, L>(state: &AppState<A, L>, id: DocumentId, error: String)
where
    A: DocumentAnalyzer + ?Sized,
    L: LlmClient + ?Sized,
{
    let details = serde_json::json!({ "error": error });
    if let Err(status_err) = state
        .document_service
        .update_status(id, DocumentStatus::Failed, Some(details))
        .await
    {
        tracing::warn!(error = %status_err, "Failed to record analysis failure");
    }
}
