use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{DocumentAnalyzer, LlmClient};
use crate::presentation::state::AppState;

use super::ApiError;
use super::dto::ModelsResponse;

/// `GET /tax/models`
pub async fn models_handler<A, L>(
    State(state): State<AppState<A, L>>,
) -> Result<impl IntoResponse, ApiError>
where
    A: DocumentAnalyzer + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let models = state.analysis_service.list_available_models().await?;
    Ok((
        StatusCode::OK,
        Json(ModelsResponse {
            success: true,
            models,
        }),
    ))
}
