use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, patch, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{DocumentAnalyzer, LlmClient};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_document_handler, analyze_handler, categories_handler, delete_document_handler,
    get_document_handler, health_handler, list_documents_handler, models_handler,
    status_history_handler, update_status_handler, upload_handler, upload_with_category_handler,
};
use crate::presentation::state::AppState;

/// Slack on top of the largest accepted file for multipart framing.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn create_router<A, L>(state: AppState<A, L>) -> Router
where
    A: DocumentAnalyzer + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit =
        state.document_service.intake().max_size_bytes() as usize + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health_handler))
        .route("/tax/analyze", post(analyze_handler::<A, L>))
        .route("/tax/models", get(models_handler::<A, L>))
        .route("/files/upload", post(upload_handler::<A, L>))
        .route(
            "/files/upload/{category_id}",
            post(upload_with_category_handler::<A, L>),
        )
        // GET takes a user id, DELETE a document id; one pattern serves both.
        .route(
            "/files/documents/{id}",
            get(list_documents_handler::<A, L>).delete(delete_document_handler::<A, L>),
        )
        .route(
            "/files/document/{document_id}",
            get(get_document_handler::<A, L>),
        )
        .route(
            "/files/document/{document_id}/status",
            patch(update_status_handler::<A, L>),
        )
        .route(
            "/files/document/{document_id}/history",
            get(status_history_handler::<A, L>),
        )
        .route(
            "/files/document/{document_id}/analyze",
            post(analyze_document_handler::<A, L>),
        )
        .route("/categories", get(categories_handler::<A, L>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
