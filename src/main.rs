use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use taxdoc_analyzer::application::ports::{CategoryRepository, DocumentRepository, FileStore};
use taxdoc_analyzer::application::services::{
    AnalysisService, DocumentService, FileIntakeValidator,
};
use taxdoc_analyzer::infrastructure::document_intelligence::{
    AzureDocIntelAdapter, MockDocumentAnalyzer,
};
use taxdoc_analyzer::infrastructure::llm::{MockLlmClient, OpenAiClient};
use taxdoc_analyzer::infrastructure::observability::{TracingConfig, init_tracing};
use taxdoc_analyzer::infrastructure::persistence::{
    InMemoryCategoryRepository, InMemoryDocumentRepository, PgCategoryRepository,
    PgDocumentRepository, create_pool, run_migrations,
};
use taxdoc_analyzer::infrastructure::storage::ObjectFileStore;
use taxdoc_analyzer::presentation::{
    AppState, Environment, ScaffoldConfig, Settings, create_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;
    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.json,
    ));

    let scaffold_config = ScaffoldConfig::from_env();
    let intake = FileIntakeValidator::new(
        settings.upload.allowed_extensions.clone(),
        settings.upload.max_file_size_mb,
    );

    let router = if scaffold_config.enabled {
        tracing::warn!("Scaffold mode enabled: external services and database are mocked");
        scaffold_router(intake)
    } else {
        production_router(&settings, intake).await?
    };

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!(%addr, environment = %environment, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

async fn production_router(
    settings: &Settings,
    intake: FileIntakeValidator,
) -> anyhow::Result<Router> {
    settings.validate_credentials()?;

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    run_migrations(&pool).await?;

    let documents: Arc<dyn DocumentRepository> = Arc::new(PgDocumentRepository::new(pool.clone()));
    let categories: Arc<dyn CategoryRepository> = Arc::new(PgCategoryRepository::new(pool));
    let file_store: Arc<dyn FileStore> = Arc::new(ObjectFileStore::local(PathBuf::from(
        &settings.upload.directory,
    ))?);

    let doc_intel = &settings.document_intelligence;
    let analyzer = Arc::new(
        AzureDocIntelAdapter::with_request_timeout(
            &doc_intel.endpoint,
            &doc_intel.api_key,
            doc_intel.request_timeout(),
        )?
        .with_model(doc_intel.model_id.clone())
        .with_api_version(doc_intel.api_version.clone())
        .with_poll_policy(doc_intel.poll_policy()),
    );

    let openai = &settings.openai;
    let llm_client = Arc::new(OpenAiClient::new(
        &openai.base_url,
        openai.api_key.clone(),
        openai.model.clone(),
        openai.max_tokens,
        openai.temperature,
    )?);

    tracing::info!(
        model_id = %doc_intel.model_id,
        chat_model = %openai.model,
        upload_dir = %settings.upload.directory,
        "External services configured"
    );

    let state = AppState {
        analysis_service: Arc::new(AnalysisService::new(analyzer, llm_client)),
        document_service: Arc::new(DocumentService::new(
            documents, categories, file_store, intake,
        )),
    };

    Ok(create_router(state))
}

fn scaffold_router(intake: FileIntakeValidator) -> Router {
    let state = AppState {
        analysis_service: Arc::new(AnalysisService::new(
            Arc::new(MockDocumentAnalyzer::default()),
            Arc::new(MockLlmClient::default()),
        )),
        document_service: Arc::new(DocumentService::new(
            Arc::new(InMemoryDocumentRepository::new()),
            Arc::new(InMemoryCategoryRepository::with_sba_categories()),
            Arc::new(ObjectFileStore::in_memory()),
            intake,
        )),
    };

    create_router(state)
}
