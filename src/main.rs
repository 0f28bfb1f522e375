use std::sync::Arc;

use axum::http::HeaderValue;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use edudoc::adapters::ai::{AiContentGenerator, GeminiConfig, GeminiProvider};
use edudoc::adapters::document::PulldownExportService;
use edudoc::adapters::http::{api_router, AppState};
use edudoc::application::{Workbench, WorkspaceStore};
use edudoc::config::{AiConfig, AppConfig, ServerConfig};
use edudoc::domain::template::TemplateCatalog;

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn content_generator(ai: &AiConfig) -> AiContentGenerator {
    let Some(key) = ai.api_key() else {
        tracing::warn!("No Gemini API key configured; AI assistance is unavailable");
        return AiContentGenerator::unavailable();
    };

    let config = GeminiConfig::new(key)
        .with_model(ai.model.clone())
        .with_base_url(ai.base_url.clone())
        .with_timeout(ai.timeout());
    match GeminiProvider::new(config) {
        Ok(provider) => {
            tracing::info!(model = %ai.model, "Gemini content generation enabled");
            AiContentGenerator::new(Arc::new(provider))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to build Gemini client; AI assistance is unavailable");
            AiContentGenerator::unavailable()
        }
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server.log_level);
    config.validate()?;

    tracing::info!(ai_enabled = config.ai.has_gemini(), "Starting EduDoc");

    let workbench = Workbench::new(
        WorkspaceStore::seeded(),
        TemplateCatalog::standard(),
        Arc::new(content_generator(&config.ai)),
        config.editor.autosave(),
    );
    let state = AppState::new(workbench, Arc::new(PulldownExportService::new()));

    let app = api_router(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.bind_address()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app).await?;
    Ok(())
}
