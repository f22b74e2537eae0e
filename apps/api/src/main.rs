use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use shortlist_api::config::Config;
use shortlist_api::llm_client::{self, LlmClient};
use shortlist_api::routes::build_router;
use shortlist_api::screening::extract::PdfExtractor;
use shortlist_api::screening::scorer::Scorer;
use shortlist_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Shortlist API v{}", env!("CARGO_PKG_VERSION"));

    // Construct the Groq client once; the scorer borrows it for every call.
    // A missing credential or failed construction downgrades the scorer to
    // zero-score placeholders instead of aborting startup.
    let scorer = match config.groq_api_key.clone() {
        Some(api_key) => match LlmClient::new(api_key) {
            Ok(client) => {
                info!("LLM client initialized (model: {})", llm_client::MODEL);
                Scorer::new(Arc::new(client))
            }
            Err(e) => {
                warn!("Failed to construct Groq client, scoring disabled: {e}");
                Scorer::disabled(format!("No Groq connection available: {e}"))
            }
        },
        None => {
            warn!("GROQ_API_KEY not set, scoring disabled");
            Scorer::disabled("No Groq connection available: GROQ_API_KEY is not set")
        }
    };

    // Build app state; the result collection starts empty and is replaced
    // wholesale by each screening run.
    let state = AppState {
        scorer: Arc::new(scorer),
        extractor: Arc::new(PdfExtractor),
        results: Arc::new(RwLock::new(Vec::new())),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
