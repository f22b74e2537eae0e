use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::models::screening::RankedResult;
use crate::screening::extract::ResumeExtractor;
use crate::screening::scorer::Scorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<Scorer>,
    /// Pluggable PDF text extractor. Production: `PdfExtractor`.
    pub extractor: Arc<dyn ResumeExtractor>,
    /// The session-held ranked collection: created empty at startup and
    /// replaced wholesale by each screening run, never merged.
    pub results: Arc<RwLock<Vec<RankedResult>>>,
    pub config: Config,
}
