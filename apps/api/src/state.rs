use std::sync::Arc;

use crate::backend::AssistBackend;
use crate::capture::Rasterizer;
use crate::config::Config;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Where the single résumé document lives. File-backed in production.
    pub store: Arc<dyn DocumentStore>,
    /// Remote AI/ATS/interview service. Swapped for a fake in tests.
    pub backend: Arc<dyn AssistBackend>,
    /// Font database and raster settings shared by every PDF export.
    pub rasterizer: Rasterizer,
    pub config: Config,
}
