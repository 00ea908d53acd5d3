use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::{
    config_loader::TrustboardConfig, insight::InsightEngine, mock_feed::MockFeed,
    source_catalog::SourceCatalog,
};

/// Shared state behind the web layer: configuration, the seeded catalog, and
/// the insight engine.
pub struct AppState {
    pub config: TrustboardConfig,
    pub catalog: RwLock<SourceCatalog>,
    pub insight: InsightEngine,
}

impl AppState {
    /// Seed the catalog through the mock feed and assemble shared state.
    pub async fn bootstrap(config: TrustboardConfig) -> Arc<Self> {
        let feed = MockFeed::from_config(&config.feed);
        let catalog = feed.fetch().await;
        tracing::info!(
            sources = catalog.len(),
            seed = config.feed.seed,
            "catalog seeded from mock feed"
        );
        Arc::new(Self::with_catalog(config, catalog))
    }

    /// Assemble state around an already-built catalog.
    pub fn with_catalog(config: TrustboardConfig, catalog: SourceCatalog) -> Self {
        AppState {
            insight: InsightEngine::new(Duration::from_millis(config.insight.latency_ms)),
            catalog: RwLock::new(catalog),
            config,
        }
    }
}
