//! Shared application state for the fleetline exporter.

use std::sync::Arc;

use crate::config::ExporterConfig;
use crate::registry::Registry;
use crate::scrape::ScrapeCoordinator;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    registry: Arc<Registry>,
    scraper: ScrapeCoordinator,
}

impl AppState {
    pub fn new(cfg: ExporterConfig) -> Self {
        let registry = Arc::new(Registry::new());
        let scraper = ScrapeCoordinator::new(Arc::clone(&registry));
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                scraper,
            }),
        }
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.inner.registry)
    }

    pub fn scraper(&self) -> &ScrapeCoordinator {
        &self.inner.scraper
    }
}
