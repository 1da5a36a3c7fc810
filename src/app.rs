use crate::config::Config;
use crate::domain::listing::{normalize, ListingViewModel};
use crate::listings::{FetchPayload, ListingSource};

/// Everything a request handler needs. Shared read-only across workers.
pub struct App {
    pub config: Config,
    source: Box<dyn ListingSource>,
}

impl App {
    pub fn new(config: Config, source: impl ListingSource + 'static) -> Self {
        Self {
            config,
            source: Box::new(source),
        }
    }

    /// Fetches `size` listings and normalizes them.
    ///
    /// A failed fetch is logged and rendered as "no results"; there is no retry.
    pub fn fetch_view_models(&self, size: usize) -> Vec<ListingViewModel> {
        let payload = FetchPayload::page_size(&self.config.page_size_key, size);

        match self.source.fetch_listings(&payload) {
            Ok(raw) => {
                let listings = normalize(&raw);
                tracing::debug!(requested = size, received = listings.len(), "listings normalized");
                listings
            }
            Err(e) => {
                tracing::warn!(error = %e, "listings fetch failed, rendering empty grid");
                Vec::new()
            }
        }
    }
}
