use async_trait::async_trait;

use crate::core::catalogue::{CatalogueError, CatalogueResult};
use crate::core::domain::Configuration;
use crate::gateway::index::SearchIndex;
use crate::search::domain::SearchService;
use crate::search::dto::SearchHitDto;

// Domain service running full-text queries against the managed index.
pub(crate) struct SearchServiceImpl {
    search_index: Box<dyn SearchIndex>,
}

impl SearchServiceImpl {
    pub(crate) fn new(_config: &Configuration, search_index: Box<dyn SearchIndex>) -> Self {
        Self {
            search_index,
        }
    }
}

#[async_trait]
impl SearchService for SearchServiceImpl {
    async fn search_books(&self, text: &str) -> CatalogueResult<Vec<SearchHitDto>> {
        // The index client's message is surfaced verbatim on failure.
        self.search_index
            .search(text)
            .await
            .map_err(|err| CatalogueError::remote(err.message.as_str(), None))
    }
}
