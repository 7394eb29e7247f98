pub mod service;

use async_trait::async_trait;
use crate::core::catalogue::CatalogueResult;
use crate::search::dto::SearchHitDto;

#[async_trait]
pub(crate) trait SearchService: Sync + Send {
    async fn search_books(&self, text: &str) -> CatalogueResult<Vec<SearchHitDto>>;
}
