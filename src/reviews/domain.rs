pub mod service;

use async_trait::async_trait;
use crate::core::catalogue::CatalogueResult;
use crate::reviews::dto::NewReview;

#[async_trait]
pub(crate) trait ReviewService: Sync + Send {
    async fn verify_book_exists(&self, book_id: i64) -> CatalogueResult<()>;
    async fn add_review(&self, review: &NewReview) -> CatalogueResult<()>;
}
