pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookChanges, BookDraft, BookDto, CoverUpload};
use crate::core::catalogue::CatalogueResult;

#[async_trait]
pub(crate) trait CatalogueService: Sync + Send {
    async fn list_books(&self) -> CatalogueResult<Vec<BookDto>>;
    async fn compose_book_details(&self, id: i64) -> CatalogueResult<BookDto>;
    async fn add_book(&self, draft: &BookDraft, cover: Option<&CoverUpload>) -> CatalogueResult<()>;
    async fn find_book_by_id(&self, id: i64) -> CatalogueResult<BookDto>;
    async fn update_book(&self, changes: &BookChanges) -> CatalogueResult<()>;
    async fn remove_book(&self, id: i64) -> CatalogueResult<()>;
}
