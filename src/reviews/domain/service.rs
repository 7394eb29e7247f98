use async_trait::async_trait;

use crate::books::dto::BookDto;
use crate::core::catalogue::{CatalogueError, CatalogueResult};
use crate::core::domain::Configuration;
use crate::core::status::{
    classify, status_error, status_error_brief, ReasonSeparator, RemoteOutcome, ACCEPT_FETCH,
    ACCEPT_WRITE,
};
use crate::gateway::api::{BookApi, ReviewApi};
use crate::reviews::domain::ReviewService;
use crate::reviews::dto::NewReview;

// Domain service backing the add-review flow.
pub(crate) struct ReviewServiceImpl {
    book_api: Box<dyn BookApi>,
    review_api: Box<dyn ReviewApi>,
}

impl ReviewServiceImpl {
    pub(crate) fn new(
        _config: &Configuration,
        book_api: Box<dyn BookApi>,
        review_api: Box<dyn ReviewApi>,
    ) -> Self {
        Self {
            book_api,
            review_api,
        }
    }
}

#[async_trait]
impl ReviewService for ReviewServiceImpl {
    async fn verify_book_exists(&self, book_id: i64) -> CatalogueResult<()> {
        let reply = self.book_api.fetch(book_id).await?;
        match classify(reply.status, ACCEPT_FETCH) {
            // The payload is parsed to confirm the record is a book, then dropped.
            RemoteOutcome::Success => reply.json::<BookDto>().map(|_| ()),
            RemoteOutcome::NotFound => Err(CatalogueError::not_found(
                format!("book {} was not found", book_id).as_str(),
            )),
            _ => Err(CatalogueError::remote(
                status_error(reply.status, ReasonSeparator::Colon).as_str(),
                Some(reply.status.to_string()),
            )),
        }
    }

    async fn add_review(&self, review: &NewReview) -> CatalogueResult<()> {
        let reply = self.review_api.create(review).await?;
        match classify(reply.status, ACCEPT_WRITE) {
            RemoteOutcome::Success => Ok(()),
            _ => Err(CatalogueError::remote(
                status_error_brief(reply.status).as_str(),
                Some(reply.status.to_string()),
            )),
        }
    }
}
