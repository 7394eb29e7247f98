use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::reviews::domain::ReviewService;
use crate::reviews::dto::NewReview;

pub(crate) struct AddReviewCommand {
    review_service: Box<dyn ReviewService>,
}

impl AddReviewCommand {
    pub(crate) fn new(review_service: Box<dyn ReviewService>) -> Self {
        Self {
            review_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddReviewCommandRequest {
    pub(crate) review: NewReview,
}

impl AddReviewCommandRequest {
    pub fn new(review: NewReview) -> Self {
        Self {
            review,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddReviewCommandResponse {
    pub book_id: i64,
}

impl AddReviewCommandResponse {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[async_trait]
impl Command<AddReviewCommandRequest, AddReviewCommandResponse> for AddReviewCommand {
    async fn execute(&self, req: AddReviewCommandRequest) -> Result<AddReviewCommandResponse, CommandError> {
        let book_id = req.review.book_id;
        self.review_service.add_review(&req.review).await
            .map_err(CommandError::from).map(|_| AddReviewCommandResponse::new(book_id))
    }
}
