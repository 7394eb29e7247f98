use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::reviews::domain::ReviewService;

// Prepares the add-review form after confirming the target book still exists.
pub(crate) struct GetReviewFormCommand {
    review_service: Box<dyn ReviewService>,
}

impl GetReviewFormCommand {
    pub(crate) fn new(review_service: Box<dyn ReviewService>) -> Self {
        Self {
            review_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetReviewFormCommandRequest {
    pub(crate) book_id: Option<i64>,
}

impl GetReviewFormCommandRequest {
    pub fn new(book_id: Option<i64>) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetReviewFormCommandResponse {
    pub book_id: i64,
}

impl GetReviewFormCommandResponse {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[async_trait]
impl Command<GetReviewFormCommandRequest, GetReviewFormCommandResponse> for GetReviewFormCommand {
    async fn execute(&self, req: GetReviewFormCommandRequest) -> Result<GetReviewFormCommandResponse, CommandError> {
        let book_id = req.book_id.ok_or_else(|| CommandError::NotFound {
            message: "book id is required".to_string(),
        })?;
        self.review_service.verify_book_exists(book_id).await
            .map_err(CommandError::from).map(|_| GetReviewFormCommandResponse::new(book_id))
    }
}
