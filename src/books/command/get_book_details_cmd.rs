use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::CatalogueService;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};

// Composes the detail model, the book record joined with its reviews.
pub(crate) struct GetBookDetailsCommand {
    catalogue_service: Box<dyn CatalogueService>,
}

impl GetBookDetailsCommand {
    pub(crate) fn new(catalogue_service: Box<dyn CatalogueService>) -> Self {
        Self {
            catalogue_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookDetailsCommandRequest {
    pub(crate) book_id: Option<i64>,
}

impl GetBookDetailsCommandRequest {
    pub fn new(book_id: Option<i64>) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetBookDetailsCommandResponse {
    pub book: BookDto,
}

impl GetBookDetailsCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookDetailsCommandRequest, GetBookDetailsCommandResponse> for GetBookDetailsCommand {
    async fn execute(&self, req: GetBookDetailsCommandRequest) -> Result<GetBookDetailsCommandResponse, CommandError> {
        let book_id = req.book_id.ok_or_else(|| CommandError::NotFound {
            message: "book id is required".to_string(),
        })?;
        self.catalogue_service.compose_book_details(book_id).await
            .map_err(CommandError::from).map(GetBookDetailsCommandResponse::new)
    }
}
