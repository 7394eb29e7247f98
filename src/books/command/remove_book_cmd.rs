use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::CatalogueService;
use crate::core::command::{Command, CommandError};

// Removes a book after purging its reviews from the remote store.
pub(crate) struct RemoveBookCommand {
    catalogue_service: Box<dyn CatalogueService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalogue_service: Box<dyn CatalogueService>) -> Self {
        Self {
            catalogue_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) book_id: Option<i64>,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: Option<i64>) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let book_id = req.book_id.ok_or_else(|| CommandError::NotFound {
            message: "book id is required".to_string(),
        })?;
        self.catalogue_service.remove_book(book_id).await
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new())
    }
}
