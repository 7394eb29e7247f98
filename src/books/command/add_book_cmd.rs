use async_trait::async_trait;
use serde::Serialize;
use crate::books::domain::CatalogueService;
use crate::books::dto::{BookDraft, CoverUpload};
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalogue_service: Box<dyn CatalogueService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalogue_service: Box<dyn CatalogueService>) -> Self {
        Self {
            catalogue_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) draft: BookDraft,
    pub(crate) cover: Option<CoverUpload>,
}

impl AddBookCommandRequest {
    pub fn new(draft: BookDraft, cover: Option<CoverUpload>) -> Self {
        Self {
            draft,
            cover,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {}

impl AddBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalogue_service.add_book(&req.draft, req.cover.as_ref()).await
            .map_err(CommandError::from).map(|_| AddBookCommandResponse::new())
    }
}
