use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::search::domain::SearchService;
use crate::search::dto::SearchHitDto;

pub(crate) struct SearchBooksCommand {
    search_service: Box<dyn SearchService>,
}

impl SearchBooksCommand {
    pub(crate) fn new(search_service: Box<dyn SearchService>) -> Self {
        Self {
            search_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchBooksCommandRequest {
    // an empty search box posts no text at all, which queries for everything
    pub(crate) search_text: Option<String>,
}

impl SearchBooksCommandRequest {
    pub fn new(search_text: Option<String>) -> Self {
        Self {
            search_text,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchBooksCommandResponse {
    pub search_text: String,
    pub hits: Vec<SearchHitDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(search_text: String, hits: Vec<SearchHitDto>) -> Self {
        Self {
            search_text,
            hits,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let text = req.search_text.unwrap_or_default();
        let hits = self.search_service.search_books(text.as_str()).await
            .map_err(CommandError::from)?;
        Ok(SearchBooksCommandResponse::new(text, hits))
    }
}
