use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::CatalogueService;
use crate::books::dto::BookChanges;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalogue_service: Box<dyn CatalogueService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalogue_service: Box<dyn CatalogueService>) -> Self {
        Self {
            catalogue_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    pub(crate) book_id: Option<i64>,
    pub(crate) changes: BookChanges,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: Option<i64>, changes: BookChanges) -> Self {
        Self {
            book_id,
            changes,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub book_id: i64,
}

impl UpdateBookCommandResponse {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book_id = req.book_id.ok_or_else(|| CommandError::NotFound {
            message: "book id is required".to_string(),
        })?;
        // The path id must agree with the form's id, otherwise the edit targets
        // a different record than the one the form was rendered for.
        if book_id != req.changes.id {
            return Err(CommandError::NotFound {
                message: format!("book {} does not match the submitted record", book_id),
            });
        }
        self.catalogue_service.update_book(&req.changes).await
            .map_err(CommandError::from).map(|_| UpdateBookCommandResponse::new(book_id))
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use crate::books::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::books::dto::BookChanges;
    use crate::books::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    fn test_command(server: &MockServer) -> UpdateBookCommand {
        let config = Configuration {
            books_api_url: server.base_url(),
            ..Configuration::from_env()
        };
        UpdateBookCommand::new(factory::create_catalogue_service(&config, reqwest::Client::new()))
    }

    fn sample_changes(id: i64) -> BookChanges {
        BookChanges {
            id,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            synopsis: "Spice.".to_string(),
            release_year: 1965,
            cover_url: "c".to_string(),
        }
    }

    #[tokio::test]
    async fn test_should_run_update_book() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::PUT).path("/books/9");
            then.status(204);
        });

        let res = test_command(&server)
            .execute(UpdateBookCommandRequest::new(Some(9), sample_changes(9)))
            .await.expect("should update book");
        assert_eq!(9, res.book_id);
    }

    #[tokio::test]
    async fn test_should_reject_update_with_mismatched_id() {
        let server = MockServer::start();
        let update_mock = server.mock(|when, then| {
            when.method(Method::PUT).path("/books/9");
            then.status(204);
        });

        let err = test_command(&server)
            .execute(UpdateBookCommandRequest::new(Some(8), sample_changes(9)))
            .await.unwrap_err();
        assert!(matches!(err, CommandError::NotFound { message: _ }));
        assert_eq!(0, update_mock.calls());
    }

    #[tokio::test]
    async fn test_should_reject_update_without_id() {
        let server = MockServer::start();

        let err = test_command(&server)
            .execute(UpdateBookCommandRequest::new(None, sample_changes(9)))
            .await.unwrap_err();
        assert!(matches!(err, CommandError::NotFound { message: _ }));
    }
}
