use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::CatalogueService;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};

// Fetches the bare book record, backing the edit and delete confirmation forms.
pub(crate) struct GetBookCommand {
    catalogue_service: Box<dyn CatalogueService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalogue_service: Box<dyn CatalogueService>) -> Self {
        Self {
            catalogue_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) book_id: Option<i64>,
}

impl GetBookCommandRequest {
    pub fn new(book_id: Option<i64>) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        let book_id = req.book_id.ok_or_else(|| CommandError::NotFound {
            message: "book id is required".to_string(),
        })?;
        self.catalogue_service.find_book_by_id(book_id).await
            .map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;
    use crate::books::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::books::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    fn test_command(server: &MockServer) -> GetBookCommand {
        let config = Configuration {
            books_api_url: server.base_url(),
            ..Configuration::from_env()
        };
        GetBookCommand::new(factory::create_catalogue_service(&config, reqwest::Client::new()))
    }

    #[tokio::test]
    async fn test_should_run_get_book() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::GET).path("/books/9");
            then.status(200).json_body(json!(
                {"Id": 9, "Title": "Dune", "Author": "Frank Herbert",
                 "Synopsis": "Spice.", "ReleaseYear": 1965, "CoverURL": "c"}
            ));
        });

        let res = test_command(&server).execute(GetBookCommandRequest::new(Some(9)))
            .await.expect("should get book");
        assert_eq!("Dune", res.book.title);
    }

    #[tokio::test]
    async fn test_should_require_book_id() {
        let server = MockServer::start();
        let remote_mock = server.mock(|when, then| {
            when.method(Method::GET);
            then.status(200);
        });

        let err = test_command(&server).execute(GetBookCommandRequest::new(None))
            .await.unwrap_err();
        assert!(matches!(err, CommandError::NotFound { message: _ }));
        assert_eq!(0, remote_mock.calls());
    }
}
