use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::CatalogueService;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand {
    catalogue_service: Box<dyn CatalogueService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalogue_service: Box<dyn CatalogueService>) -> Self {
        Self {
            catalogue_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListBooksCommandRequest {}

impl ListBooksCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalogue_service.list_books().await
            .map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;
    use crate::books::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::books::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    fn test_command(server: &MockServer) -> ListBooksCommand {
        let config = Configuration {
            books_api_url: server.base_url(),
            ..Configuration::from_env()
        };
        ListBooksCommand::new(factory::create_catalogue_service(&config, reqwest::Client::new()))
    }

    #[tokio::test]
    async fn test_should_run_list_books() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::GET).path("/books/");
            then.status(200).json_body(json!([
                {"Id": 1, "Title": "Dune", "Author": "Frank Herbert",
                 "Synopsis": "Spice.", "ReleaseYear": 1965, "CoverURL": "c"}
            ]));
        });

        let res = test_command(&server).execute(ListBooksCommandRequest::new())
            .await.expect("should list books");
        assert_eq!(1, res.books.len());
    }

    #[tokio::test]
    async fn test_should_fail_list_books_when_remote_errs() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::GET).path("/books/");
            then.status(502);
        });

        let err = test_command(&server).execute(ListBooksCommandRequest::new())
            .await.unwrap_err();
        assert!(matches!(err, CommandError::Remote { message: _, reason_code: _ }));
    }
}
