use async_trait::async_trait;
use axum::http::StatusCode;

use crate::books::domain::CatalogueService;
use crate::books::dto::{BookChanges, BookDraft, BookDto, CoverUpload};
use crate::reviews::dto::ReviewDto;
use crate::core::catalogue::{CatalogueError, CatalogueResult};
use crate::core::domain::Configuration;
use crate::core::status::{
    classify, sign_in_error, status_error, status_error_brief, ReasonSeparator, RemoteOutcome,
    ACCEPT_DELETE_BOOK, ACCEPT_FETCH, ACCEPT_PURGE_REVIEWS, ACCEPT_WRITE, NOT_AN_IMAGE_ERROR,
};
use crate::gateway::api::{BookApi, ReviewApi};

// Domain service implementing the catalogue behaviors over the remote books store.
pub(crate) struct CatalogueServiceImpl {
    book_api: Box<dyn BookApi>,
    review_api: Box<dyn ReviewApi>,
}

impl CatalogueServiceImpl {
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
impl CatalogueService for CatalogueServiceImpl {
    async fn list_books(&self) -> CatalogueResult<Vec<BookDto>> {
        let reply = self.book_api.fetch_all().await?;
        match classify(reply.status, ACCEPT_FETCH) {
            RemoteOutcome::Success => reply.json::<Vec<BookDto>>(),
            _ => Err(CatalogueError::remote(
                status_error(reply.status, ReasonSeparator::Colon).as_str(),
                Some(reply.status.to_string()),
            )),
        }
    }

    async fn compose_book_details(&self, id: i64) -> CatalogueResult<BookDto> {
        // Both fetches go out before any branching, book failures take precedence.
        let book_reply = self.book_api.fetch(id).await?;
        let review_reply = self.review_api.fetch_for_book(id).await?;
        if classify(book_reply.status, ACCEPT_FETCH) != RemoteOutcome::Success {
            return Err(CatalogueError::remote(
                status_error(book_reply.status, ReasonSeparator::Semicolon).as_str(),
                Some(book_reply.status.to_string()),
            ));
        }
        if classify(review_reply.status, ACCEPT_FETCH) != RemoteOutcome::Success {
            return Err(CatalogueError::remote(
                status_error(review_reply.status, ReasonSeparator::Semicolon).as_str(),
                Some(review_reply.status.to_string()),
            ));
        }
        let mut book = book_reply.json::<BookDto>()?;
        book.reviews = review_reply.json::<Vec<ReviewDto>>()?;
        Ok(book)
    }

    async fn add_book(&self, draft: &BookDraft, cover: Option<&CoverUpload>) -> CatalogueResult<()> {
        let cover = match cover {
            Some(cover) if cover.is_image() => cover,
            _ => {
                return Err(CatalogueError::validation(
                    NOT_AN_IMAGE_ERROR,
                    Some(StatusCode::UNSUPPORTED_MEDIA_TYPE.to_string()),
                ));
            }
        };
        let reply = self.book_api.create(draft, cover).await?;
        match classify(reply.status, ACCEPT_WRITE) {
            RemoteOutcome::Success => Ok(()),
            _ => Err(CatalogueError::remote(
                status_error(reply.status, ReasonSeparator::Semicolon).as_str(),
                Some(reply.status.to_string()),
            )),
        }
    }

    async fn find_book_by_id(&self, id: i64) -> CatalogueResult<BookDto> {
        let reply = self.book_api.fetch(id).await?;
        match classify(reply.status, ACCEPT_FETCH) {
            RemoteOutcome::Success => reply.json::<BookDto>(),
            _ => Err(CatalogueError::remote(
                status_error(reply.status, ReasonSeparator::Colon).as_str(),
                Some(reply.status.to_string()),
            )),
        }
    }

    async fn update_book(&self, changes: &BookChanges) -> CatalogueResult<()> {
        let reply = self.book_api.update(changes).await?;
        match classify(reply.status, ACCEPT_WRITE) {
            RemoteOutcome::Success => Ok(()),
            _ => Err(CatalogueError::remote(
                status_error_brief(reply.status).as_str(),
                Some(reply.status.to_string()),
            )),
        }
    }

    async fn remove_book(&self, id: i64) -> CatalogueResult<()> {
        // Reviews are purged first so the book never outlives orphaned reviews.
        let purge = self.review_api.delete_for_book(id).await?;
        if classify(purge.status, ACCEPT_PURGE_REVIEWS) != RemoteOutcome::Success {
            return Err(CatalogueError::remote(
                status_error_brief(purge.status).as_str(),
                Some(purge.status.to_string()),
            ));
        }
        let reply = self.book_api.delete(id).await?;
        match classify(reply.status, ACCEPT_DELETE_BOOK) {
            RemoteOutcome::Success => Ok(()),
            RemoteOutcome::Unauthorized => Err(CatalogueError::remote(
                sign_in_error(reply.status).as_str(),
                Some(reply.status.to_string()),
            )),
            _ => Err(CatalogueError::remote(
                status_error_brief(reply.status).as_str(),
                Some(reply.status.to_string()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::books::domain::service::CatalogueServiceImpl;
    use crate::books::domain::CatalogueService;
    use crate::books::dto::{BookChanges, BookDraft, CoverUpload};
    use crate::core::catalogue::CatalogueError;
    use crate::core::domain::Configuration;
    use crate::gateway::rest::books::RestBookApi;
    use crate::gateway::rest::reviews::RestReviewApi;

    fn test_service(server: &MockServer) -> CatalogueServiceImpl {
        let client = reqwest::Client::new();
        CatalogueServiceImpl::new(
            &Configuration::from_env(),
            Box::new(RestBookApi::new(client.clone(), server.base_url().as_str())),
            Box::new(RestReviewApi::new(client, server.base_url().as_str())),
        )
    }

    fn sample_book_json(id: i64) -> serde_json::Value {
        json!({
            "Id": id,
            "Title": "Dune",
            "Author": "Frank Herbert",
            "Synopsis": "Spice.",
            "ReleaseYear": 1965,
            "CoverURL": "covers/dune.png",
            "Reviews": null
        })
    }

    #[tokio::test]
    async fn test_should_list_books() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::GET).path("/books/");
            then.status(200)
                .json_body(json!([sample_book_json(1), sample_book_json(2)]));
        });

        let books = test_service(&server).list_books().await.unwrap();
        assert_eq!(2, books.len());
        assert_eq!("Dune", books[0].title);
    }

    #[tokio::test]
    async fn test_should_fail_list_books_with_status_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::GET).path("/books/");
            then.status(500);
        });

        let err = test_service(&server).list_books().await.unwrap_err();
        match err {
            CatalogueError::Remote { message, .. } => {
                assert_eq!("Error. Status code = 500: Internal Server Error", message);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_should_compose_book_details_with_reviews() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::GET).path("/books/7");
            then.status(200).json_body(sample_book_json(7));
        });
        server.mock(|when, then| {
            when.method(Method::GET).path("/reviews/7");
            then.status(200).json_body(json!([
                {"Id": 3, "BookId": 7, "ReviewerName": "sam", "Rating": 4, "Comment": "solid"}
            ]));
        });

        let book = test_service(&server)
            .compose_book_details(7)
            .await
            .unwrap();
        assert_eq!(7, book.id);
        assert_eq!(1, book.reviews.len());
        assert_eq!("sam", book.reviews[0].reviewer_name);
    }

    #[tokio::test]
    async fn test_should_prefer_book_failure_when_composing_details() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::GET).path("/books/7");
            then.status(404);
        });
        let review_mock = server.mock(|when, then| {
            when.method(Method::GET).path("/reviews/7");
            then.status(200).json_body(json!([]));
        });

        let err = test_service(&server)
            .compose_book_details(7)
            .await
            .unwrap_err();
        match err {
            CatalogueError::Remote { message, .. } => {
                assert_eq!("Error. Status code = 404; Not Found", message);
            }
            other => panic!("unexpected error {:?}", other),
        }
        // The review fetch still went out before the book status was inspected.
        assert_eq!(1, review_mock.calls());
    }

    #[tokio::test]
    async fn test_should_compose_identical_details_on_repeat() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::GET).path("/books/7");
            then.status(200).json_body(sample_book_json(7));
        });
        server.mock(|when, then| {
            when.method(Method::GET).path("/reviews/7");
            then.status(200).json_body(json!([
                {"Id": 3, "BookId": 7, "ReviewerName": "sam", "Rating": 4, "Comment": "solid"}
            ]));
        });

        let service = test_service(&server);
        let first = service.compose_book_details(7).await.unwrap();
        let second = service.compose_book_details(7).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_should_report_review_failure_when_composing_details() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::GET).path("/books/7");
            then.status(200).json_body(sample_book_json(7));
        });
        server.mock(|when, then| {
            when.method(Method::GET).path("/reviews/7");
            then.status(500);
        });

        let err = test_service(&server)
            .compose_book_details(7)
            .await
            .unwrap_err();
        match err {
            CatalogueError::Remote { message, .. } => {
                assert_eq!("Error. Status code = 500; Internal Server Error", message);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_should_add_book_with_cover() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::POST).path("/books/");
            then.status(201);
        });

        let draft = BookDraft::new("Dune", "Frank Herbert", "Spice.", 1965);
        let cover = CoverUpload::new("dune.png", "image/png", vec![1, 2, 3]);
        test_service(&server)
            .add_book(&draft, Some(&cover))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_should_reject_non_image_cover_without_remote_call() {
        let server = MockServer::start();
        let create_mock = server.mock(|when, then| {
            when.method(Method::POST).path("/books/");
            then.status(201);
        });

        let draft = BookDraft::new("Dune", "Frank Herbert", "Spice.", 1965);
        let cover = CoverUpload::new("notes.txt", "text/plain", vec![1]);
        let err = test_service(&server)
            .add_book(&draft, Some(&cover))
            .await
            .unwrap_err();
        match err {
            CatalogueError::Validation { message, .. } => {
                assert_eq!("Error. Status code = 415; File is not an image.", message);
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(0, create_mock.calls());
    }

    #[tokio::test]
    async fn test_should_reject_missing_cover_without_remote_call() {
        let server = MockServer::start();
        let create_mock = server.mock(|when, then| {
            when.method(Method::POST).path("/books/");
            then.status(201);
        });

        let draft = BookDraft::new("Dune", "Frank Herbert", "Spice.", 1965);
        let err = test_service(&server)
            .add_book(&draft, None)
            .await
            .unwrap_err();
        match err {
            CatalogueError::Validation { message, .. } => {
                assert_eq!("Error. Status code = 415; File is not an image.", message);
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(0, create_mock.calls());
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::PUT).path("/books/9");
            then.status(204);
        });

        let changes = BookChanges {
            id: 9,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            synopsis: "Spice.".to_string(),
            release_year: 1965,
            cover_url: "covers/dune.png".to_string(),
        };
        test_service(&server).update_book(&changes).await.unwrap();
    }

    #[tokio::test]
    async fn test_should_fail_update_book_with_brief_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::PUT).path("/books/9");
            then.status(500);
        });

        let changes = BookChanges {
            id: 9,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            synopsis: "Spice.".to_string(),
            release_year: 1965,
            cover_url: "covers/dune.png".to_string(),
        };
        let err = test_service(&server).update_book(&changes).await.unwrap_err();
        match err {
            CatalogueError::Remote { message, .. } => {
                assert_eq!("Error. Status code = 500", message);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_should_remove_book_and_reviews() {
        let server = MockServer::start();
        let purge_mock = server.mock(|when, then| {
            when.method(Method::DELETE).path("/reviews/5");
            then.status(204);
        });
        let delete_mock = server.mock(|when, then| {
            when.method(Method::DELETE).path("/books/5");
            then.status(204);
        });

        test_service(&server).remove_book(5).await.unwrap();
        assert_eq!(1, purge_mock.calls());
        assert_eq!(1, delete_mock.calls());
    }

    #[tokio::test]
    async fn test_should_remove_book_when_it_has_no_reviews() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::DELETE).path("/reviews/5");
            then.status(404);
        });
        let delete_mock = server.mock(|when, then| {
            when.method(Method::DELETE).path("/books/5");
            then.status(204);
        });

        test_service(&server).remove_book(5).await.unwrap();
        assert_eq!(1, delete_mock.calls());
    }

    #[tokio::test]
    async fn test_should_stop_removal_when_review_purge_fails() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::DELETE).path("/reviews/5");
            then.status(500);
        });
        let delete_mock = server.mock(|when, then| {
            when.method(Method::DELETE).path("/books/5");
            then.status(204);
        });

        let err = test_service(&server).remove_book(5).await.unwrap_err();
        match err {
            CatalogueError::Remote { message, .. } => {
                assert_eq!("Error. Status code = 500", message);
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(0, delete_mock.calls());
    }

    #[tokio::test]
    async fn test_should_ask_to_sign_in_when_removal_is_unauthorized() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::DELETE).path("/reviews/5");
            then.status(204);
        });
        server.mock(|when, then| {
            when.method(Method::DELETE).path("/books/5");
            then.status(401);
        });

        let err = test_service(&server).remove_book(5).await.unwrap_err();
        match err {
            CatalogueError::Remote { message, .. } => {
                assert_eq!("Please sign in again. Unauthorized", message);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_should_fail_removal_with_brief_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::DELETE).path("/reviews/5");
            then.status(204);
        });
        server.mock(|when, then| {
            when.method(Method::DELETE).path("/books/5");
            then.status(500);
        });

        let err = test_service(&server).remove_book(5).await.unwrap_err();
        match err {
            CatalogueError::Remote { message, .. } => {
                assert_eq!("Error. Status code = 500", message);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
