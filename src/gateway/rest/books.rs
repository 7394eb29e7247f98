use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::log::info;
use crate::books::dto::{BookChanges, BookDraft, CoverUpload};
use crate::core::catalogue::CatalogueResult;
use crate::gateway::api::{BookApi, RemoteReply};
use crate::gateway::rest::read_reply;

// RestBookApi talks to the books resource of the remote catalogue API.
#[derive(Debug, Clone)]
pub(crate) struct RestBookApi {
    client: reqwest::Client,
    // `{base}/books/`, the trailing slash is part of the remote contract
    books_url: String,
}

impl RestBookApi {
    pub(crate) fn new(client: reqwest::Client, api_base_url: &str) -> Self {
        Self {
            client,
            books_url: format!("{}/books/", api_base_url.trim_end_matches('/')),
        }
    }

    fn book_url(&self, id: i64) -> String {
        format!("{}{}", self.books_url, id)
    }
}

#[async_trait]
impl BookApi for RestBookApi {
    async fn fetch_all(&self) -> CatalogueResult<RemoteReply> {
        let response = self.client.get(self.books_url.as_str()).send().await?;
        read_reply(response).await
    }

    async fn fetch(&self, id: i64) -> CatalogueResult<RemoteReply> {
        let response = self.client.get(self.book_url(id).as_str()).send().await?;
        read_reply(response).await
    }

    async fn create(&self, draft: &BookDraft, cover: &CoverUpload) -> CatalogueResult<RemoteReply> {
        // the file part carries the browser's file name and no content type,
        // the remote API sniffs the payload itself
        let part = Part::bytes(cover.bytes.clone()).file_name(cover.file_name.clone());
        let form = Form::new()
            .text("title", draft.title.clone())
            .text("author", draft.author.clone())
            .text("synopsis", draft.synopsis.clone())
            .text("releaseYear", draft.release_year.to_string())
            .part("coverURL", part);
        info!("posting new book {} with cover {}", draft.title, cover.file_name);
        let response = self.client.post(self.books_url.as_str()).multipart(form).send().await?;
        read_reply(response).await
    }

    async fn update(&self, changes: &BookChanges) -> CatalogueResult<RemoteReply> {
        let response = self.client.put(self.book_url(changes.id).as_str())
            .form(changes).send().await?;
        read_reply(response).await
    }

    async fn delete(&self, id: i64) -> CatalogueResult<RemoteReply> {
        info!("deleting book {}", id);
        let response = self.client.delete(self.book_url(id).as_str()).send().await?;
        read_reply(response).await
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use httpmock::prelude::*;
    use serde_json::json;
    use crate::books::dto::{BookChanges, BookDraft, BookDto, CoverUpload};
    use crate::gateway::api::BookApi;
    use crate::gateway::rest::books::RestBookApi;

    fn test_api(server: &MockServer) -> RestBookApi {
        RestBookApi::new(reqwest::Client::new(), server.base_url().as_str())
    }

    #[tokio::test]
    async fn test_should_fetch_all_books() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(Method::GET).path("/books/");
            then.status(200).json_body(json!([
                {"Id": 1, "Title": "Dune", "Author": "Frank Herbert", "Synopsis": "s", "ReleaseYear": 1965, "CoverURL": "c"}
            ]));
        });

        let reply = test_api(&server).fetch_all().await.expect("should fetch books");
        assert_eq!(StatusCode::OK, reply.status);
        let books: Vec<BookDto> = reply.json().expect("should parse books");
        assert_eq!(1, books.len());
        assert_eq!(1, mock.calls());
    }

    #[tokio::test]
    async fn test_should_fetch_book_by_id() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(Method::GET).path("/books/42");
            then.status(200).json_body(json!(
                {"Id": 42, "Title": "Dune", "Author": "Frank Herbert", "Synopsis": "s", "ReleaseYear": 1965, "CoverURL": "c"}
            ));
        });

        let reply = test_api(&server).fetch(42).await.expect("should fetch book");
        let book: BookDto = reply.json().expect("should parse book");
        assert_eq!(42, book.id);
        assert_eq!(1, mock.calls());
    }

    #[tokio::test]
    async fn test_should_post_multipart_book() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(Method::POST).path("/books/")
                .body_includes("name=\"title\"")
                .body_includes("Dune")
                .body_includes("name=\"releaseYear\"")
                .body_includes("1965")
                .body_includes("name=\"coverURL\"; filename=\"dune.png\"");
            then.status(201);
        });

        let draft = BookDraft::new("Dune", "Frank Herbert", "Spice.", 1965);
        let cover = CoverUpload::new("dune.png", "image/png", vec![137, 80, 78, 71]);
        let reply = test_api(&server).create(&draft, &cover).await.expect("should post book");
        assert_eq!(StatusCode::CREATED, reply.status);
        assert_eq!(1, mock.calls());
    }

    #[tokio::test]
    async fn test_should_put_book_changes_as_form() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(Method::PUT).path("/books/9")
                .header("content-type", "application/x-www-form-urlencoded")
                .body("id=9&title=Dune&author=Frank+Herbert&synopsis=Spice.&releaseYear=1965&coverURL=c");
            then.status(204);
        });

        let changes = BookChanges {
            id: 9,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            synopsis: "Spice.".to_string(),
            release_year: 1965,
            cover_url: "c".to_string(),
        };
        let reply = test_api(&server).update(&changes).await.expect("should put changes");
        assert_eq!(StatusCode::NO_CONTENT, reply.status);
        assert_eq!(1, mock.calls());
    }

    #[tokio::test]
    async fn test_should_delete_book() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(Method::DELETE).path("/books/7");
            then.status(204);
        });

        let reply = test_api(&server).delete(7).await.expect("should delete book");
        assert_eq!(StatusCode::NO_CONTENT, reply.status);
        assert_eq!(1, mock.calls());
    }

    #[tokio::test]
    async fn test_should_pass_through_failure_status() {
        let server = MockServer::start();
        let _mock = server.mock(|when, then| {
            when.method(Method::GET).path("/books/");
            then.status(500).body("boom");
        });

        let reply = test_api(&server).fetch_all().await.expect("transport should succeed");
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, reply.status);
        assert_eq!(b"boom".to_vec(), reply.body);
    }
}
