use async_trait::async_trait;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use crate::books::dto::{BookChanges, BookDraft, CoverUpload};
use crate::core::catalogue::{CatalogueError, CatalogueResult};
use crate::reviews::dto::NewReview;

// RemoteReply is a transported response from the remote API: the status the
// operations branch on and the raw body, parsed only after the status is
// accepted. Transport failures never become a reply.
#[derive(Debug, Clone)]
pub(crate) struct RemoteReply {
    pub(crate) status: StatusCode,
    pub(crate) body: Vec<u8>,
}

impl RemoteReply {
    pub(crate) fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self {
            status,
            body,
        }
    }

    pub(crate) fn json<T: DeserializeOwned>(&self) -> CatalogueResult<T> {
        serde_json::from_slice(&self.body).map_err(CatalogueError::from)
    }
}

#[async_trait]
pub(crate) trait BookApi: Sync + Send {
    async fn fetch_all(&self) -> CatalogueResult<RemoteReply>;
    async fn fetch(&self, id: i64) -> CatalogueResult<RemoteReply>;
    async fn create(&self, draft: &BookDraft, cover: &CoverUpload) -> CatalogueResult<RemoteReply>;
    async fn update(&self, changes: &BookChanges) -> CatalogueResult<RemoteReply>;
    async fn delete(&self, id: i64) -> CatalogueResult<RemoteReply>;
}

#[async_trait]
pub(crate) trait ReviewApi: Sync + Send {
    async fn fetch_for_book(&self, book_id: i64) -> CatalogueResult<RemoteReply>;
    async fn create(&self, review: &NewReview) -> CatalogueResult<RemoteReply>;
    async fn delete_for_book(&self, book_id: i64) -> CatalogueResult<RemoteReply>;
}
