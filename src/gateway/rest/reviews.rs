use async_trait::async_trait;
use tracing::log::info;
use crate::core::catalogue::CatalogueResult;
use crate::gateway::api::{RemoteReply, ReviewApi};
use crate::gateway::rest::read_reply;
use crate::reviews::dto::NewReview;

// RestReviewApi talks to the reviews resource of the remote catalogue API.
// Reviews hang off books, so fetch and delete address a book id.
#[derive(Debug, Clone)]
pub(crate) struct RestReviewApi {
    client: reqwest::Client,
    // `{base}/reviews/`, the trailing slash is part of the remote contract
    reviews_url: String,
}

impl RestReviewApi {
    pub(crate) fn new(client: reqwest::Client, api_base_url: &str) -> Self {
        Self {
            client,
            reviews_url: format!("{}/reviews/", api_base_url.trim_end_matches('/')),
        }
    }

    fn book_reviews_url(&self, book_id: i64) -> String {
        format!("{}{}", self.reviews_url, book_id)
    }
}

#[async_trait]
impl ReviewApi for RestReviewApi {
    async fn fetch_for_book(&self, book_id: i64) -> CatalogueResult<RemoteReply> {
        let response = self.client.get(self.book_reviews_url(book_id).as_str()).send().await?;
        read_reply(response).await
    }

    async fn create(&self, review: &NewReview) -> CatalogueResult<RemoteReply> {
        // the remote create route is bound without the trailing slash
        let response = self.client.post(self.reviews_url.trim_end_matches('/'))
            .form(review).send().await?;
        read_reply(response).await
    }

    async fn delete_for_book(&self, book_id: i64) -> CatalogueResult<RemoteReply> {
        info!("deleting reviews of book {}", book_id);
        let response = self.client.delete(self.book_reviews_url(book_id).as_str()).send().await?;
        read_reply(response).await
    }
}
