use crate::core::domain::Configuration;
use crate::gateway::api::{BookApi, ReviewApi};
use crate::gateway::azure::search::AzureSearchIndex;
use crate::gateway::index::SearchIndex;
use crate::gateway::rest::books::RestBookApi;
use crate::gateway::rest::reviews::RestReviewApi;

pub(crate) fn create_book_api(config: &Configuration, client: reqwest::Client) -> Box<dyn BookApi> {
    Box::new(RestBookApi::new(client, config.books_api_url.as_str()))
}

pub(crate) fn create_review_api(config: &Configuration, client: reqwest::Client) -> Box<dyn ReviewApi> {
    Box::new(RestReviewApi::new(client, config.books_api_url.as_str()))
}

pub(crate) fn create_search_index(config: &Configuration, client: reqwest::Client) -> Box<dyn SearchIndex> {
    Box::new(AzureSearchIndex::new(client, &config.search))
}
