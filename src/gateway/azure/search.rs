use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::log::info;
use crate::core::domain::SearchOptions;
use crate::gateway::index::{SearchIndex, SearchIndexError};
use crate::search::dto::SearchHitDto;

const API_VERSION: &str = "2020-06-30";
// the projection stored in the index for the result list
const SELECT_FIELDS: &str = "Id,Title,Author,CoverURL";

// AzureSearchIndex queries the managed search service over its documents REST
// surface, authenticating with the read-only query key.
pub(crate) struct AzureSearchIndex {
    client: reqwest::Client,
    query_url: String,
    query_key: String,
}

impl AzureSearchIndex {
    pub(crate) fn new(client: reqwest::Client, options: &SearchOptions) -> Self {
        Self {
            client,
            query_url: format!("{}/indexes/{}/docs/search?api-version={}",
                               options.base_url(), options.index_name, API_VERSION),
            query_key: options.query_key.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SearchQuery<'a> {
    search: &'a str,
    select: &'a str,
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    value: Vec<SearchHitDto>,
}

#[async_trait]
impl SearchIndex for AzureSearchIndex {
    async fn search(&self, text: &str) -> Result<Vec<SearchHitDto>, SearchIndexError> {
        let query = SearchQuery { search: text, select: SELECT_FIELDS };
        let response = self.client.post(self.query_url.as_str())
            .header("api-key", self.query_key.as_str())
            .json(&query)
            .send().await?;
        if !response.status().is_success() {
            return Err(SearchIndexError::new(
                format!("search request failed with status {}", response.status()).as_str()));
        }
        let page = response.json::<SearchPage>().await?;
        info!("search for {:?} returned {} hits", text, page.value.len());
        Ok(page.value)
    }
}

impl From<reqwest::Error> for SearchIndexError {
    fn from(err: reqwest::Error) -> Self {
        SearchIndexError::new(format!("{}", err).as_str())
    }
}
