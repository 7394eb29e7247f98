use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use crate::search::dto::SearchHitDto;

// The managed index speaks through its own client error rather than the
// catalogue taxonomy; callers surface the message as-is.
#[derive(Debug)]
pub(crate) struct SearchIndexError {
    pub(crate) message: String,
}

impl SearchIndexError {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Display for SearchIndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[async_trait]
pub(crate) trait SearchIndex: Sync + Send {
    async fn search(&self, text: &str) -> Result<Vec<SearchHitDto>, SearchIndexError>;
}
