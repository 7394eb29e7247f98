use serde::{Deserialize, Serialize};

// SearchHitDto is one ranked hit from the managed index, carrying the stored
// projection of the book record plus the index relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SearchHitDto {
    #[serde(rename = "@search.score")]
    pub score: f64,
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "CoverURL")]
    pub cover_url: String,
}
