use serde::{Deserialize, Serialize};

// ReviewDto mirrors the remote API's review record, PascalCase on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ReviewDto {
    pub id: i64,
    pub book_id: i64,
    pub reviewer_name: String,
    pub rating: i32,
    pub comment: String,
}

// NewReview carries the add-review form fields; the serde names double as the
// outbound url-encoded field names the remote API expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewReview {
    pub book_id: i64,
    pub reviewer_name: String,
    pub rating: i32,
    pub comment: String,
}

impl NewReview {
    pub fn new(book_id: i64, reviewer_name: &str, rating: i32, comment: &str) -> Self {
        Self {
            book_id,
            reviewer_name: reviewer_name.to_string(),
            rating,
            comment: comment.to_string(),
        }
    }
}
