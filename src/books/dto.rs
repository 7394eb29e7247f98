use serde::{Deserialize, Deserializer, Serialize};
use crate::reviews::dto::ReviewDto;

// cover files the upload form accepts when the content type is not an image type
const IMAGE_FILE_SUFFIXES: [&str; 4] = [".jpg", ".png", ".gif", ".jpeg"];

// BookDto mirrors the remote API's book record, PascalCase on the wire.
// Reviews are only populated by the detail composition and the remote list
// payloads may carry them as null, so the field tolerates both shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub synopsis: String,
    pub release_year: i32,
    #[serde(rename = "CoverURL")]
    pub cover_url: String,
    #[serde(default, deserialize_with = "reviews_or_empty")]
    pub reviews: Vec<ReviewDto>,
}

fn reviews_or_empty<'de, D>(deserializer: D) -> Result<Vec<ReviewDto>, D::Error>
    where D: Deserializer<'de> {
    let reviews = Option::<Vec<ReviewDto>>::deserialize(deserializer)?;
    Ok(reviews.unwrap_or_default())
}

// BookDraft carries the create-form fields; the id and cover url are assigned
// by the remote API once the upload lands.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BookDraft {
    pub title: String,
    pub author: String,
    pub synopsis: String,
    pub release_year: i32,
}

impl BookDraft {
    pub fn new(title: &str, author: &str, synopsis: &str, release_year: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            synopsis: synopsis.to_string(),
            release_year,
        }
    }
}

// BookChanges carries the edit-form fields; the serde names double as the
// outbound url-encoded field names the remote API expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookChanges {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub synopsis: String,
    pub release_year: i32,
    #[serde(rename = "coverURL")]
    pub cover_url: String,
}

// CoverUpload is the file part of the create form as it arrived from the browser
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CoverUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl CoverUpload {
    pub fn new(file_name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            bytes,
        }
    }

    // an upload counts as an image by declared content type, or failing that
    // by a case-insensitive match on the file suffix
    pub(crate) fn is_image(&self) -> bool {
        if self.content_type.contains("image") {
            return true;
        }
        let file_name = self.file_name.to_lowercase();
        IMAGE_FILE_SUFFIXES.iter().any(|suffix| file_name.ends_with(suffix))
    }
}
