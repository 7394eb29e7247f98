use std::fmt;
use std::fmt::{Display, Formatter};
use axum::http::StatusCode;

// Statuses each operation accepts from the remote API. Anything outside the
// set fails the operation, so the branching stays a table lookup.
pub(crate) const ACCEPT_FETCH: &[StatusCode] = &[StatusCode::OK];
pub(crate) const ACCEPT_WRITE: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED, StatusCode::NO_CONTENT];
pub(crate) const ACCEPT_DELETE_BOOK: &[StatusCode] = &[StatusCode::OK, StatusCode::NO_CONTENT];
// A 404 from the review purge means the book had no reviews left to delete.
pub(crate) const ACCEPT_PURGE_REVIEWS: &[StatusCode] = &[StatusCode::NO_CONTENT, StatusCode::NOT_FOUND];

pub(crate) const NOT_AN_IMAGE_ERROR: &str = "Error. Status code = 415; File is not an image.";

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum RemoteOutcome {
    Success,
    Unauthorized,
    NotFound,
    Other,
}

// Unauthorized and NotFound are only reported when the accept set does not
// already claim them, so a tolerated 404 still counts as Success.
pub(crate) fn classify(status: StatusCode, accepted: &[StatusCode]) -> RemoteOutcome {
    if accepted.contains(&status) {
        RemoteOutcome::Success
    } else if status == StatusCode::UNAUTHORIZED {
        RemoteOutcome::Unauthorized
    } else if status == StatusCode::NOT_FOUND {
        RemoteOutcome::NotFound
    } else {
        RemoteOutcome::Other
    }
}

// The error page renders the failing status under two historical separators,
// kept apart so each page keeps its established wording.
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum ReasonSeparator {
    Colon,
    Semicolon,
}

impl Display for ReasonSeparator {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ReasonSeparator::Colon => write!(f, ":"),
            ReasonSeparator::Semicolon => write!(f, ";"),
        }
    }
}

pub(crate) fn status_error(status: StatusCode, separator: ReasonSeparator) -> String {
    format!("Error. Status code = {}{} {}", status.as_u16(), separator, reason(status))
}

pub(crate) fn status_error_brief(status: StatusCode) -> String {
    format!("Error. Status code = {}", status.as_u16())
}

pub(crate) fn sign_in_error(status: StatusCode) -> String {
    format!("Please sign in again. {}", reason(status))
}

fn reason(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown")
}
