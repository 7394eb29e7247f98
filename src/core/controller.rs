use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use serde::{Deserialize, Serialize};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    // one shared outbound client, cloned into per-request gateways
    pub(crate) client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Configuration, client: reqwest::Client) -> AppState {
        AppState {
            config,
            client,
        }
    }
}

// PageError is the browser-facing side of a failed operation: a bare 404,
// a redirect into the shared error page, or a server fault.
#[derive(Debug)]
pub(crate) enum PageError {
    NotFound,
    ErrorPage {
        message: String,
    },
    Server {
        message: String,
    },
}

pub(crate) fn error_page_path(message: &str) -> String {
    format!("/error?message={}", urlencoding::encode(message))
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound => {
                StatusCode::NOT_FOUND.into_response()
            }
            PageError::ErrorPage { message } => {
                Redirect::to(error_page_path(message.as_str()).as_str()).into_response()
            }
            PageError::Server { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

impl From<CommandError> for PageError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Remote { message, .. } => {
                PageError::ErrorPage { message }
            }
            CommandError::Validation { message, .. } => {
                PageError::ErrorPage { message }
            }
            CommandError::NotFound { .. } => {
                PageError::NotFound
            }
            CommandError::Gateway { message, .. } => {
                PageError::Server { message }
            }
            CommandError::Serialization { message } => {
                PageError::Server { message }
            }
            CommandError::Other { message, .. } => {
                PageError::Server { message }
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorPageParams {
    pub(crate) message: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorPageModel {
    pub(crate) message: String,
}

pub(crate) async fn error_page(Query(params): Query<ErrorPageParams>) -> Json<ErrorPageModel> {
    Json(ErrorPageModel { message: params.message.unwrap_or_default() })
}
