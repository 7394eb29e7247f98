use axum::{
    extract::State,
    response::Json,
};
use serde::Deserialize;
use crate::core::command::Command;
use crate::core::controller::{AppState, PageError};
use crate::search::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::search::domain::SearchService;
use crate::search::factory;

fn build_service(state: &AppState) -> Box<dyn SearchService> {
    factory::create_search_service(&state.config, state.client.clone())
}

// Form shape of the search box post.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchForm {
    #[serde(rename = "searchText")]
    pub(crate) search_text: Option<String>,
}

// Landing on the search page runs no query at all.
pub(crate) async fn search_form() -> Json<SearchBooksCommandResponse> {
    Json(SearchBooksCommandResponse::new(String::new(), vec![]))
}

pub(crate) async fn search_books(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<SearchForm>) -> Result<Json<SearchBooksCommandResponse>, PageError> {
    let req = SearchBooksCommandRequest::new(form.search_text);
    let svc = build_service(&state);
    let res = SearchBooksCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
