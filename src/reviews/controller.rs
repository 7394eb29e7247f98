use axum::{
    extract::{Path, Query, State},
    response::{Json, Redirect},
};
use serde::Deserialize;
use crate::core::command::Command;
use crate::core::controller::{AppState, PageError};
use crate::reviews::command::add_review_cmd::{AddReviewCommand, AddReviewCommandRequest};
use crate::reviews::command::get_review_form_cmd::{GetReviewFormCommand, GetReviewFormCommandRequest, GetReviewFormCommandResponse};
use crate::reviews::domain::ReviewService;
use crate::reviews::dto::NewReview;
use crate::reviews::factory;

fn build_service(state: &AppState) -> Box<dyn ReviewService> {
    factory::create_review_service(&state.config, state.client.clone())
}

// Query shape of the legacy review-details link, bookId comes from the browser.
#[derive(Debug, Deserialize)]
pub(crate) struct ReviewDetailsParams {
    #[serde(rename = "bookId")]
    pub(crate) book_id: Option<i64>,
}

pub(crate) async fn add_review_form(
    State(state): State<AppState>,
    book_id: Option<Path<i64>>) -> Result<Json<GetReviewFormCommandResponse>, PageError> {
    let req = GetReviewFormCommandRequest::new(book_id.map(|Path(id)| id));
    let svc = build_service(&state);
    let res = GetReviewFormCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_review(
    State(state): State<AppState>,
    axum::Form(review): axum::Form<NewReview>) -> Result<Redirect, PageError> {
    let req = AddReviewCommandRequest::new(review);
    let svc = build_service(&state);
    let res = AddReviewCommand::new(svc).execute(req).await?;
    Ok(Redirect::to(format!("/books/details/{}", res.book_id).as_str()))
}

// Reviews have no standalone detail page, the link forwards to the book.
pub(crate) async fn review_details(
    Query(params): Query<ReviewDetailsParams>) -> Result<Redirect, PageError> {
    let book_id = params.book_id.ok_or(PageError::NotFound)?;
    Ok(Redirect::to(format!("/books/details/{}", book_id).as_str()))
}
