use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    response::{Json, Redirect},
};
use serde::Serialize;
use crate::books::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::books::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::books::command::get_book_details_cmd::{GetBookDetailsCommand, GetBookDetailsCommandRequest, GetBookDetailsCommandResponse};
use crate::books::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::books::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::books::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::books::domain::CatalogueService;
use crate::books::dto::{BookChanges, BookDraft, CoverUpload};
use crate::books::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, PageError};

fn build_service(state: &AppState) -> Box<dyn CatalogueService> {
    factory::create_catalogue_service(&state.config, state.client.clone())
}

// The create form carries no prefilled fields.
#[derive(Debug, Serialize)]
pub(crate) struct NewBookForm {}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, PageError> {
    let svc = build_service(&state);
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::new()).await?;
    Ok(Json(res))
}

pub(crate) async fn book_details(
    State(state): State<AppState>,
    id: Option<Path<i64>>) -> Result<Json<GetBookDetailsCommandResponse>, PageError> {
    let req = GetBookDetailsCommandRequest::new(id.map(|Path(id)| id));
    let svc = build_service(&state);
    let res = GetBookDetailsCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn new_book_form() -> Json<NewBookForm> {
    Json(NewBookForm {})
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    multipart: Multipart) -> Result<Redirect, PageError> {
    let req = parse_book_form(multipart).await?;
    let svc = build_service(&state);
    let _ = AddBookCommand::new(svc).execute(req).await?;
    Ok(Redirect::to("/books"))
}

pub(crate) async fn edit_book_form(
    State(state): State<AppState>,
    id: Option<Path<i64>>) -> Result<Json<GetBookCommandResponse>, PageError> {
    let req = GetBookCommandRequest::new(id.map(|Path(id)| id));
    let svc = build_service(&state);
    let res = GetBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    id: Option<Path<i64>>,
    axum::Form(changes): axum::Form<BookChanges>) -> Result<Redirect, PageError> {
    let req = UpdateBookCommandRequest::new(id.map(|Path(id)| id), changes);
    let svc = build_service(&state);
    let res = UpdateBookCommand::new(svc).execute(req).await?;
    Ok(Redirect::to(format!("/books/details/{}", res.book_id).as_str()))
}

pub(crate) async fn delete_book_form(
    State(state): State<AppState>,
    id: Option<Path<i64>>) -> Result<Json<GetBookCommandResponse>, PageError> {
    let req = GetBookCommandRequest::new(id.map(|Path(id)| id));
    let svc = build_service(&state);
    let res = GetBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    id: Option<Path<i64>>) -> Result<Redirect, PageError> {
    let req = RemoveBookCommandRequest::new(id.map(|Path(id)| id));
    let svc = build_service(&state);
    let _ = RemoveBookCommand::new(svc).execute(req).await?;
    Ok(Redirect::to("/books"))
}

// Pulls the create-form fields out of the multipart body. Field names mirror
// the browser form, with the cover file posted under coverURL.
async fn parse_book_form(mut multipart: Multipart) -> Result<AddBookCommandRequest, PageError> {
    let mut draft = BookDraft::new("", "", "", 0);
    let mut cover = None;
    while let Some(field) = multipart.next_field().await.map_err(form_to_page_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => draft.title = field.text().await.map_err(form_to_page_error)?,
            "author" => draft.author = field.text().await.map_err(form_to_page_error)?,
            "synopsis" => draft.synopsis = field.text().await.map_err(form_to_page_error)?,
            "releaseYear" => {
                draft.release_year = field.text().await.map_err(form_to_page_error)?
                    .parse().unwrap_or_default();
            }
            "coverURL" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(form_to_page_error)?;
                cover = Some(CoverUpload::new(file_name.as_str(), content_type.as_str(), bytes.to_vec()));
            }
            _ => {}
        }
    }
    Ok(AddBookCommandRequest::new(draft, cover))
}

fn form_to_page_error(err: MultipartError) -> PageError {
    PageError::Server {
        message: err.to_string(),
    }
}
