mod books;
mod core;
mod gateway;
mod reviews;
mod search;
mod utils;

use std::net::SocketAddr;
use axum::{
    routing::{get, post},
    Router,
};
use tracing::log::info;
use crate::books::controller::{add_book, book_details, delete_book_form, edit_book_form, list_books, new_book_form, remove_book, update_book};
use crate::core::controller::{error_page, AppState};
use crate::core::domain::Configuration;
use crate::reviews::controller::{add_review, add_review_form, review_details};
use crate::search::controller::{search_books, search_form};
use crate::utils::http::{build_http_client, setup_tracing};

fn app(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books))
        .route("/books/details/:id", get(book_details))
        .route("/books/create", get(new_book_form).post(add_book))
        .route("/books/edit/:id", get(edit_book_form).post(update_book))
        .route("/books/delete/:id", get(delete_book_form).post(remove_book))
        .route("/search", get(search_form).post(search_books))
        .route("/reviews/add/:book_id", get(add_review_form))
        .route("/reviews/add", post(add_review))
        .route("/reviews/details", get(review_details))
        .route("/error", get(error_page))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Configuration::from_env();
    let port = config.http_port;
    let client = build_http_client()?;
    let state = AppState::new(config, client);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("books catalogue listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app(state).into_make_service())
        .await?;
    Ok(())
}
