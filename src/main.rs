mod books;
mod catalog;
mod core;
mod utils;

use std::net::SocketAddr;
use axum::{
    routing::get,
    routing::post,
    Router,
};
use tracing::info;
use crate::books::factory::create_book_repository;
use crate::catalog::controller::{add_book, find_all_books, find_book_by_id, remove_book, update_book};
use crate::core::controller::AppState;
use crate::utils::log::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let state = AppState::new("dev", create_book_repository());
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.http_port));
    info!("bookshelf api ({}) listening on {}", state.config.env_name, addr);

    let app = Router::new()
        .route("/books", post(add_book).get(find_all_books))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .with_state(state);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
