use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use crate::books::dto::NewBookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{ApiResponse, AppState, json_to_server_error, ServerError};

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.book_repository.clone())
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<ApiResponse<AddBookCommandResponse>>), ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(&state);
    let res = AddBookCommand::new(svc).execute(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::message_with_data("book added successfully", res))))
}

pub(crate) async fn find_all_books(
    State(state): State<AppState>,
    Query(req): Query<ListBooksCommandRequest>) -> Result<Json<ApiResponse<ListBooksCommandResponse>>, ServerError> {
    let svc = build_service(&state);
    let res = ListBooksCommand::new(svc).execute(req).await?;
    Ok(Json(ApiResponse::data(res)))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<ApiResponse<GetBookCommandResponse>>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let svc = build_service(&state);
    let res = GetBookCommand::new(svc).execute(req).await?;
    Ok(Json(ApiResponse::data(res)))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    json: Json<Value>) -> Result<Json<ApiResponse<()>>, ServerError> {
    let book: NewBookDto = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(&state);
    let _ = UpdateBookCommand::new(svc).execute(UpdateBookCommandRequest::new(book_id.as_str(), book)).await?;
    Ok(Json(ApiResponse::message("book updated successfully")))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<ApiResponse<()>>, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let svc = build_service(&state);
    let _ = RemoveBookCommand::new(svc).execute(req).await?;
    Ok(Json(ApiResponse::message("book deleted successfully")))
}
