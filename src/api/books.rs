//! Book API endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

use super::{AppJson, WindowQuery};

/// List all books
#[utoipa::path(
    get,
    path = "/book/",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/book/create",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid book", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.books.create(&data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Update a book's name and author
#[utoipa::path(
    put,
    path = "/book/update",
    tag = "books",
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Unknown book id", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<UpdateBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update(&data).await?;
    Ok(Json(book))
}

/// Most borrowed book inside the open window (start, end)
#[utoipa::path(
    get,
    path = "/book/popular",
    tag = "books",
    params(WindowQuery),
    responses(
        (status = 200, description = "Most popular book", body = Book),
        (status = 400, description = "Missing window or no events in it", body = crate::error::ErrorResponse)
    )
)]
pub async fn most_popular_book(
    State(state): State<crate::AppState>,
    Query(query): Query<WindowQuery>,
) -> AppResult<Json<Book>> {
    let window = query.into_window()?;
    let book = state.services.books.most_popular(window).await?;
    Ok(Json(book))
}
