//! Reader API endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::reader::{CreateReader, Reader, UpdateReader},
};

use super::{AppJson, WindowQuery};

/// List all readers
#[utoipa::path(
    get,
    path = "/reader/",
    tag = "readers",
    responses(
        (status = 200, description = "All readers", body = Vec<Reader>)
    )
)]
pub async fn list_readers(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Reader>>> {
    let readers = state.services.readers.list().await?;
    Ok(Json(readers))
}

/// Create a reader
#[utoipa::path(
    post,
    path = "/reader/create",
    tag = "readers",
    request_body = CreateReader,
    responses(
        (status = 201, description = "Reader created", body = Reader),
        (status = 400, description = "Invalid reader", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_reader(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<CreateReader>,
) -> AppResult<(StatusCode, Json<Reader>)> {
    let reader = state.services.readers.create(&data).await?;
    Ok((StatusCode::CREATED, Json(reader)))
}

/// Update a reader's names
#[utoipa::path(
    put,
    path = "/reader/update",
    tag = "readers",
    request_body = UpdateReader,
    responses(
        (status = 200, description = "Reader updated", body = Reader),
        (status = 400, description = "Unknown reader id", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_reader(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<UpdateReader>,
) -> AppResult<Json<Reader>> {
    let reader = state.services.readers.update(&data).await?;
    Ok(Json(reader))
}

/// Reader with the most returns inside the open window (start, end)
#[utoipa::path(
    get,
    path = "/reader/most",
    tag = "readers",
    params(WindowQuery),
    responses(
        (status = 200, description = "Most active reader", body = Reader),
        (status = 400, description = "Missing window or no readers", body = crate::error::ErrorResponse)
    )
)]
pub async fn most_active_reader(
    State(state): State<crate::AppState>,
    Query(query): Query<WindowQuery>,
) -> AppResult<Json<Reader>> {
    let window = query.into_window()?;
    let reader = state.services.readers.most_active(window).await?;
    Ok(Json(reader))
}
