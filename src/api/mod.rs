//! API handlers for Biblio REST endpoints

pub mod books;
pub mod events;
pub mod health;
pub mod openapi;
pub mod readers;

use axum::{
    extract::FromRequest,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::IntoParams;

use crate::{
    error::{AppError, AppResult},
    models::datetime,
    ranking::Window,
    AppState,
};

/// JSON body extractor whose rejections become `AppError::BadRequest`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Time window query parameters shared by the ranking endpoints
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WindowQuery {
    /// Exclusive lower bound (ISO-8601 local date-time)
    pub start: Option<String>,
    /// Exclusive upper bound (ISO-8601 local date-time)
    pub end: Option<String>,
}

impl WindowQuery {
    pub fn into_window(self) -> AppResult<Window> {
        let start = self
            .start
            .ok_or_else(|| AppError::BadRequest("Missing 'start' parameter".to_string()))?;
        let end = self
            .end
            .ok_or_else(|| AppError::BadRequest("Missing 'end' parameter".to_string()))?;
        Ok(Window::new(
            datetime::parse_window_bound("start", &start)?,
            datetime::parse_window_bound("end", &end)?,
        ))
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        .route("/health", get(health::health_check))
        // Books
        .route("/book/", get(books::list_books))
        .route("/book/create", post(books::create_book))
        .route("/book/update", put(books::update_book))
        .route("/book/popular", get(books::most_popular_book))
        // Readers
        .route("/reader/", get(readers::list_readers))
        .route("/reader/create", post(readers::create_reader))
        .route("/reader/update", put(readers::update_reader))
        .route("/reader/most", get(readers::most_active_reader))
        // Events
        .route("/event/", get(events::list_event_types))
        .route("/event/create", post(events::create_event))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
