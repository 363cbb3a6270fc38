//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, events, health, readers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblio API",
        version = "0.1.0",
        description = "Library borrowing records REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        health::health_check,
        // Books
        books::list_books,
        books::create_book,
        books::update_book,
        books::most_popular_book,
        // Readers
        readers::list_readers,
        readers::create_reader,
        readers::update_reader,
        readers::most_active_reader,
        // Events
        events::create_event,
        events::list_event_types,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::reader::Reader,
            crate::models::reader::CreateReader,
            crate::models::reader::UpdateReader,
            crate::models::event::Event,
            crate::models::event::EventType,
            crate::models::event::EventTypeEntry,
            crate::models::event::CreateEvent,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog and popularity"),
        (name = "readers", description = "Readers and activity"),
        (name = "events", description = "Take and return events")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
