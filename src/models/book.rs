//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author: String,
}

/// Create book request (any `id` in the body is ignored)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: String,
    #[validate(length(max = 255, message = "Author must be at most 255 characters"))]
    pub author: String,
}

/// Update book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    pub id: i32,
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: String,
    #[validate(length(max = 255, message = "Author must be at most 255 characters"))]
    pub author: String,
}
