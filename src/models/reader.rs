//! Reader model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Reader record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reader {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Create reader request (any `id` in the body is ignored)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReader {
    #[validate(length(max = 255, message = "First name must be at most 255 characters"))]
    pub first_name: String,
    #[validate(length(max = 255, message = "Last name must be at most 255 characters"))]
    pub last_name: String,
}

/// Update reader request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReader {
    pub id: i32,
    #[validate(length(max = 255, message = "First name must be at most 255 characters"))]
    pub first_name: String,
    #[validate(length(max = 255, message = "Last name must be at most 255 characters"))]
    pub last_name: String,
}
