//! Borrowing event model and the event type registry

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Kind of action recorded by an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    TakeBook,
    ReturnBook,
}

impl EventType {
    /// Every registered event type, in listing order
    pub const ALL: [EventType; 2] = [EventType::TakeBook, EventType::ReturnBook];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::TakeBook => "TAKE_BOOK",
            EventType::ReturnBook => "RETURN_BOOK",
        }
    }

    /// Resolve a tag to its registered event type (exact, case-sensitive)
    pub fn validate(tag: &str) -> AppResult<Self> {
        tag.parse()
            .map_err(|_| AppError::UnsupportedValue(format!("Unsupported event type: {}", tag)))
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|event_type| event_type.as_str() == s)
            .ok_or_else(|| format!("Invalid event type: {}", s))
    }
}

// SQLx conversion for EventType (stored as text)
impl sqlx::Type<Postgres> for EventType {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for EventType {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for EventType {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        <&str as Encode<Postgres>>::encode(self.as_str(), buf)
    }
}

/// Registry listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventTypeEntry {
    pub name: String,
}

impl From<EventType> for EventTypeEntry {
    fn from(event_type: EventType) -> Self {
        Self {
            name: event_type.as_str().to_string(),
        }
    }
}

/// Event record. Holds the reader and book by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i32,
    #[sqlx(rename = "id_reader")]
    #[serde(rename = "idReader")]
    pub reader_id: i32,
    #[sqlx(rename = "id_book")]
    #[serde(rename = "idBook")]
    pub book_id: i32,
    pub event_type: EventType,
    /// Timestamp, yyyy-MM-ddTHH:mm:ss.SSSSSS
    #[serde(with = "crate::models::datetime")]
    #[schema(value_type = String, example = "2024-03-01T10:15:30.000123")]
    pub event_datetime: NaiveDateTime,
}

/// Create event request.
///
/// Type and timestamp stay textual so that bad values surface as
/// registry/format errors rather than body rejections.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    pub id_reader: i32,
    pub id_book: i32,
    /// TAKE_BOOK or RETURN_BOOK
    pub event_type: String,
    /// Timestamp, yyyy-MM-ddTHH:mm:ss.SSSSSS
    pub event_datetime: String,
}

/// Checked event ready to be persisted
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub reader_id: i32,
    pub book_id: i32,
    pub event_type: EventType,
    pub event_datetime: NaiveDateTime,
}
