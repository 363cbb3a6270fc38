//! Events repository (PostgreSQL)

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::EventStore;
use crate::{
    error::AppResult,
    models::{Event, NewEvent},
};

#[derive(Clone)]
pub struct EventsRepository {
    pool: Pool<Postgres>,
}

impl EventsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for EventsRepository {
    async fn list(&self) -> AppResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, Event>(
            "SELECT id, id_reader, id_book, event_type, event_datetime FROM event ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(&self, data: &NewEvent) -> AppResult<Event> {
        let row = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO event (id_reader, id_book, event_type, event_datetime)
            VALUES ($1, $2, $3, $4)
            RETURNING id, id_reader, id_book, event_type, event_datetime
            "#,
        )
        .bind(data.reader_id)
        .bind(data.book_id)
        .bind(data.event_type)
        .bind(data.event_datetime)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
