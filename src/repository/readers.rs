//! Readers repository (PostgreSQL)

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::ReaderStore;
use crate::{
    error::{AppError, AppResult},
    models::{CreateReader, Reader, UpdateReader},
};

#[derive(Clone)]
pub struct ReadersRepository {
    pool: Pool<Postgres>,
}

impl ReadersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReaderStore for ReadersRepository {
    async fn list(&self) -> AppResult<Vec<Reader>> {
        let rows = sqlx::query_as::<_, Reader>(
            "SELECT id, first_name, last_name FROM reader ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Reader> {
        sqlx::query_as::<_, Reader>("SELECT id, first_name, last_name FROM reader WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reader {} not found", id)))
    }

    async fn create(&self, data: &CreateReader) -> AppResult<Reader> {
        let row = sqlx::query_as::<_, Reader>(
            r#"
            INSERT INTO reader (first_name, last_name)
            VALUES ($1, $2)
            RETURNING id, first_name, last_name
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, data: &UpdateReader) -> AppResult<Reader> {
        sqlx::query_as::<_, Reader>(
            r#"
            UPDATE reader SET first_name = $1, last_name = $2
            WHERE id = $3
            RETURNING id, first_name, last_name
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Reader {} not found", data.id)))
    }
}
