//! Books repository (PostgreSQL)

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::BookStore;
use crate::{
    error::{AppError, AppResult},
    models::{Book, CreateBook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT id, name, author FROM book ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT id, name, author FROM book WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            "INSERT INTO book (name, author) VALUES ($1, $2) RETURNING id, name, author",
        )
        .bind(&data.name)
        .bind(&data.author)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, data: &UpdateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "UPDATE book SET name = $1, author = $2 WHERE id = $3 RETURNING id, name, author",
        )
        .bind(&data.name)
        .bind(&data.author)
        .bind(data.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", data.id)))
    }
}
