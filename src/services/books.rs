//! Book catalog service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Book, CreateBook, UpdateBook},
    ranking::{self, Window},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        data.validate()?;
        let book = self.repository.books.create(data).await?;
        tracing::info!("Book created: {:?}", book);
        Ok(book)
    }

    pub async fn update(&self, data: &UpdateBook) -> AppResult<Book> {
        data.validate()?;
        let book = self.repository.books.update(data).await?;
        tracing::info!("Book updated: {:?}", book);
        Ok(book)
    }

    /// Book with the most events of any type inside the window
    pub async fn most_popular(&self, window: Window) -> AppResult<Book> {
        let books = self.repository.books.list().await?;
        let events = self.repository.events.list().await?;
        tracing::debug!(
            "Ranking {} books over {} events in {:?}",
            books.len(),
            events.len(),
            window
        );

        ranking::most_popular_book(&books, &events, window)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Most popular book not found".to_string()))
    }
}
