//! Repository layer: storage of books, readers and events
//!
//! Each record family sits behind its own store trait so the services do not
//! care whether records live in PostgreSQL or in process memory.

pub mod books;
pub mod events;
pub mod memory;
pub mod readers;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Book, CreateBook, CreateReader, Event, NewEvent, Reader, UpdateBook, UpdateReader},
};

#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, ordered by id
    async fn list(&self) -> AppResult<Vec<Book>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Book>;
    async fn create(&self, data: &CreateBook) -> AppResult<Book>;
    async fn update(&self, data: &UpdateBook) -> AppResult<Book>;
}

#[async_trait]
pub trait ReaderStore: Send + Sync {
    /// All readers, ordered by id (creation order)
    async fn list(&self) -> AppResult<Vec<Reader>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Reader>;
    async fn create(&self, data: &CreateReader) -> AppResult<Reader>;
    async fn update(&self, data: &UpdateReader) -> AppResult<Reader>;
}

#[async_trait]
pub trait EventStore: Send + Sync {
    /// All events, ordered by id
    async fn list(&self) -> AppResult<Vec<Event>>;
    async fn create(&self, data: &NewEvent) -> AppResult<Event>;
}

/// Main repository struct holding one store per record family
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookStore>,
    pub readers: Arc<dyn ReaderStore>,
    pub events: Arc<dyn EventStore>,
}

impl Repository {
    /// Create a repository backed by the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: Arc::new(books::BooksRepository::new(pool.clone())),
            readers: Arc::new(readers::ReadersRepository::new(pool.clone())),
            events: Arc::new(events::EventsRepository::new(pool)),
        }
    }

    /// Create a repository keeping every record in process memory
    pub fn in_memory() -> Self {
        let store = Arc::new(memory::MemoryStore::default());
        Self {
            books: store.clone(),
            readers: store.clone(),
            events: store,
        }
    }
}
