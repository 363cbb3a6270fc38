//! In-memory store, selected with `database.backend = "memory"`

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BookStore, EventStore, ReaderStore};
use crate::{
    error::{AppError, AppResult},
    models::{Book, CreateBook, CreateReader, Event, NewEvent, Reader, UpdateBook, UpdateReader},
};

#[derive(Default)]
struct Tables {
    books: Vec<Book>,
    readers: Vec<Reader>,
    events: Vec<Event>,
    last_book_id: i32,
    last_reader_id: i32,
    last_event_id: i32,
}

/// All three record families behind one lock; ids start at 1 and are never reused
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.tables.read().await.books.clone())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.tables
            .read()
            .await
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let mut tables = self.tables.write().await;
        tables.last_book_id += 1;
        let book = Book {
            id: tables.last_book_id,
            name: data.name.clone(),
            author: data.author.clone(),
        };
        tables.books.push(book.clone());
        Ok(book)
    }

    async fn update(&self, data: &UpdateBook) -> AppResult<Book> {
        let mut tables = self.tables.write().await;
        let book = tables
            .books
            .iter_mut()
            .find(|b| b.id == data.id)
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", data.id)))?;
        book.name = data.name.clone();
        book.author = data.author.clone();
        Ok(book.clone())
    }
}

#[async_trait]
impl ReaderStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Reader>> {
        Ok(self.tables.read().await.readers.clone())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Reader> {
        self.tables
            .read()
            .await
            .readers
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Reader {} not found", id)))
    }

    async fn create(&self, data: &CreateReader) -> AppResult<Reader> {
        let mut tables = self.tables.write().await;
        tables.last_reader_id += 1;
        let reader = Reader {
            id: tables.last_reader_id,
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
        };
        tables.readers.push(reader.clone());
        Ok(reader)
    }

    async fn update(&self, data: &UpdateReader) -> AppResult<Reader> {
        let mut tables = self.tables.write().await;
        let reader = tables
            .readers
            .iter_mut()
            .find(|r| r.id == data.id)
            .ok_or_else(|| AppError::NotFound(format!("Reader {} not found", data.id)))?;
        reader.first_name = data.first_name.clone();
        reader.last_name = data.last_name.clone();
        Ok(reader.clone())
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Event>> {
        Ok(self.tables.read().await.events.clone())
    }

    async fn create(&self, data: &NewEvent) -> AppResult<Event> {
        let mut tables = self.tables.write().await;
        // Same guarantee as the foreign keys of the SQL schema
        if !tables.readers.iter().any(|r| r.id == data.reader_id) {
            return Err(AppError::NotFound(format!("Reader {} not found", data.reader_id)));
        }
        if !tables.books.iter().any(|b| b.id == data.book_id) {
            return Err(AppError::NotFound(format!("Book {} not found", data.book_id)));
        }
        tables.last_event_id += 1;
        let event = Event {
            id: tables.last_event_id,
            reader_id: data.reader_id,
            book_id: data.book_id,
            event_type: data.event_type,
            event_datetime: data.event_datetime,
        };
        tables.events.push(event.clone());
        Ok(event)
    }
}
