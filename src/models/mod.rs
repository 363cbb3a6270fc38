//! Data models for Biblio

pub mod book;
pub mod datetime;
pub mod event;
pub mod reader;

// Re-export commonly used types
pub use book::{Book, CreateBook, UpdateBook};
pub use event::{CreateEvent, Event, EventType, EventTypeEntry, NewEvent};
pub use reader::{CreateReader, Reader, UpdateReader};
