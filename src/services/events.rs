//! Borrowing events service

use crate::{
    error::AppResult,
    models::{datetime, CreateEvent, Event, EventType, EventTypeEntry, NewEvent},
    repository::Repository,
};

#[derive(Clone)]
pub struct EventsService {
    repository: Repository,
}

impl EventsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Record an event after checking the reader, the book, the type and the
    /// timestamp, in that order
    pub async fn create(&self, data: &CreateEvent) -> AppResult<Event> {
        let reader = self.repository.readers.get_by_id(data.id_reader).await?;
        let book = self.repository.books.get_by_id(data.id_book).await?;
        let event_type = EventType::validate(&data.event_type)?;
        let event_datetime = datetime::parse_strict(&data.event_datetime)?;

        let event = self
            .repository
            .events
            .create(&NewEvent {
                reader_id: reader.id,
                book_id: book.id,
                event_type,
                event_datetime,
            })
            .await?;
        tracing::info!("Event created: {:?}", event);
        Ok(event)
    }

    /// The event type registry, in listing order
    pub fn list_types(&self) -> Vec<EventTypeEntry> {
        EventType::ALL.into_iter().map(EventTypeEntry::from).collect()
    }
}
