//! Business logic services

pub mod books;
pub mod events;
pub mod readers;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub readers: readers::ReadersService,
    pub events: events::EventsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BooksService::new(repository.clone()),
            readers: readers::ReadersService::new(repository.clone()),
            events: events::EventsService::new(repository),
        }
    }
}
