//! Reader management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{CreateReader, Reader, UpdateReader},
    ranking::{self, Window},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReadersService {
    repository: Repository,
}

impl ReadersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Reader>> {
        self.repository.readers.list().await
    }

    pub async fn create(&self, data: &CreateReader) -> AppResult<Reader> {
        data.validate()?;
        let reader = self.repository.readers.create(data).await?;
        tracing::info!("Reader created: {:?}", reader);
        Ok(reader)
    }

    pub async fn update(&self, data: &UpdateReader) -> AppResult<Reader> {
        data.validate()?;
        let reader = self.repository.readers.update(data).await?;
        tracing::info!("Reader updated: {:?}", reader);
        Ok(reader)
    }

    /// Reader with the most returns inside the window
    pub async fn most_active(&self, window: Window) -> AppResult<Reader> {
        let readers = self.repository.readers.list().await?;
        let events = self.repository.events.list().await?;

        ranking::most_active_reader(&readers, &events, window)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Most active reader not found".to_string()))
    }
}
