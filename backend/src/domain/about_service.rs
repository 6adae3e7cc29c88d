//! About-profile service implementing the [`AboutContent`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{AboutContent, AboutRepository, PersistenceError};
use crate::domain::{AboutProfile, AboutUpdate, Error};

/// Read-or-create access to the singleton profile.
#[derive(Clone)]
pub struct AboutService<R> {
    repository: Arc<R>,
}

impl<R> AboutService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: AboutRepository> AboutService<R> {
    async fn find_existing(&self) -> Result<Option<AboutProfile>, Error> {
        match self.repository.find_first().await {
            Ok(profile) => Ok(profile),
            Err(PersistenceError::MissingCollection { collection }) => {
                warn!(%collection, "about table missing; treating profile as absent");
                Ok(None)
            }
            Err(error) => Err(error.into()),
        }
    }
}

#[async_trait]
impl<R: AboutRepository> AboutContent for AboutService<R> {
    async fn get_about(&self) -> Result<Option<AboutProfile>, Error> {
        self.find_existing().await
    }

    async fn update_about(&self, update: &AboutUpdate) -> Result<AboutProfile, Error> {
        if let Some(existing) = self.find_existing().await? {
            if let Some(updated) = self.repository.update(existing.id, update).await? {
                return Ok(updated);
            }
            warn!(about_id = %existing.id, "profile row vanished during update; recreating");
        }
        Ok(self.repository.insert(update).await?)
    }
}
