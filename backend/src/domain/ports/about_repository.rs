//! Driven port for the singleton about-profile table.

use async_trait::async_trait;

use super::PersistenceError;
use crate::domain::{AboutId, AboutProfile, AboutUpdate};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AboutRepository: Send + Sync {
    /// The lowest-id row, or `None` when the table is empty.
    async fn find_first(&self) -> Result<Option<AboutProfile>, PersistenceError>;

    /// Create the profile row from an update.
    async fn insert(&self, update: &AboutUpdate) -> Result<AboutProfile, PersistenceError>;

    /// Apply an update to row `id`; `None` if the row vanished.
    async fn update(
        &self,
        id: AboutId,
        update: &AboutUpdate,
    ) -> Result<Option<AboutProfile>, PersistenceError>;
}
