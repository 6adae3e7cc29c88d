//! Driven port checking whether a collection is provisioned.

use async_trait::async_trait;

use super::PersistenceError;
use crate::domain::Collection;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionProbe: Send + Sync {
    /// Succeeds when `collection` can be queried. A missing table yields
    /// [`PersistenceError::MissingCollection`].
    async fn probe(&self, collection: Collection) -> Result<(), PersistenceError>;
}
