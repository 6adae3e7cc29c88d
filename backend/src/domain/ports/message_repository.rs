//! Driven port for the contact messages table.

use async_trait::async_trait;

use super::PersistenceError;
use crate::domain::{Message, NewMessage};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Insert a message; the store stamps `timestamp`.
    async fn insert(&self, message: &NewMessage) -> Result<Message, PersistenceError>;

    /// Every message, newest first.
    async fn list_newest_first(&self) -> Result<Vec<Message>, PersistenceError>;
}
