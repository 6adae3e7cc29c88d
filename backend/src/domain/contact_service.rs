//! Contact-message service implementing the [`ContactInbox`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{ContactInbox, MessageRepository};
use crate::domain::{Error, Message, NewMessage};

#[derive(Clone)]
pub struct ContactService<R> {
    repository: Arc<R>,
}

impl<R> ContactService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: MessageRepository> ContactInbox for ContactService<R> {
    async fn add_message(&self, message: &NewMessage) -> Result<Message, Error> {
        let stored = self.repository.insert(message).await?;
        info!(message_id = %stored.id, "contact message received");
        Ok(stored)
    }

    async fn list_messages(&self) -> Result<Vec<Message>, Error> {
        Ok(self.repository.list_newest_first().await?)
    }
}
