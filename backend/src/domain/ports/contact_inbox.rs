//! Driving port for contact messages.

use async_trait::async_trait;

use crate::domain::{Error, Message, NewMessage};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactInbox: Send + Sync {
    async fn add_message(&self, message: &NewMessage) -> Result<Message, Error>;

    /// All messages, newest first.
    async fn list_messages(&self) -> Result<Vec<Message>, Error>;
}
