//! PostgreSQL-backed `MessageRepository`.

use async_trait::async_trait;
use diesel::dsl::now;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{MessageRepository, PersistenceError};
use crate::domain::{Collection, Message, NewMessage};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::MessageRow;
use super::pool::DbPool;
use super::schema::messages;

#[derive(Clone)]
pub struct DieselMessageRepository {
    pool: DbPool,
}

impl DieselMessageRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(error: diesel::result::Error) -> PersistenceError {
    map_diesel_error(error, Collection::Messages)
}

#[async_trait]
impl MessageRepository for DieselMessageRepository {
    async fn insert(&self, message: &NewMessage) -> Result<Message, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(messages::table)
            .values((
                messages::name.eq(message.name()),
                messages::email.eq(message.email()),
                messages::message.eq(message.message()),
                messages::sent_at.eq(now),
            ))
            .returning(MessageRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_error)?;
        Ok(row.into())
    }

    async fn list_newest_first(&self) -> Result<Vec<Message>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<MessageRow> = messages::table
            .order((messages::sent_at.desc(), messages::id.desc()))
            .select(MessageRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_error)?;
        Ok(rows.into_iter().map(Message::from).collect())
    }
}
