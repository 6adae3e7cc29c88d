//! PostgreSQL-backed `AboutRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AboutRepository, PersistenceError};
use crate::domain::{AboutId, AboutProfile, AboutUpdate, Collection};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AboutChangeset, AboutRow, NewAboutRow};
use super::pool::DbPool;
use super::schema::about;

/// Diesel adapter for the singleton profile table.
///
/// Should the table ever hold more than one row, the lowest id wins.
#[derive(Clone)]
pub struct DieselAboutRepository {
    pool: DbPool,
}

impl DieselAboutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(error: diesel::result::Error) -> PersistenceError {
    map_diesel_error(error, Collection::About)
}

#[async_trait]
impl AboutRepository for DieselAboutRepository {
    async fn find_first(&self) -> Result<Option<AboutProfile>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = about::table
            .order(about::id.asc())
            .select(AboutRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_error)?;
        Ok(row.map(AboutProfile::from))
    }

    async fn insert(&self, update: &AboutUpdate) -> Result<AboutProfile, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(about::table)
            .values(NewAboutRow::from(update))
            .returning(AboutRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_error)?;
        Ok(row.into())
    }

    async fn update(
        &self,
        id: AboutId,
        update: &AboutUpdate,
    ) -> Result<Option<AboutProfile>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::update(about::table.find(id.get()))
            .set(AboutChangeset::from(update))
            .returning(AboutRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_error)?;
        Ok(row.map(AboutProfile::from))
    }
}
