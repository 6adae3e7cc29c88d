//! PostgreSQL-backed `CollectionProbe`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Collection;
use crate::domain::ports::{CollectionProbe, PersistenceError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;
use super::schema::{about, messages, projects, visitors};

/// Probes a table by selecting at most one id from it.
#[derive(Clone)]
pub struct DieselCollectionProbe {
    pool: DbPool,
}

impl DieselCollectionProbe {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionProbe for DieselCollectionProbe {
    async fn probe(&self, collection: Collection) -> Result<(), PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let result = match collection {
            Collection::Visitors => {
                visitors::table
                    .select(visitors::id)
                    .first::<i32>(&mut conn)
                    .await
            }
            Collection::About => about::table.select(about::id).first::<i32>(&mut conn).await,
            Collection::Projects => {
                projects::table
                    .select(projects::id)
                    .first::<i32>(&mut conn)
                    .await
            }
            Collection::Messages => {
                messages::table
                    .select(messages::id)
                    .first::<i32>(&mut conn)
                    .await
            }
        };
        result
            .optional()
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, collection))
    }
}
