//! PostgreSQL-backed `VisitorRepository`.

use async_trait::async_trait;
use diesel::dsl::now;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PersistenceError, VisitorRepository};
use crate::domain::{Collection, NewVisitor, Visitor};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::VisitorRow;
use super::pool::DbPool;
use super::schema::visitors;

/// Diesel adapter for the visitor log. `visit_time` is stamped by the
/// database clock.
#[derive(Clone)]
pub struct DieselVisitorRepository {
    pool: DbPool,
}

impl DieselVisitorRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitorRepository for DieselVisitorRepository {
    async fn insert(&self, visitor: &NewVisitor) -> Result<Visitor, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(visitors::table)
            .values((
                visitors::name.eq(visitor.name()),
                visitors::relation.eq(visitor.relation()),
                visitors::visit_time.eq(now),
            ))
            .returning(VisitorRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Collection::Visitors))?;
        Ok(row.into())
    }

    async fn list_newest_first(&self) -> Result<Vec<Visitor>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<VisitorRow> = visitors::table
            .order((visitors::visit_time.desc(), visitors::id.desc()))
            .select(VisitorRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Collection::Visitors))?;
        Ok(rows.into_iter().map(Visitor::from).collect())
    }
}
