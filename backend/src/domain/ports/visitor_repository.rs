//! Driven port for the visitor log table.

use async_trait::async_trait;

use super::PersistenceError;
use crate::domain::{NewVisitor, Visitor};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitorRepository: Send + Sync {
    /// Insert a row; the store stamps `visit_time`.
    async fn insert(&self, visitor: &NewVisitor) -> Result<Visitor, PersistenceError>;

    /// Every row, newest visit first.
    async fn list_newest_first(&self) -> Result<Vec<Visitor>, PersistenceError>;
}
