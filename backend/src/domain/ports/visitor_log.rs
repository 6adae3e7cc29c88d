//! Driving port for the visitor log.

use async_trait::async_trait;

use crate::domain::{Error, NewVisitor, Visitor, VisitorStats};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitorLog: Send + Sync {
    /// Record a visit.
    async fn add_visitor(&self, visitor: &NewVisitor) -> Result<Visitor, Error>;

    /// All visits, newest first; empty while the table is missing.
    async fn list_visitors(&self) -> Result<Vec<Visitor>, Error>;

    /// Totals, daily buckets and recent visitors.
    async fn visitor_stats(&self) -> Result<VisitorStats, Error>;
}
