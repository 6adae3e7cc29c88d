//! Visitor log service implementing the [`VisitorLog`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::FixedOffset;
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::ports::{PersistenceError, VisitorLog, VisitorRepository};
use crate::domain::{summarise_visits, Error, NewVisitor, Visitor, VisitorStats};

/// Visitor log backed by a [`VisitorRepository`].
#[derive(Clone)]
pub struct VisitorLogService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    display_offset: FixedOffset,
}

impl<R> VisitorLogService<R> {
    /// `display_offset` is the timezone used to bucket visits by day.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>, display_offset: FixedOffset) -> Self {
        Self {
            repository,
            clock,
            display_offset,
        }
    }
}

impl<R: VisitorRepository> VisitorLogService<R> {
    async fn load(&self) -> Result<Vec<Visitor>, Error> {
        match self.repository.list_newest_first().await {
            Ok(visitors) => Ok(visitors),
            Err(PersistenceError::MissingCollection { collection }) => {
                warn!(%collection, "visitor table missing; reporting an empty log");
                Ok(Vec::new())
            }
            Err(error) => Err(error.into()),
        }
    }
}

#[async_trait]
impl<R: VisitorRepository> VisitorLog for VisitorLogService<R> {
    async fn add_visitor(&self, visitor: &NewVisitor) -> Result<Visitor, Error> {
        let stored = self.repository.insert(visitor).await?;
        info!(visitor_id = %stored.id, "visit recorded");
        Ok(stored)
    }

    async fn list_visitors(&self) -> Result<Vec<Visitor>, Error> {
        self.load().await
    }

    async fn visitor_stats(&self) -> Result<VisitorStats, Error> {
        let visitors = self.load().await?;
        Ok(summarise_visits(visitors, self.display_offset, self.clock.utc()))
    }
}
