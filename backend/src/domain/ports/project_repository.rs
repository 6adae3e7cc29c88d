//! Driven port for the projects table.

use async_trait::async_trait;

use super::PersistenceError;
use crate::domain::{Project, ProjectChanges, ProjectDraft, ProjectId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Every project, highest id first.
    async fn list_newest_first(&self) -> Result<Vec<Project>, PersistenceError>;

    async fn insert(&self, draft: &ProjectDraft) -> Result<Project, PersistenceError>;

    /// Patch project `id`; `None` when no such row exists.
    async fn update(
        &self,
        id: ProjectId,
        changes: &ProjectChanges,
    ) -> Result<Option<Project>, PersistenceError>;

    /// Delete project `id`; returns whether a row was removed.
    async fn delete(&self, id: ProjectId) -> Result<bool, PersistenceError>;
}
