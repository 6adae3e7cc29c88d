//! Driving port for project management.

use async_trait::async_trait;

use crate::domain::{CategoryFilter, Error, Project, ProjectChanges, ProjectDraft, ProjectId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectCatalogue: Send + Sync {
    /// Projects matching `filter`, highest id first.
    async fn list_projects(&self, filter: CategoryFilter) -> Result<Vec<Project>, Error>;

    async fn add_project(&self, draft: &ProjectDraft) -> Result<Project, Error>;

    /// Patch a project; [`crate::domain::ErrorCode::NotFound`] for unknown ids.
    async fn update_project(&self, id: ProjectId, changes: &ProjectChanges) -> Result<Project, Error>;

    /// Delete a project. Deleting an unknown id succeeds.
    async fn delete_project(&self, id: ProjectId) -> Result<(), Error>;
}
