//! Project service implementing the [`ProjectCatalogue`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{ProjectCatalogue, ProjectRepository};
use crate::domain::{CategoryFilter, Error, Project, ProjectChanges, ProjectDraft, ProjectId};

#[derive(Clone)]
pub struct ProjectService<R> {
    repository: Arc<R>,
}

impl<R> ProjectService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ProjectRepository> ProjectCatalogue for ProjectService<R> {
    async fn list_projects(&self, filter: CategoryFilter) -> Result<Vec<Project>, Error> {
        let projects = self.repository.list_newest_first().await?;
        Ok(filter.apply(projects))
    }

    async fn add_project(&self, draft: &ProjectDraft) -> Result<Project, Error> {
        let project = self.repository.insert(draft).await?;
        info!(project_id = %project.id, "project created");
        Ok(project)
    }

    async fn update_project(&self, id: ProjectId, changes: &ProjectChanges) -> Result<Project, Error> {
        let updated = self.repository.update(id, changes).await?;
        updated.ok_or_else(|| {
            Error::not_found(format!("project {id} does not exist"))
                .with_details(serde_json::json!({ "id": id }))
        })
    }

    async fn delete_project(&self, id: ProjectId) -> Result<(), Error> {
        let removed = self.repository.delete(id).await?;
        debug!(project_id = %id, removed, "project delete processed");
        Ok(())
    }
}
