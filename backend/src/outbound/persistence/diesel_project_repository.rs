//! PostgreSQL-backed `ProjectRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{PersistenceError, ProjectRepository};
use crate::domain::{Collection, Project, ProjectChanges, ProjectDraft, ProjectId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewProjectRow, ProjectChangeset, ProjectRow};
use super::pool::DbPool;
use super::schema::projects;

#[derive(Clone)]
pub struct DieselProjectRepository {
    pool: DbPool,
}

impl DieselProjectRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(error: diesel::result::Error) -> PersistenceError {
    map_diesel_error(error, Collection::Projects)
}

#[async_trait]
impl ProjectRepository for DieselProjectRepository {
    async fn list_newest_first(&self) -> Result<Vec<Project>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ProjectRow> = projects::table
            .order(projects::id.desc())
            .select(ProjectRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_error)?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn insert(&self, draft: &ProjectDraft) -> Result<Project, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(projects::table)
            .values(NewProjectRow::from(draft))
            .returning(ProjectRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_error)?;
        Ok(row.into())
    }

    async fn update(
        &self,
        id: ProjectId,
        changes: &ProjectChanges,
    ) -> Result<Option<Project>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::update(projects::table.find(id.get()))
            .set(ProjectChangeset::from(changes))
            .returning(ProjectRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_error)?;
        Ok(row.map(Project::from))
    }

    async fn delete(&self, id: ProjectId) -> Result<bool, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(projects::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_error)?;
        debug!(project_id = %id, removed, "project delete executed");
        Ok(removed > 0)
    }
}
