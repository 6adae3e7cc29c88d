//! Project catalogue handlers.
//!
//! ```text
//! GET    /api/v1/projects?category=Machine%20Learning
//! POST   /api/v1/projects
//! PUT    /api/v1/projects/{id}
//! DELETE /api/v1/projects/{id}
//! ```

use std::str::FromStr;

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{
    CategoryFilter, Error, Project, ProjectChanges, ProjectDraft, ProjectFields, ProjectId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ProjectListQuery {
    /// A category label, or `all` (the default) for every project.
    #[param(example = "Full Stack")]
    pub category: Option<String>,
}

fn parse_filter(query: &ProjectListQuery) -> Result<CategoryFilter, Error> {
    match query.category.as_deref() {
        None => Ok(CategoryFilter::All),
        Some(raw) => CategoryFilter::from_str(raw).map_err(|err| Error::invalid_field(&err)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/projects",
    params(ProjectListQuery),
    responses(
        (status = 200, description = "Projects, newest first", body = [Project]),
        (status = 400, description = "Unknown category", body = Error),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["projects"],
    operation_id = "listProjects"
)]
#[get("/projects")]
pub async fn list_projects(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<ProjectListQuery>,
) -> ApiResult<web::Json<Vec<Project>>> {
    session.require_session()?;
    let filter = parse_filter(&query)?;
    Ok(web::Json(state.projects.list_projects(filter).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/projects",
    request_body = ProjectFields,
    responses(
        (status = 201, description = "Created project", body = Project),
        (status = 400, description = "Invalid request", body = Error),
        (status = 403, description = "Owner only", body = Error)
    ),
    tags = ["projects"],
    operation_id = "addProject"
)]
#[post("/projects")]
pub async fn add_project(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ProjectFields>,
) -> ApiResult<HttpResponse> {
    session.require_owner()?;
    let draft =
        ProjectDraft::try_from(payload.into_inner()).map_err(|err| Error::invalid_field(&err))?;
    let project = state.projects.add_project(&draft).await?;
    Ok(HttpResponse::Created().json(project))
}

/// Patch a project; only supplied fields change.
#[utoipa::path(
    put,
    path = "/api/v1/projects/{id}",
    params(("id" = i32, Path, description = "Project id")),
    request_body = ProjectFields,
    responses(
        (status = 200, description = "Updated project", body = Project),
        (status = 400, description = "Invalid request", body = Error),
        (status = 403, description = "Owner only", body = Error),
        (status = 404, description = "No such project", body = Error)
    ),
    tags = ["projects"],
    operation_id = "updateProject"
)]
#[put("/projects/{id}")]
pub async fn update_project(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
    payload: web::Json<ProjectFields>,
) -> ApiResult<web::Json<Project>> {
    session.require_owner()?;
    let changes =
        ProjectChanges::try_from(payload.into_inner()).map_err(|err| Error::invalid_field(&err))?;
    let id = ProjectId::new(path.into_inner());
    Ok(web::Json(state.projects.update_project(id, &changes).await?))
}

/// Delete a project. Deleting an unknown id succeeds.
#[utoipa::path(
    delete,
    path = "/api/v1/projects/{id}",
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project removed"),
        (status = 403, description = "Owner only", body = Error)
    ),
    tags = ["projects"],
    operation_id = "deleteProject"
)]
#[delete("/projects/{id}")]
pub async fn delete_project(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    session.require_owner()?;
    state
        .projects
        .delete_project(ProjectId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
