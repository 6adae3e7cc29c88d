//! Login, logout and navigation handlers.
//!
//! ```text
//! POST /api/v1/login/owner   {"name":"Owner","password":"..."}
//! POST /api/v1/login/visitor {"name":"Ada","relation":"Recruiter"}
//! POST /api/v1/logout
//! GET  /api/v1/session
//! GET  /api/v1/navigation?path=/about
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    Error, Navigation, NewVisitor, OwnerCredentials, Session, navigate,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Owner login body.
#[derive(Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerLoginRequest {
    #[schema(example = "Owner")]
    pub name: String,
    pub password: String,
}

/// Visitor introduction body.
#[derive(Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitorLoginRequest {
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(example = "Recruiter")]
    pub relation: String,
}

#[derive(Deserialize, IntoParams)]
pub struct NavigationQuery {
    /// Browser path to resolve, e.g. `/about`.
    pub path: String,
}

/// Sign in as the site owner.
#[utoipa::path(
    post,
    path = "/api/v1/login/owner",
    request_body = OwnerLoginRequest,
    responses(
        (status = 200, description = "Owner session started", body = Session,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error)
    ),
    tags = ["session"],
    operation_id = "ownerLogin",
    security([])
)]
#[post("/login/owner")]
pub async fn owner_login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<OwnerLoginRequest>,
) -> ApiResult<web::Json<Session>> {
    let request = payload.into_inner();
    let credentials = OwnerCredentials::try_from_parts(&request.name, &request.password)
        .map_err(|err| Error::invalid_field(&err))?;
    state.owner_auth.authenticate(&credentials).await?;
    Ok(web::Json(session.login(credentials.name(), true)?))
}

/// Record a visit and sign in as a visitor.
///
/// The visit is logged before the session is issued; if logging fails no
/// session is created.
#[utoipa::path(
    post,
    path = "/api/v1/login/visitor",
    request_body = VisitorLoginRequest,
    responses(
        (status = 200, description = "Visitor session started", body = Session,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["session"],
    operation_id = "visitorLogin",
    security([])
)]
#[post("/login/visitor")]
pub async fn visitor_login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<VisitorLoginRequest>,
) -> ApiResult<web::Json<Session>> {
    let request = payload.into_inner();
    let visitor = NewVisitor::try_from_parts(&request.name, &request.relation)
        .map_err(|err| Error::invalid_field(&err))?;
    let stored = state.visitors.add_visitor(&visitor).await?;
    Ok(web::Json(session.login(&stored.name, false)?))
}

#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["session"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> ApiResult<HttpResponse> {
    session.logout()?;
    info!("session ended");
    Ok(HttpResponse::NoContent().finish())
}

/// The caller's session, or `null` when signed out.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses((status = 200, description = "Current session", body = Option<Session>)),
    tags = ["session"],
    operation_id = "currentSession"
)]
#[get("/session")]
pub async fn current_session(session: SessionContext) -> ApiResult<web::Json<Option<Session>>> {
    Ok(web::Json(session.current()?))
}

/// Resolve a page path against the caller's session.
#[utoipa::path(
    get,
    path = "/api/v1/navigation",
    params(NavigationQuery),
    responses((status = 200, description = "Render or redirect", body = Navigation)),
    tags = ["session"],
    operation_id = "navigate"
)]
#[get("/navigation")]
pub async fn navigation(
    session: SessionContext,
    query: web::Query<NavigationQuery>,
) -> ApiResult<web::Json<Navigation>> {
    let current = session.current()?;
    Ok(web::Json(navigate(&query.path, current.as_ref())))
}

#[cfg(test)]
mod tests;
