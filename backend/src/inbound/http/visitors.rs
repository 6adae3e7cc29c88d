//! Visitor log handlers.
//!
//! ```text
//! GET /api/v1/visitors
//! GET /api/v1/visitors/stats
//! ```

use actix_web::{get, web};

use crate::domain::{Error, Visitor, VisitorStats};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Every logged visit, newest first. An unprovisioned table reads as empty.
#[utoipa::path(
    get,
    path = "/api/v1/visitors",
    responses(
        (status = 200, description = "Visitors", body = [Visitor]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["visitors"],
    operation_id = "listVisitors"
)]
#[get("/visitors")]
pub async fn list_visitors(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<Visitor>>> {
    session.require_session()?;
    Ok(web::Json(state.visitors.list_visitors().await?))
}

/// Totals, the last week's count, recent visitors and daily buckets.
#[utoipa::path(
    get,
    path = "/api/v1/visitors/stats",
    responses(
        (status = 200, description = "Visitor summary", body = VisitorStats),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["visitors"],
    operation_id = "visitorStats"
)]
#[get("/visitors/stats")]
pub async fn visitor_stats(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<VisitorStats>> {
    session.require_session()?;
    Ok(web::Json(state.visitors.visitor_stats().await?))
}
