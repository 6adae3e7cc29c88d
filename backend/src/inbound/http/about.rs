//! About-profile handlers.
//!
//! ```text
//! GET /api/v1/about
//! PUT /api/v1/about {"description":"...","tools":["Rust"],"resumeUrl":""}
//! ```

use actix_web::{get, put, web};

use crate::domain::{AboutFields, AboutProfile, AboutUpdate, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// The profile, or `null` before the owner has saved one.
#[utoipa::path(
    get,
    path = "/api/v1/about",
    responses(
        (status = 200, description = "About profile", body = Option<AboutProfile>),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["about"],
    operation_id = "getAbout"
)]
#[get("/about")]
pub async fn get_about(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Option<AboutProfile>>> {
    session.require_session()?;
    Ok(web::Json(state.about.get_about().await?))
}

/// Create or patch the profile. Absent fields are kept; an empty URL clears
/// the stored link.
#[utoipa::path(
    put,
    path = "/api/v1/about",
    request_body = AboutFields,
    responses(
        (status = 200, description = "Saved profile", body = AboutProfile),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Owner only", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["about"],
    operation_id = "updateAbout"
)]
#[put("/about")]
pub async fn update_about(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<AboutFields>,
) -> ApiResult<web::Json<AboutProfile>> {
    session.require_owner()?;
    let update =
        AboutUpdate::try_from(payload.into_inner()).map_err(|err| Error::invalid_field(&err))?;
    Ok(web::Json(state.about.update_about(&update).await?))
}
