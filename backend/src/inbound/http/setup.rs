//! Provisioning status.
//!
//! ```text
//! GET /api/v1/setup/status
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Collection, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SetupStatusResponse {
    /// `true` once every collection exists.
    pub ready: bool,
    pub missing: Vec<Collection>,
}

/// Which tables still need creating. Served without a session so the landing
/// page can show the setup notice.
#[utoipa::path(
    get,
    path = "/api/v1/setup/status",
    responses(
        (status = 200, description = "Provisioning status", body = SetupStatusResponse),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["setup"],
    operation_id = "setupStatus"
)]
#[get("/setup/status")]
pub async fn setup_status(state: web::Data<HttpState>) -> ApiResult<web::Json<SetupStatusResponse>> {
    let missing = state.setup.missing_collections().await?;
    Ok(web::Json(SetupStatusResponse {
        ready: missing.is_empty(),
        missing,
    }))
}
