//! HTTP inbound adapter exposing the portfolio JSON API.

pub mod about;
pub mod access;
pub mod error;
pub mod health;
pub mod messages;
pub mod projects;
pub mod session;
pub mod setup;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod visitors;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::web;

pub use error::ApiResult;

/// Register every `/api/v1` endpoint along with extractor configuration
/// that reports malformed input as `invalid_request`.
///
/// The caller supplies the session middleware and [`state::HttpState`].
///
/// # Examples
/// ```ignore
/// let api = web::scope("/api/v1").wrap(session).configure(folio::inbound::http::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default().error_handler(error::extractor_error::<JsonPayloadError>),
    )
    .app_data(
        web::QueryConfig::default().error_handler(error::extractor_error::<QueryPayloadError>),
    )
    .app_data(web::PathConfig::default().error_handler(error::extractor_error::<PathError>))
    .service(access::owner_login)
    .service(access::visitor_login)
    .service(access::logout)
    .service(access::current_session)
    .service(access::navigation)
    .service(visitors::visitor_stats)
    .service(visitors::list_visitors)
    .service(about::get_about)
    .service(about::update_about)
    .service(projects::list_projects)
    .service(projects::add_project)
    .service(projects::update_project)
    .service(projects::delete_project)
    .service(messages::add_message)
    .service(messages::list_messages)
    .service(setup::setup_status);
}
