//! Domain model and services for the portfolio backend.
//!
//! Everything here is transport agnostic: inbound adapters translate HTTP
//! requests into these types and call the driving ports in [`ports`];
//! outbound adapters implement the driven ports against PostgreSQL or
//! memory.

pub mod ports;

mod about;
mod about_service;
mod access;
mod auth;
mod collection;
mod contact_service;
mod error;
mod message;
mod project;
mod project_service;
mod record_id;
mod session;
mod setup_status_service;
mod tools;
mod trace_id;
mod visit_stats;
mod visitor;
mod visitor_log_service;

pub use self::about::{AboutFields, AboutId, AboutProfile, AboutUpdate, AboutValidationError};
pub use self::about_service::AboutService;
pub use self::access::{Navigation, Page, navigate, require_owner, require_session};
pub use self::auth::{OwnerCredentials, OwnerLoginValidationError, OwnerSecret, OwnerSecretError};
pub use self::collection::Collection;
pub use self::contact_service::ContactService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, FieldViolation, TRACE_ID_HEADER};
pub use self::message::{Message, MessageId, MessageValidationError, NewMessage};
pub use self::project::{
    CategoryFilter, Project, ProjectCategory, ProjectChanges, ProjectDraft, ProjectFields,
    ProjectId, ProjectValidationError,
};
pub use self::project_service::ProjectService;
pub use self::session::{OWNER_FLAG_KEY, Session, SessionStore, USER_NAME_KEY};
pub use self::setup_status_service::SetupStatusService;
pub use self::tools::ToolList;
pub use self::trace_id::TraceId;
pub use self::visit_stats::{
    CHART_DAYS, DailyVisits, RECENT_VISITORS, RECENT_WINDOW_DAYS, VisitorStats, daily_visits,
    summarise_visits, visits_within_week,
};
pub use self::visitor::{NewVisitor, Visitor, VisitorId, VisitorValidationError};
pub use self::visitor_log_service::VisitorLogService;
