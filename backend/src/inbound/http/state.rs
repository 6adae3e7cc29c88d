//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and only see driving ports, so they
//! can be exercised against in-memory or mocked implementations.

use std::sync::Arc;

use crate::domain::ports::{
    AboutContent, ContactInbox, OwnerAuthenticator, ProjectCatalogue, SetupStatus, VisitorLog,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub owner_auth: Arc<dyn OwnerAuthenticator>,
    pub visitors: Arc<dyn VisitorLog>,
    pub about: Arc<dyn AboutContent>,
    pub projects: Arc<dyn ProjectCatalogue>,
    pub contact: Arc<dyn ContactInbox>,
    pub setup: Arc<dyn SetupStatus>,
}
