//! Domain ports.
//!
//! Driving ports (`OwnerAuthenticator`, `VisitorLog`, `AboutContent`,
//! `ProjectCatalogue`, `ContactInbox`, `SetupStatus`) are called by inbound
//! adapters. Driven ports (the repositories, `CollectionProbe` and
//! `DurableStorage`) are implemented by outbound adapters.

mod macros;

pub(crate) use macros::define_port_error;

mod about_content;
mod about_repository;
mod collection_probe;
mod contact_inbox;
mod durable_storage;
mod message_repository;
mod owner_authenticator;
mod persistence_error;
mod project_catalogue;
mod project_repository;
mod setup_status;
mod visitor_log;
mod visitor_repository;

#[cfg(test)]
pub use about_content::MockAboutContent;
pub use about_content::AboutContent;
#[cfg(test)]
pub use about_repository::MockAboutRepository;
pub use about_repository::AboutRepository;
#[cfg(test)]
pub use collection_probe::MockCollectionProbe;
pub use collection_probe::CollectionProbe;
#[cfg(test)]
pub use contact_inbox::MockContactInbox;
pub use contact_inbox::ContactInbox;
#[cfg(test)]
pub use durable_storage::MockDurableStorage;
pub use durable_storage::{DurableStorage, MemoryStorage, StorageError};
#[cfg(test)]
pub use message_repository::MockMessageRepository;
pub use message_repository::MessageRepository;
#[cfg(test)]
pub use owner_authenticator::MockOwnerAuthenticator;
pub use owner_authenticator::{OwnerAuthenticator, SecretOwnerAuthenticator};
pub use persistence_error::PersistenceError;
#[cfg(test)]
pub use project_catalogue::MockProjectCatalogue;
pub use project_catalogue::ProjectCatalogue;
#[cfg(test)]
pub use project_repository::MockProjectRepository;
pub use project_repository::ProjectRepository;
#[cfg(test)]
pub use setup_status::MockSetupStatus;
pub use setup_status::SetupStatus;
#[cfg(test)]
pub use visitor_log::MockVisitorLog;
pub use visitor_log::VisitorLog;
#[cfg(test)]
pub use visitor_repository::MockVisitorRepository;
pub use visitor_repository::VisitorRepository;
