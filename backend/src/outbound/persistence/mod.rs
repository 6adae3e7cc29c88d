//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Each repository translates between Diesel rows and domain records and
//! maps database failures onto [`PersistenceError`](crate::domain::ports::PersistenceError).
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay private
//! to this module. Tables are provisioned externally; a missing table is
//! reported as `MissingCollection` rather than created.
//!
//! # Example
//!
//! ```ignore
//! use folio::outbound::persistence::{DbPool, DieselProjectRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/folio")).await?;
//! let projects = DieselProjectRepository::new(pool);
//! ```

mod diesel_about_repository;
mod diesel_collection_probe;
mod diesel_message_repository;
mod diesel_project_repository;
mod diesel_visitor_repository;
mod error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_about_repository::DieselAboutRepository;
pub use diesel_collection_probe::DieselCollectionProbe;
pub use diesel_message_repository::DieselMessageRepository;
pub use diesel_project_repository::DieselProjectRepository;
pub use diesel_visitor_repository::DieselVisitorRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
