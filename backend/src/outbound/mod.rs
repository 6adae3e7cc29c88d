//! Outbound adapters implementing the driven ports.
//!
//! - **persistence**: PostgreSQL repositories on Diesel and `diesel-async`
//! - **memory**: in-process repositories for database-less runs and tests
//!
//! Adapters translate between domain records and storage representations
//! and contain no business rules.

pub mod memory;
pub mod persistence;
