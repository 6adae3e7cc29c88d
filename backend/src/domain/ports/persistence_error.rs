//! Error type shared by the record repositories.

use tracing::debug;

use super::define_port_error;
use crate::domain::{Collection, Error};

define_port_error! {
    /// Failures raised by record repositories.
    pub enum PersistenceError {
        /// The store could not be reached or a connection was lost.
        Connection { message: String } => "store connection failed: {message}",
        /// The store rejected or failed to run a query.
        Query { message: String } => "store query failed: {message}",
        /// The backing table has not been provisioned.
        MissingCollection { collection: Collection } => "collection `{collection}` does not exist",
    }
}

impl From<PersistenceError> for Error {
    fn from(error: PersistenceError) -> Self {
        debug!(%error, "store failure surfaced to caller");
        match error {
            PersistenceError::Connection { message } => Self::service_unavailable(message),
            PersistenceError::Query { message } => Self::internal(message),
            PersistenceError::MissingCollection { collection } => Self::service_unavailable(
                format!("collection `{collection}` has not been set up"),
            )
            .with_details(serde_json::json!({ "collection": collection })),
        }
    }
}
