//! Translation of pool and Diesel failures into [`PersistenceError`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;
use crate::domain::Collection;
use crate::domain::ports::PersistenceError;

pub(crate) fn map_pool_error(error: PoolError) -> PersistenceError {
    PersistenceError::connection(error.message())
}

/// PostgreSQL reports undefined tables and columns as
/// `relation "x" does not exist` / `column "y" does not exist`.
fn is_missing_relation(message: &str) -> bool {
    ["relation \"", "column \""]
        .into_iter()
        .any(|prefix| message.starts_with(prefix))
        && message.ends_with("does not exist")
}

/// Map a Diesel error raised while querying `collection`.
pub(crate) fn map_diesel_error(error: DieselError, collection: Collection) -> PersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %collection, "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            %collection,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(_, info) if is_missing_relation(info.message()) => {
            PersistenceError::missing_collection(collection)
        }
        DieselError::NotFound => PersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => PersistenceError::query("database query error"),
        _ => PersistenceError::query("database error"),
    }
}
