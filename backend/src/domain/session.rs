//! Browser session: a display name plus the owner flag.
//!
//! The session lives only in durable storage. [`SessionStore`] reads it once
//! when built and rewrites both keys on every login or logout, replacing any
//! earlier session wholesale.

use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::ports::{DurableStorage, StorageError};

/// Storage key holding the stringified owner flag.
pub const OWNER_FLAG_KEY: &str = "isOwner";
/// Storage key holding the display name. Its absence means "no session".
pub const USER_NAME_KEY: &str = "userName";

/// An active session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[schema(example = "Ada")]
    name: String,
    is_owner: bool,
}

impl Session {
    pub fn new(name: impl Into<String>, is_owner: bool) -> Self {
        Self {
            name: name.into(),
            is_owner,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_owner(&self) -> bool {
        self.is_owner
    }
}

/// Session state backed by durable storage.
///
/// # Examples
/// ```
/// use folio::domain::SessionStore;
/// use folio::domain::ports::MemoryStorage;
///
/// let storage = MemoryStorage::new();
/// let mut store = SessionStore::restore(storage.clone()).expect("restore");
/// store.login("Alice", false).expect("login");
///
/// let reloaded = SessionStore::restore(storage).expect("restore");
/// let session = reloaded.current().expect("session survives reload");
/// assert_eq!(session.name(), "Alice");
/// assert!(!session.is_owner());
/// ```
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    current: Option<Session>,
}

impl<S: DurableStorage> SessionStore<S> {
    /// Read any previously persisted session from `storage`.
    pub fn restore(storage: S) -> Result<Self, StorageError> {
        let current = match storage.read(USER_NAME_KEY)? {
            Some(name) if !name.is_empty() => {
                let is_owner = storage.read(OWNER_FLAG_KEY)?.as_deref() == Some("true");
                Some(Session::new(name, is_owner))
            }
            _ => None,
        };
        Ok(Self { storage, current })
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn into_current(self) -> Option<Session> {
        self.current
    }

    /// Persist a new session, replacing whatever was stored before.
    ///
    /// `name` should already be validated as non-blank; a blank name would
    /// read back as "no session". When a write fails part way, storage keeps
    /// at most a non-owner session.
    pub fn login(&mut self, name: impl Into<String>, is_owner: bool) -> Result<&Session, StorageError> {
        let session = Session::new(name, is_owner);
        // The flag goes first and comes back last, so a partial write never
        // pairs an owner flag with a different name.
        self.storage.remove(OWNER_FLAG_KEY)?;
        if let Some(current) = self.current.as_mut() {
            current.is_owner = false;
        }
        self.storage.write(USER_NAME_KEY, session.name())?;
        self.storage
            .write(OWNER_FLAG_KEY, if is_owner { "true" } else { "false" })?;
        debug!(is_owner, "session stored");
        Ok(self.current.insert(session))
    }

    /// Forget the session in storage and in memory.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.storage.remove(OWNER_FLAG_KEY)?;
        self.storage.remove(USER_NAME_KEY)?;
        self.current = None;
        Ok(())
    }
}
