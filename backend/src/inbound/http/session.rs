//! Cookie-backed session access for handlers.
//!
//! [`SessionContext`] wraps the Actix session and serves as the
//! [`DurableStorage`] behind the domain [`SessionStore`], so handlers work
//! with [`Session`] values rather than raw cookie keys.

use actix_session::Session as CookieSession;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::{info, warn};

use crate::domain::ports::{DurableStorage, StorageError};
use crate::domain::{self, Error, Session, SessionStore};

/// Handler-facing wrapper around the Actix session cookie.
#[derive(Clone)]
pub struct SessionContext(CookieSession);

fn map_storage_error(error: StorageError) -> Error {
    Error::internal(format!("session storage failed: {error}"))
}

impl SessionContext {
    pub fn new(session: CookieSession) -> Self {
        Self(session)
    }

    fn store(&self) -> Result<SessionStore<Self>, Error> {
        SessionStore::restore(self.clone()).map_err(map_storage_error)
    }

    /// The session carried by the request cookie, if any.
    pub fn current(&self) -> Result<Option<Session>, Error> {
        Ok(self.store()?.into_current())
    }

    /// Require any session or return `401 Unauthorized`.
    pub fn require_session(&self) -> Result<Session, Error> {
        domain::require_session(self.current()?)
    }

    /// Require an owner session: `401` without a session, `403` for visitors.
    pub fn require_owner(&self) -> Result<Session, Error> {
        domain::require_owner(self.current()?)
    }

    /// Replace the cookie's session with a new one.
    pub fn login(&self, name: &str, is_owner: bool) -> Result<Session, Error> {
        let mut store = self.store()?;
        let session = store.login(name, is_owner).map_err(map_storage_error)?.clone();
        info!(is_owner, "session started");
        Ok(session)
    }

    pub fn logout(&self) -> Result<(), Error> {
        self.store()?.logout().map_err(map_storage_error)
    }
}

impl DurableStorage for SessionContext {
    /// Values that fail to decode are treated as absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.0.get::<String>(key) {
            Ok(value) => Ok(value),
            Err(error) => {
                warn!(key, %error, "undecodable session value ignored");
                Ok(None)
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0
            .insert(key, value)
            .map_err(|error| StorageError::write(key, error.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.0.remove(key);
        Ok(())
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = CookieSession::from_request(req, payload);
        Box::pin(async move { fut.await.map(Self::new) })
    }
}
