//! Driving port for owner logins.
//!
//! Inbound adapters call this to check a name/password pair without
//! knowing where the owner secret comes from.

use async_trait::async_trait;
use tracing::warn;

use crate::domain::{Error, OwnerCredentials, OwnerSecret};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerAuthenticator: Send + Sync {
    /// Succeed only for the configured owner.
    async fn authenticate(&self, credentials: &OwnerCredentials) -> Result<(), Error>;
}

/// Authenticator backed by the configured [`OwnerSecret`].
///
/// With no secret configured every attempt is rejected.
#[derive(Debug, Clone, Default)]
pub struct SecretOwnerAuthenticator {
    secret: Option<OwnerSecret>,
}

impl SecretOwnerAuthenticator {
    pub fn new(secret: Option<OwnerSecret>) -> Self {
        Self { secret }
    }
}

#[async_trait]
impl OwnerAuthenticator for SecretOwnerAuthenticator {
    async fn authenticate(&self, credentials: &OwnerCredentials) -> Result<(), Error> {
        let Some(secret) = &self.secret else {
            warn!("owner login attempted but no owner is configured");
            return Err(Error::unauthorized("invalid credentials"));
        };
        if secret.verify(credentials) {
            Ok(())
        } else {
            warn!("owner login rejected");
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}
