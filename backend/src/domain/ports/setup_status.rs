//! Driving port reporting unprovisioned collections.

use async_trait::async_trait;

use crate::domain::{Collection, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SetupStatus: Send + Sync {
    /// Collections whose tables do not exist yet, in provisioning order.
    async fn missing_collections(&self) -> Result<Vec<Collection>, Error>;
}
