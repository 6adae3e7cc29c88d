//! Reports which collections still need provisioning.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{CollectionProbe, PersistenceError, SetupStatus};
use crate::domain::{Collection, Error};

#[derive(Clone)]
pub struct SetupStatusService<P> {
    probe: Arc<P>,
}

impl<P> SetupStatusService<P> {
    pub fn new(probe: Arc<P>) -> Self {
        Self { probe }
    }
}

#[async_trait]
impl<P: CollectionProbe> SetupStatus for SetupStatusService<P> {
    async fn missing_collections(&self) -> Result<Vec<Collection>, Error> {
        let mut missing = Vec::new();
        for collection in Collection::ALL {
            match self.probe.probe(collection).await {
                Ok(()) => {}
                Err(PersistenceError::MissingCollection { collection }) => {
                    warn!(%collection, "collection is not provisioned");
                    missing.push(collection);
                }
                Err(error) => return Err(error.into()),
            }
        }
        Ok(missing)
    }
}
