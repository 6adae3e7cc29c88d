//! Driving port for the about profile.

use async_trait::async_trait;

use crate::domain::{AboutProfile, AboutUpdate, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AboutContent: Send + Sync {
    /// The profile, or `None` when nothing has been saved yet or the table
    /// is missing.
    async fn get_about(&self) -> Result<Option<AboutProfile>, Error>;

    /// Create the profile on first save, otherwise update it in place.
    async fn update_about(&self, update: &AboutUpdate) -> Result<AboutProfile, Error>;
}
