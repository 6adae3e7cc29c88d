//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::cookie::{Key, SameSite};
use chrono::{FixedOffset, Offset, Utc};
use folio::domain::OwnerSecret;
use folio::outbound::persistence::DbPool;
use mockable::{Clock, DefaultClock};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) owner: Option<OwnerSecret>,
    pub(crate) display_offset: FixedOffset,
    pub(crate) clock: Arc<dyn Clock>,
}

impl ServerConfig {
    /// Construct a configuration backed by the in-memory store, no owner and
    /// UTC day buckets.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
            owner: None,
            display_offset: Utc.fix(),
            clock: Arc::new(DefaultClock),
        }
    }

    /// Attach a database connection pool; repositories then use PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn with_owner(mut self, owner: Option<OwnerSecret>) -> Self {
        self.owner = owner;
        self
    }

    /// Offset used when bucketing visits by calendar day.
    #[must_use]
    pub fn with_display_offset(mut self, offset: FixedOffset) -> Self {
        self.display_offset = offset;
        self
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}
