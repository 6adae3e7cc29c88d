//! The four record collections held by the store.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A named table in the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Visitors,
    About,
    Projects,
    Messages,
}

impl Collection {
    /// Every collection, in provisioning order.
    pub const ALL: [Self; 4] = [Self::Visitors, Self::About, Self::Projects, Self::Messages];

    /// Table name used by the relational store.
    #[must_use]
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::Visitors => "visitors",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Messages => "messages",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}
