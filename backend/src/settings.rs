//! Application settings loaded via OrthoConfig.
//!
//! Values come from `FOLIO_*` environment variables or the matching
//! command-line flags. Every field is optional; accessors apply defaults and
//! validate, so a bad value fails at startup rather than on first use.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use actix_web::cookie::{Key, SameSite};
use chrono::FixedOffset;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;
use zeroize::Zeroize;

use crate::domain::{OwnerSecret, OwnerSecretError};
use crate::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_KEY_PATH: &str = "/var/run/secrets/session_key";
/// India Standard Time, the site's home timezone.
const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;
const SESSION_KEY_MIN_LEN: usize = 64;
const SAME_SITE_EXPECTED: &str = "lax|strict|none";

/// Configuration values for the HTTP server and its adapters.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FOLIO")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without one the server keeps data in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub database_max_connections: Option<u32>,
    /// Display name the owner logs in with.
    pub owner_name: Option<String>,
    /// Hex SHA-256 digest of the owner password.
    pub owner_password_sha256: Option<String>,
    /// Offset used to bucket visits by calendar day.
    pub display_utc_offset_minutes: Option<i32>,
    /// File holding at least 64 bytes of session key material.
    pub session_key_file: Option<PathBuf>,
    /// Mark the session cookie `Secure`. Defaults to `true`.
    pub cookie_secure: Option<bool>,
    /// `SameSite` policy for the session cookie. Defaults to `lax`.
    pub same_site: Option<String>,
    /// Fall back to a generated session key when the key file is unreadable.
    /// Debug builds default to `true`; release builds reject `true`.
    pub allow_ephemeral_session_key: Option<bool>,
}

/// Errors raised while validating settings.
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidValue {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("owner_name and owner_password_sha256 must be set together")]
    IncompleteOwner,
    #[error("invalid owner credentials: {0}")]
    Owner(#[from] OwnerSecretError),
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    #[error("same_site=none requires cookie_secure=true")]
    InsecureSameSiteNone,
    #[error("allow_ephemeral_session_key must be false in release builds")]
    EphemeralNotAllowed,
}

/// Build mode for session setting validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds fall back to a generated key and tolerate insecure cookies.
    Debug,
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Validated session cookie settings.
pub struct SessionSettings {
    pub key: Key,
    pub cookie_secure: bool,
    pub same_site: SameSite,
}

impl AppSettings {
    /// Parse the listen address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// [`SettingsError::InvalidValue`] when the address does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|_| SettingsError::InvalidValue {
            name: "bind_addr",
            value: raw.to_owned(),
            expected: "host:port",
        })
    }

    /// Pool settings, or `None` when no database URL is configured.
    #[must_use]
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref().map(str::trim)?;
        if url.is_empty() {
            return None;
        }
        let config = PoolConfig::new(url);
        Some(match self.database_max_connections {
            Some(max) => config.with_max_size(max),
            None => config,
        })
    }

    /// The configured owner, if any.
    ///
    /// # Errors
    /// [`SettingsError::IncompleteOwner`] when only one of the two fields is
    /// set, or [`SettingsError::Owner`] when the digest is malformed.
    pub fn owner_secret(&self) -> Result<Option<OwnerSecret>, SettingsError> {
        match (
            self.owner_name.as_deref(),
            self.owner_password_sha256.as_deref(),
        ) {
            (None, None) => Ok(None),
            (Some(name), Some(digest)) => Ok(Some(OwnerSecret::from_hex(name, digest)?)),
            _ => Err(SettingsError::IncompleteOwner),
        }
    }

    /// Offset used to bucket visits by day, defaulting to +05:30.
    ///
    /// # Errors
    /// [`SettingsError::InvalidValue`] when the offset is a day or more.
    pub fn display_offset(&self) -> Result<FixedOffset, SettingsError> {
        let minutes = self
            .display_utc_offset_minutes
            .unwrap_or(DEFAULT_UTC_OFFSET_MINUTES);
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| SettingsError::InvalidValue {
                name: "display_utc_offset_minutes",
                value: minutes.to_string(),
                expected: "minutes strictly between -1440 and 1440",
            })
    }

    /// Resolve the session key and cookie attributes.
    ///
    /// # Errors
    /// Fails when the key file is short or unreadable without the ephemeral
    /// fallback, when a release build opts into that fallback, and when
    /// `same_site` is invalid.
    pub fn session_settings(&self, mode: BuildMode) -> Result<SessionSettings, SettingsError> {
        let allow_ephemeral = self.allow_ephemeral(mode)?;
        let cookie_secure = self.cookie_secure.unwrap_or(true);
        let same_site = self.same_site(mode, cookie_secure)?;
        let path = self
            .session_key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_KEY_PATH));
        let key = match read_key(&path) {
            Ok(key) => key,
            Err(SettingsError::KeyRead { path, source })
                if allow_ephemeral =>
            {
                warn!(
                    path = %path.display(),
                    error = %source,
                    "using temporary session key (dev only)"
                );
                Key::generate()
            }
            Err(error) => return Err(error),
        };
        Ok(SessionSettings {
            key,
            cookie_secure,
            same_site,
        })
    }

    fn allow_ephemeral(&self, mode: BuildMode) -> Result<bool, SettingsError> {
        match (mode, self.allow_ephemeral_session_key) {
            (BuildMode::Release, Some(true)) => Err(SettingsError::EphemeralNotAllowed),
            (_, Some(allow)) => Ok(allow),
            (_, None) => Ok(mode.is_debug()),
        }
    }

    fn same_site(&self, mode: BuildMode, cookie_secure: bool) -> Result<SameSite, SettingsError> {
        let Some(value) = self.same_site.as_deref() else {
            return Ok(SameSite::Lax);
        };
        match value.to_ascii_lowercase().as_str() {
            "lax" => Ok(SameSite::Lax),
            "strict" => Ok(SameSite::Strict),
            "none" if cookie_secure => Ok(SameSite::None),
            "none" if mode.is_debug() => {
                warn!("same_site=none without a secure cookie; browsers may reject it");
                Ok(SameSite::None)
            }
            "none" => Err(SettingsError::InsecureSameSiteNone),
            _ => Err(SettingsError::InvalidValue {
                name: "same_site",
                value: value.to_owned(),
                expected: SAME_SITE_EXPECTED,
            }),
        }
    }
}

fn read_key(path: &Path) -> Result<Key, SettingsError> {
    let mut bytes = std::fs::read(path).map_err(|source| SettingsError::KeyRead {
        path: path.to_path_buf(),
        source,
    })?;
    let length = bytes.len();
    if length < SESSION_KEY_MIN_LEN {
        bytes.zeroize();
        return Err(SettingsError::KeyTooShort {
            path: path.to_path_buf(),
            length,
            min_len: SESSION_KEY_MIN_LEN,
        });
    }
    let key = Key::derive_from(&bytes);
    bytes.zeroize();
    Ok(key)
}
