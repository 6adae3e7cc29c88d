//! Owner credentials and the configured owner secret.
//!
//! The owner logs in with a name and password. The server keeps only the
//! owner's name and the SHA-256 digest of the password; submitted passwords
//! are zeroised on drop.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use super::error::FieldViolation;

/// Reasons an owner login payload is rejected before authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OwnerLoginValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("password must not be empty")]
    EmptyPassword,
}

impl FieldViolation for OwnerLoginValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::EmptyPassword => "password",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::EmptyPassword => "empty_password",
        }
    }
}

/// Submitted owner credentials.
///
/// The name is trimmed; the password keeps caller whitespace.
#[derive(Clone, PartialEq, Eq)]
pub struct OwnerCredentials {
    name: String,
    password: Zeroizing<String>,
}

impl OwnerCredentials {
    pub fn try_from_parts(name: &str, password: &str) -> Result<Self, OwnerLoginValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(OwnerLoginValidationError::EmptyName);
        }
        if password.is_empty() {
            return Err(OwnerLoginValidationError::EmptyPassword);
        }
        Ok(Self {
            name: name.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for OwnerCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnerCredentials")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Errors raised while loading the configured owner secret.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OwnerSecretError {
    #[error("owner name must not be empty")]
    EmptyName,
    #[error("owner password digest must be 64 hex characters: {0}")]
    InvalidDigest(String),
}

/// The owner's name plus the SHA-256 digest of their password.
///
/// # Examples
/// ```
/// use folio::domain::{OwnerCredentials, OwnerSecret};
///
/// // sha256("password")
/// let secret = OwnerSecret::from_hex(
///     "owner",
///     "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8",
/// )
/// .expect("valid digest");
/// let attempt = OwnerCredentials::try_from_parts("owner", "password").expect("shape");
/// assert!(secret.verify(&attempt));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct OwnerSecret {
    name: String,
    digest: [u8; 32],
}

impl OwnerSecret {
    /// Parse a hex-encoded SHA-256 password digest.
    pub fn from_hex(name: &str, digest_hex: &str) -> Result<Self, OwnerSecretError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(OwnerSecretError::EmptyName);
        }
        let bytes = hex::decode(digest_hex.trim())
            .map_err(|err| OwnerSecretError::InvalidDigest(err.to_string()))?;
        let digest = <[u8; 32]>::try_from(bytes.as_slice())
            .map_err(|_| OwnerSecretError::InvalidDigest(format!("got {} bytes", bytes.len())))?;
        Ok(Self {
            name: name.to_owned(),
            digest,
        })
    }

    /// Build a secret from a plaintext password.
    pub fn from_password(name: &str, password: &str) -> Result<Self, OwnerSecretError> {
        Self::from_hex(name, &hex::encode(Sha256::digest(password.as_bytes())))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check submitted credentials. The digest comparison does not stop at
    /// the first differing byte.
    #[must_use]
    pub fn verify(&self, credentials: &OwnerCredentials) -> bool {
        let submitted = Sha256::digest(credentials.password().as_bytes());
        let difference = self
            .digest
            .iter()
            .zip(submitted.iter())
            .fold(0_u8, |acc, (expected, actual)| acc | (expected ^ actual));
        let name_matches = credentials.name() == self.name;
        difference == 0 && name_matches
    }
}

impl fmt::Debug for OwnerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnerSecret")
            .field("name", &self.name)
            .field("digest", &"<redacted>")
            .finish()
    }
}
