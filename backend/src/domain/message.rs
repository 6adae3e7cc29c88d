//! Contact-form messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::FieldViolation;
use super::record_id::define_record_id;

define_record_id!(
    /// Store-assigned message identifier.
    MessageId
);

/// A stored contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MessageValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("email must look like local@domain")]
    InvalidEmail,
    #[error("message must not be empty")]
    EmptyMessage,
}

impl FieldViolation for MessageValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::EmptyEmail | Self::InvalidEmail => "email",
            Self::EmptyMessage => "message",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::EmptyEmail => "empty_email",
            Self::InvalidEmail => "invalid_email",
            Self::EmptyMessage => "empty_message",
        }
    }
}

/// Validated contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    name: String,
    email: String,
    message: String,
}

impl NewMessage {
    pub fn try_from_parts(
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<Self, MessageValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MessageValidationError::EmptyName);
        }
        let email = email.trim();
        if email.is_empty() {
            return Err(MessageValidationError::EmptyEmail);
        }
        if !is_plausible_email(email) {
            return Err(MessageValidationError::InvalidEmail);
        }
        let message = message.trim();
        if message.is_empty() {
            return Err(MessageValidationError::EmptyMessage);
        }
        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "a@b.c", "hi", MessageValidationError::EmptyName)]
    #[case("Ada", " ", "hi", MessageValidationError::EmptyEmail)]
    #[case("Ada", "ada.example.com", "hi", MessageValidationError::InvalidEmail)]
    #[case("Ada", "@example.com", "hi", MessageValidationError::InvalidEmail)]
    #[case("Ada", "ada@", "hi", MessageValidationError::InvalidEmail)]
    #[case("Ada", "a da@example.com", "hi", MessageValidationError::InvalidEmail)]
    #[case("Ada", "ada@example.com", "\n", MessageValidationError::EmptyMessage)]
    fn rejects_invalid_submissions(
        #[case] name: &str,
        #[case] email: &str,
        #[case] message: &str,
        #[case] expected: MessageValidationError,
    ) {
        assert_eq!(NewMessage::try_from_parts(name, email, message), Err(expected));
    }

    #[rstest]
    fn accepts_and_trims_valid_submissions() {
        let message = NewMessage::try_from_parts(" Ada ", " ada@example.com ", " Hello! ")
            .expect("valid submission");
        assert_eq!(message.name(), "Ada");
        assert_eq!(message.email(), "ada@example.com");
        assert_eq!(message.message(), "Hello!");
    }
}
