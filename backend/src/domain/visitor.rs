//! Visitor log entries.
//!
//! A visitor row is written once per visitor login and never changed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::FieldViolation;
use super::record_id::define_record_id;

define_record_id!(
    /// Store-assigned visitor identifier.
    VisitorId
);

/// A logged visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    pub id: VisitorId,
    #[schema(example = "Ada")]
    pub name: String,
    /// Free-text relation or occupation, e.g. "Recruiter".
    #[schema(example = "Recruiter")]
    pub relation: String,
    pub visit_time: DateTime<Utc>,
}

/// Reasons a visitor introduction is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VisitorValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("relation must not be empty")]
    EmptyRelation,
}

impl FieldViolation for VisitorValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::EmptyRelation => "relation",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::EmptyRelation => "empty_relation",
        }
    }
}

/// Validated input for a new visitor row.
///
/// # Examples
/// ```
/// use folio::domain::NewVisitor;
///
/// let visitor = NewVisitor::try_from_parts(" Ada ", "Engineer").expect("valid");
/// assert_eq!(visitor.name(), "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisitor {
    name: String,
    relation: String,
}

impl NewVisitor {
    pub fn try_from_parts(name: &str, relation: &str) -> Result<Self, VisitorValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(VisitorValidationError::EmptyName);
        }
        let relation = relation.trim();
        if relation.is_empty() {
            return Err(VisitorValidationError::EmptyRelation);
        }
        Ok(Self {
            name: name.to_owned(),
            relation: relation.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "Engineer", VisitorValidationError::EmptyName)]
    #[case("  ", "Engineer", VisitorValidationError::EmptyName)]
    #[case("Ada", "", VisitorValidationError::EmptyRelation)]
    #[case("", "", VisitorValidationError::EmptyName)]
    fn rejects_blank_fields(
        #[case] name: &str,
        #[case] relation: &str,
        #[case] expected: VisitorValidationError,
    ) {
        assert_eq!(NewVisitor::try_from_parts(name, relation), Err(expected));
    }

    #[rstest]
    fn trims_accepted_fields() {
        let visitor = NewVisitor::try_from_parts(" Ada ", "\tFriend\n").expect("valid input");
        assert_eq!(visitor.name(), "Ada");
        assert_eq!(visitor.relation(), "Friend");
    }

    #[rstest]
    fn violations_name_their_field() {
        assert_eq!(VisitorValidationError::EmptyRelation.field(), "relation");
        assert_eq!(VisitorValidationError::EmptyName.code(), "empty_name");
    }
}
