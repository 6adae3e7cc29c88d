//! The singleton "about me" profile.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::FieldViolation;
use super::record_id::define_record_id;
use super::ToolList;

define_record_id!(
    /// Store-assigned identifier of the profile row.
    AboutId
);

/// Stored about-me content. At most one row is expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutProfile {
    pub id: AboutId,
    pub video_url: Option<String>,
    pub description: String,
    pub tools: ToolList,
    pub resume_url: Option<String>,
}

/// Raw profile fields as submitted by the owner. Absent fields are left
/// untouched; an empty URL clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutFields {
    pub video_url: Option<String>,
    pub description: Option<String>,
    pub tools: Option<Vec<String>>,
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AboutValidationError {
    #[error("at least one profile field must be supplied")]
    EmptyUpdate,
}

impl FieldViolation for AboutValidationError {
    fn field(&self) -> &'static str {
        "fields"
    }

    fn code(&self) -> &'static str {
        "empty_update"
    }
}

/// Normalised set of profile changes.
///
/// For the URL fields the outer `Option` selects whether the field changes
/// and the inner one whether it is set or cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutUpdate {
    video_url: Option<Option<String>>,
    description: Option<String>,
    tools: Option<ToolList>,
    resume_url: Option<Option<String>>,
}

impl TryFrom<AboutFields> for AboutUpdate {
    type Error = AboutValidationError;

    fn try_from(fields: AboutFields) -> Result<Self, Self::Error> {
        let update = Self {
            video_url: fields.video_url.as_deref().map(optional_url),
            description: fields.description.map(|text| text.trim().to_owned()),
            tools: fields.tools.map(ToolList::from_names),
            resume_url: fields.resume_url.as_deref().map(optional_url),
        };
        if update.is_empty() {
            return Err(AboutValidationError::EmptyUpdate);
        }
        Ok(update)
    }
}

impl AboutUpdate {
    pub fn video_url(&self) -> Option<Option<&str>> {
        self.video_url.as_ref().map(Option::as_deref)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tools(&self) -> Option<&ToolList> {
        self.tools.as_ref()
    }

    pub fn resume_url(&self) -> Option<Option<&str>> {
        self.resume_url.as_ref().map(Option::as_deref)
    }

    fn is_empty(&self) -> bool {
        self.video_url.is_none()
            && self.description.is_none()
            && self.tools.is_none()
            && self.resume_url.is_none()
    }

    /// Overwrite the supplied fields of `profile`.
    pub fn apply_to(&self, profile: &mut AboutProfile) {
        if let Some(video_url) = &self.video_url {
            profile.video_url.clone_from(video_url);
        }
        if let Some(description) = &self.description {
            profile.description.clone_from(description);
        }
        if let Some(tools) = &self.tools {
            profile.tools = tools.clone();
        }
        if let Some(resume_url) = &self.resume_url {
            profile.resume_url.clone_from(resume_url);
        }
    }

    /// First profile row built from this update; missing fields start empty.
    #[must_use]
    pub fn to_new_profile(&self, id: AboutId) -> AboutProfile {
        let mut profile = AboutProfile {
            id,
            video_url: None,
            description: String::new(),
            tools: ToolList::new(),
            resume_url: None,
        };
        self.apply_to(&mut profile);
        profile
    }
}

/// Trim a submitted URL, mapping blank input to "clear".
pub(crate) fn optional_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
