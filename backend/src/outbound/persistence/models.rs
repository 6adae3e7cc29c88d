//! Diesel row structs and their conversions into domain records.
//!
//! Rows never leave the persistence module; repositories hand out domain
//! types only.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use tracing::warn;

use super::schema::{about, messages, projects, visitors};
use crate::domain::{
    AboutId, AboutProfile, AboutUpdate, Message, MessageId, Project, ProjectCategory,
    ProjectChanges, ProjectDraft, ProjectId, ToolList, Visitor, VisitorId,
};

/// Decode a JSONB tool column. NULL and anything other than an array of
/// strings read as an empty list.
pub(crate) fn tools_from_json(value: Option<Value>) -> ToolList {
    let Some(value) = value else {
        return ToolList::new();
    };
    if value.is_null() {
        return ToolList::new();
    }
    match serde_json::from_value::<Vec<String>>(value) {
        Ok(names) => ToolList::from_stored(names),
        Err(error) => {
            warn!(%error, "malformed tools column, reading as empty");
            ToolList::new()
        }
    }
}

pub(crate) fn tools_to_json(tools: &ToolList) -> Value {
    Value::from(tools.as_slice().to_vec())
}

fn category_from_column(value: Option<&str>, id: i32) -> ProjectCategory {
    match value {
        None => ProjectCategory::default(),
        Some(label) => label.parse().unwrap_or_else(|_| {
            warn!(value = label, project_id = id, "unrecognised category, defaulting");
            ProjectCategory::default()
        }),
    }
}

// ---------------------------------------------------------------------------
// Visitors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = visitors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct VisitorRow {
    pub id: i32,
    pub name: String,
    pub relation: String,
    pub visit_time: DateTime<Utc>,
}

impl From<VisitorRow> for Visitor {
    fn from(row: VisitorRow) -> Self {
        Self {
            id: VisitorId::new(row.id),
            name: row.name,
            relation: row.relation,
            visit_time: row.visit_time,
        }
    }
}

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = about)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AboutRow {
    pub id: i32,
    pub video_url: Option<String>,
    pub description: Option<String>,
    pub tools: Option<Value>,
    pub resume_url: Option<String>,
}

impl From<AboutRow> for AboutProfile {
    fn from(row: AboutRow) -> Self {
        Self {
            id: AboutId::new(row.id),
            video_url: row.video_url,
            description: row.description.unwrap_or_default(),
            tools: tools_from_json(row.tools),
            resume_url: row.resume_url,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = about)]
pub(crate) struct NewAboutRow<'a> {
    pub video_url: Option<&'a str>,
    pub description: &'a str,
    pub tools: Value,
    pub resume_url: Option<&'a str>,
}

impl<'a> From<&'a AboutUpdate> for NewAboutRow<'a> {
    fn from(update: &'a AboutUpdate) -> Self {
        Self {
            video_url: update.video_url().flatten(),
            description: update.description().unwrap_or_default(),
            tools: update.tools().map_or_else(|| Value::Array(Vec::new()), tools_to_json),
            resume_url: update.resume_url().flatten(),
        }
    }
}

/// Only the supplied fields are written; `Some(None)` stores NULL.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = about)]
pub(crate) struct AboutChangeset<'a> {
    pub video_url: Option<Option<&'a str>>,
    pub description: Option<&'a str>,
    pub tools: Option<Value>,
    pub resume_url: Option<Option<&'a str>>,
}

impl<'a> From<&'a AboutUpdate> for AboutChangeset<'a> {
    fn from(update: &'a AboutUpdate) -> Self {
        Self {
            video_url: update.video_url(),
            description: update.description(),
            tools: update.tools().map(tools_to_json),
            resume_url: update.resume_url(),
        }
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProjectRow {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub live_link: Option<String>,
    pub source_code_link: Option<String>,
    pub tools: Option<Value>,
    pub category: Option<String>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        let category = category_from_column(row.category.as_deref(), row.id);
        Self {
            id: ProjectId::new(row.id),
            title: row.title,
            description: row.description.unwrap_or_default(),
            image_url: row.image_url,
            live_link: row.live_link,
            source_code_link: row.source_code_link,
            tools: tools_from_json(row.tools),
            category,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub(crate) struct NewProjectRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub image_url: Option<&'a str>,
    pub live_link: Option<&'a str>,
    pub source_code_link: Option<&'a str>,
    pub tools: Value,
    pub category: &'static str,
}

impl<'a> From<&'a ProjectDraft> for NewProjectRow<'a> {
    fn from(draft: &'a ProjectDraft) -> Self {
        Self {
            title: draft.title(),
            description: draft.description(),
            image_url: draft.image_url(),
            live_link: draft.live_link(),
            source_code_link: draft.source_code_link(),
            tools: tools_to_json(draft.tools()),
            category: draft.category().label(),
        }
    }
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = projects)]
pub(crate) struct ProjectChangeset<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub image_url: Option<Option<&'a str>>,
    pub live_link: Option<Option<&'a str>>,
    pub source_code_link: Option<Option<&'a str>>,
    pub tools: Option<Value>,
    pub category: Option<&'static str>,
}

impl<'a> From<&'a ProjectChanges> for ProjectChangeset<'a> {
    fn from(changes: &'a ProjectChanges) -> Self {
        Self {
            title: changes.title(),
            description: changes.description(),
            image_url: changes.image_url(),
            live_link: changes.live_link(),
            source_code_link: changes.source_code_link(),
            tools: changes.tools().map(tools_to_json),
            category: changes.category().map(ProjectCategory::label),
        }
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MessageRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Self {
            id: MessageId::new(row.id),
            name: row.name,
            email: row.email,
            message: row.message,
            timestamp: row.sent_at,
        }
    }
}
