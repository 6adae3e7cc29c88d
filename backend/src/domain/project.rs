//! Portfolio projects, their categories and the category filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::about::optional_url;
use super::error::FieldViolation;
use super::record_id::define_record_id;
use super::ToolList;

define_record_id!(
    /// Store-assigned project identifier.
    ProjectId
);

/// Fixed set of project categories, serialised by display label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ProjectCategory {
    #[serde(rename = "Data Analysis")]
    DataAnalysis,
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    #[default]
    #[serde(rename = "Full Stack")]
    FullStack,
    #[serde(rename = "Data Science")]
    DataScience,
}

impl ProjectCategory {
    pub const ALL: [Self; 4] = [
        Self::DataAnalysis,
        Self::MachineLearning,
        Self::FullStack,
        Self::DataScience,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DataAnalysis => "Data Analysis",
            Self::MachineLearning => "Machine Learning",
            Self::FullStack => "Full Stack",
            Self::DataScience => "Data Science",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectCategory {
    type Err = ProjectValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or(ProjectValidationError::UnknownCategory)
    }
}

/// A stored project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    #[schema(example = "Churn model")]
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub live_link: Option<String>,
    pub source_code_link: Option<String>,
    pub tools: ToolList,
    pub category: ProjectCategory,
}

/// Raw project fields as submitted by the owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub live_link: Option<String>,
    pub source_code_link: Option<String>,
    pub tools: Option<Vec<String>>,
    #[schema(example = "Full Stack")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProjectValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("category must be one of: Data Analysis, Machine Learning, Full Stack, Data Science")]
    UnknownCategory,
    #[error("at least one project field must be supplied")]
    EmptyUpdate,
}

impl FieldViolation for ProjectValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "title",
            Self::UnknownCategory => "category",
            Self::EmptyUpdate => "fields",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "empty_title",
            Self::UnknownCategory => "unknown_category",
            Self::EmptyUpdate => "empty_update",
        }
    }
}

fn parse_title(raw: &str) -> Result<String, ProjectValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(ProjectValidationError::EmptyTitle);
    }
    Ok(title.to_owned())
}

/// Validated input for a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    title: String,
    description: String,
    image_url: Option<String>,
    live_link: Option<String>,
    source_code_link: Option<String>,
    tools: ToolList,
    category: ProjectCategory,
}

impl TryFrom<ProjectFields> for ProjectDraft {
    type Error = ProjectValidationError;

    fn try_from(fields: ProjectFields) -> Result<Self, Self::Error> {
        let title = parse_title(fields.title.as_deref().unwrap_or_default())?;
        let category = match fields.category.as_deref() {
            Some(raw) => raw.trim().parse::<ProjectCategory>()?,
            None => ProjectCategory::default(),
        };
        Ok(Self {
            title,
            description: fields
                .description
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_owned(),
            image_url: fields.image_url.as_deref().and_then(optional_url),
            live_link: fields.live_link.as_deref().and_then(optional_url),
            source_code_link: fields.source_code_link.as_deref().and_then(optional_url),
            tools: fields.tools.map(ToolList::from_names).unwrap_or_default(),
            category,
        })
    }
}

impl ProjectDraft {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn live_link(&self) -> Option<&str> {
        self.live_link.as_deref()
    }

    pub fn source_code_link(&self) -> Option<&str> {
        self.source_code_link.as_deref()
    }

    pub fn tools(&self) -> &ToolList {
        &self.tools
    }

    pub fn category(&self) -> ProjectCategory {
        self.category
    }

    /// Materialise the stored record for `id`.
    #[must_use]
    pub fn into_project(self, id: ProjectId) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            live_link: self.live_link,
            source_code_link: self.source_code_link,
            tools: self.tools,
            category: self.category,
        }
    }
}

/// Validated partial update of a project.
///
/// URL fields use `Some(None)` to clear the stored link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectChanges {
    title: Option<String>,
    description: Option<String>,
    image_url: Option<Option<String>>,
    live_link: Option<Option<String>>,
    source_code_link: Option<Option<String>>,
    tools: Option<ToolList>,
    category: Option<ProjectCategory>,
}

impl TryFrom<ProjectFields> for ProjectChanges {
    type Error = ProjectValidationError;

    fn try_from(fields: ProjectFields) -> Result<Self, Self::Error> {
        let changes = Self {
            title: fields.title.as_deref().map(parse_title).transpose()?,
            description: fields.description.map(|text| text.trim().to_owned()),
            image_url: fields.image_url.as_deref().map(optional_url),
            live_link: fields.live_link.as_deref().map(optional_url),
            source_code_link: fields.source_code_link.as_deref().map(optional_url),
            tools: fields.tools.map(ToolList::from_names),
            category: fields
                .category
                .as_deref()
                .map(|raw| raw.trim().parse::<ProjectCategory>())
                .transpose()?,
        };
        if changes == Self::none() {
            return Err(ProjectValidationError::EmptyUpdate);
        }
        Ok(changes)
    }
}

impl ProjectChanges {
    const fn none() -> Self {
        Self {
            title: None,
            description: None,
            image_url: None,
            live_link: None,
            source_code_link: None,
            tools: None,
            category: None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn image_url(&self) -> Option<Option<&str>> {
        self.image_url.as_ref().map(Option::as_deref)
    }

    pub fn live_link(&self) -> Option<Option<&str>> {
        self.live_link.as_ref().map(Option::as_deref)
    }

    pub fn source_code_link(&self) -> Option<Option<&str>> {
        self.source_code_link.as_ref().map(Option::as_deref)
    }

    pub fn tools(&self) -> Option<&ToolList> {
        self.tools.as_ref()
    }

    pub fn category(&self) -> Option<ProjectCategory> {
        self.category
    }

    /// Overwrite the supplied fields of `project`.
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(title) = &self.title {
            project.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            project.description.clone_from(description);
        }
        if let Some(image_url) = &self.image_url {
            project.image_url.clone_from(image_url);
        }
        if let Some(live_link) = &self.live_link {
            project.live_link.clone_from(live_link);
        }
        if let Some(source_code_link) = &self.source_code_link {
            project.source_code_link.clone_from(source_code_link);
        }
        if let Some(tools) = &self.tools {
            project.tools = tools.clone();
        }
        if let Some(category) = self.category {
            project.category = category;
        }
    }
}

/// Category selection for the project list.
///
/// `all` is the sentinel for "no filtering"; anything else must be an exact
/// category label.
///
/// # Examples
/// ```
/// use folio::domain::{CategoryFilter, ProjectCategory};
///
/// assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
/// assert_eq!(
///     "Data Science".parse::<CategoryFilter>(),
///     Ok(CategoryFilter::Only(ProjectCategory::DataScience))
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    pub const ALL_SENTINEL: &'static str = "all";

    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == *category,
        }
    }

    /// Keep the projects matching this filter, preserving order.
    #[must_use]
    pub fn apply(&self, projects: Vec<Project>) -> Vec<Project> {
        match self {
            Self::All => projects,
            Self::Only(_) => projects
                .into_iter()
                .filter(|project| self.matches(project))
                .collect(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ProjectValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_SENTINEL {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

#[cfg(test)]
mod tests;
