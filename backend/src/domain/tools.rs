//! Ordered tool-name lists shared by the about profile and projects.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ordered list of tool names.
///
/// Lists read from the store are kept verbatim. Lists built from user input
/// go through [`ToolList::from_names`], which applies the editing rules:
/// names are trimmed, blanks dropped and repeats suppressed.
///
/// # Examples
/// ```
/// use folio::domain::ToolList;
///
/// let tools = ToolList::from_names([" Rust ", "SQL", "", "Rust"]);
/// assert_eq!(tools.as_slice(), ["Rust", "SQL"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ToolList(Vec<String>);

impl ToolList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a stored list without normalisation.
    #[must_use]
    pub fn from_stored(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Build a list from user-supplied names using the editing rules.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for name in names {
            list.push(name.as_ref());
        }
        list
    }

    /// Append a trimmed name; returns `false` when it is blank or already
    /// present.
    pub fn push(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.0.push(name.to_owned());
        true
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|existing| existing == name)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}
