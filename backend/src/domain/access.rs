//! Access gate and page navigation.
//!
//! Two guards protect the data operations: [`require_session`] for any
//! logged-in caller and [`require_owner`] for edits. [`navigate`] decides
//! what a browser path resolves to for a given session state.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Error, Session};

/// Reject callers without a session.
pub fn require_session(session: Option<Session>) -> Result<Session, Error> {
    session.ok_or_else(|| Error::unauthorized("login required"))
}

/// Reject callers without an owner session.
///
/// # Examples
/// ```
/// use folio::domain::{require_owner, ErrorCode, Session};
///
/// let err = require_owner(Some(Session::new("Ada", false))).expect_err("visitor");
/// assert_eq!(err.code(), ErrorCode::Forbidden);
/// ```
pub fn require_owner(session: Option<Session>) -> Result<Session, Error> {
    let session = require_session(session)?;
    if session.is_owner() {
        Ok(session)
    } else {
        Err(Error::forbidden("owner access required"))
    }
}

/// Pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Landing,
    Home,
    About,
    Projects,
    Contact,
}

impl Page {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/landing",
            Self::Home => "/",
            Self::About => "/about",
            Self::Projects => "/projects",
            Self::Contact => "/contact",
        }
    }

    /// Page served at `path`, ignoring trailing slashes.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalised = if trimmed.is_empty() { "/" } else { trimmed };
        [Self::Landing, Self::Home, Self::About, Self::Projects, Self::Contact]
            .into_iter()
            .find(|page| page.path() == normalised)
    }
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Navigation {
    Render { page: Page },
    Redirect { to: Page },
}

/// Resolve `path` for the given session state.
///
/// The landing page is for anonymous callers only; every other page needs a
/// session. Unknown paths fall back to the caller's start page.
///
/// # Examples
/// ```
/// use folio::domain::{navigate, Navigation, Page};
///
/// assert_eq!(navigate("/about", None), Navigation::Redirect { to: Page::Landing });
/// ```
#[must_use]
pub fn navigate(path: &str, session: Option<&Session>) -> Navigation {
    let start = if session.is_some() { Page::Home } else { Page::Landing };
    match Page::from_path(path) {
        Some(page) if page == start => Navigation::Render { page },
        Some(Page::Landing) | None => Navigation::Redirect { to: start },
        Some(page) => match session {
            Some(_) => Navigation::Render { page },
            None => Navigation::Redirect { to: Page::Landing },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn visitor() -> Session {
        Session::new("Ada", false)
    }

    #[rstest]
    #[case("/", Navigation::Redirect { to: Page::Landing })]
    #[case("/about", Navigation::Redirect { to: Page::Landing })]
    #[case("/projects/", Navigation::Redirect { to: Page::Landing })]
    #[case("/contact", Navigation::Redirect { to: Page::Landing })]
    #[case("/landing", Navigation::Render { page: Page::Landing })]
    #[case("/landing/", Navigation::Render { page: Page::Landing })]
    #[case("/nowhere", Navigation::Redirect { to: Page::Landing })]
    fn anonymous_navigation(#[case] path: &str, #[case] expected: Navigation) {
        assert_eq!(navigate(path, None), expected);
    }

    #[rstest]
    #[case("/", Navigation::Render { page: Page::Home })]
    #[case("", Navigation::Render { page: Page::Home })]
    #[case("/about", Navigation::Render { page: Page::About })]
    #[case("/projects", Navigation::Render { page: Page::Projects })]
    #[case("/contact/", Navigation::Render { page: Page::Contact })]
    #[case("/landing", Navigation::Redirect { to: Page::Home })]
    #[case("/admin", Navigation::Redirect { to: Page::Home })]
    fn session_navigation(#[case] path: &str, #[case] expected: Navigation) {
        assert_eq!(navigate(path, Some(&visitor())), expected);
    }

    #[rstest]
    fn require_session_rejects_anonymous_callers() {
        let err = require_session(None).expect_err("no session");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[rstest]
    #[case(None, Some(ErrorCode::Unauthorized))]
    #[case(Some(Session::new("Ada", false)), Some(ErrorCode::Forbidden))]
    #[case(Some(Session::new("Owner", true)), None)]
    fn require_owner_outcomes(#[case] session: Option<Session>, #[case] expected: Option<ErrorCode>) {
        let outcome = require_owner(session).err().map(|err| err.code());
        assert_eq!(outcome, expected);
    }

    #[rstest]
    fn navigation_serialises_with_action_tag() {
        let json = serde_json::to_value(Navigation::Redirect { to: Page::Landing })
            .expect("serialise");
        assert_eq!(json, serde_json::json!({ "action": "redirect", "to": "landing" }));
    }
}
