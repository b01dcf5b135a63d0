//! Application routes and navigation options.
//!
//! Paths fall in three groups: public-only pages (landing, login, signup)
//! that an authenticated user is bounced away from, the protected
//! dashboard area, and anything else.

use serde::{Deserialize, Serialize};

/// Well-known paths.
pub mod paths {
    /// Landing page.
    pub const ROOT: &str = "/";
    /// Login page.
    pub const LOGIN: &str = "/login";
    /// Sign-up page.
    pub const SIGNUP: &str = "/signup";
    /// Default page of the protected area.
    pub const DASHBOARD: &str = "/dashboard";
}

/// Sections of the protected dashboard area.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardSection {
    /// `/dashboard`
    Home,
    /// `/dashboard/books`
    Books,
    /// `/dashboard/readers`
    Readers,
    /// `/dashboard/lending`
    Lending,
    /// `/dashboard/overdue`
    Overdue,
    /// `/dashboard/profile`
    Profile,
    /// Any other path below `/dashboard`.
    Other(String),
}

/// A classified application path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "value", rename_all = "snake_case")]
pub enum AppRoute {
    /// `/`
    Root,
    /// `/login`
    Login,
    /// `/signup`
    SignUp,
    /// `/dashboard` and everything below it.
    Dashboard(DashboardSection),
    /// Any path outside the known areas.
    Other(String),
}

impl AppRoute {
    /// Classifies a path.
    ///
    /// Query strings, fragments and trailing slashes are ignored.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = normalize(path);
        match path {
            paths::ROOT => Self::Root,
            paths::LOGIN => Self::Login,
            paths::SIGNUP => Self::SignUp,
            paths::DASHBOARD => Self::Dashboard(DashboardSection::Home),
            _ => match path.strip_prefix("/dashboard/") {
                Some(rest) => Self::Dashboard(match rest {
                    "books" => DashboardSection::Books,
                    "readers" => DashboardSection::Readers,
                    "lending" => DashboardSection::Lending,
                    "overdue" => DashboardSection::Overdue,
                    "profile" => DashboardSection::Profile,
                    other => DashboardSection::Other(other.to_string()),
                }),
                None => Self::Other(path.to_string()),
            },
        }
    }

    /// Returns the canonical path of this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Root => paths::ROOT.to_string(),
            Self::Login => paths::LOGIN.to_string(),
            Self::SignUp => paths::SIGNUP.to_string(),
            Self::Dashboard(section) => match section {
                DashboardSection::Home => paths::DASHBOARD.to_string(),
                DashboardSection::Books => "/dashboard/books".to_string(),
                DashboardSection::Readers => "/dashboard/readers".to_string(),
                DashboardSection::Lending => "/dashboard/lending".to_string(),
                DashboardSection::Overdue => "/dashboard/overdue".to_string(),
                DashboardSection::Profile => "/dashboard/profile".to_string(),
                DashboardSection::Other(rest) => format!("/dashboard/{rest}"),
            },
            Self::Other(path) => path.clone(),
        }
    }

    /// Returns true for pages meant only for signed-out users.
    #[must_use]
    pub const fn is_public_only(&self) -> bool {
        matches!(self, Self::Root | Self::Login | Self::SignUp)
    }

    /// Returns true for pages behind the route guard.
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        matches!(self, Self::Dashboard(_))
    }
}

impl std::fmt::Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { paths::ROOT } else { trimmed }
}

/// Options for a navigation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl NavigateOptions {
    /// Push a new history entry.
    pub const PUSH: Self = Self { replace: false };

    /// Replace the current history entry.
    pub const REPLACE: Self = Self { replace: true };
}
