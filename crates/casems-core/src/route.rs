//! Route table of the web client.
//!
//! Views are out of scope here; the table exists so that a front end can
//! resolve paths and apply the admin guard consistently.

use std::fmt;

/// Every view reachable by path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Cases,
    CaseDetail { id: String },
    About,
    Contact,
    AdminLogin,
    AdminRegister,
    AdminForgotPassword,
    AdminResetPassword,
    AdminDashboard,
    AdminCases,
    AdminCategories,
    NotFound,
}

impl Route {
    /// Resolves a request path. Unknown paths map to [`Route::NotFound`].
    ///
    /// A single trailing slash is ignored and any query string is dropped.
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };

        match trimmed {
            "/" => Self::Home,
            "/cases" => Self::Cases,
            "/about" => Self::About,
            "/contact" => Self::Contact,
            "/admin/login" => Self::AdminLogin,
            "/admin/register" => Self::AdminRegister,
            "/admin/forgot-password" => Self::AdminForgotPassword,
            "/admin/reset-password" => Self::AdminResetPassword,
            "/admin/dashboard" => Self::AdminDashboard,
            "/admin/cases" => Self::AdminCases,
            "/admin/categories" => Self::AdminCategories,
            other => match other.strip_prefix("/cases/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Self::CaseDetail {
                    id: id.to_string(),
                },
                _ => Self::NotFound,
            },
        }
    }

    /// Renders the canonical path. `NotFound` renders as `/404`.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Cases => "/cases".to_string(),
            Self::CaseDetail { id } => format!("/cases/{}", id),
            Self::About => "/about".to_string(),
            Self::Contact => "/contact".to_string(),
            Self::AdminLogin => "/admin/login".to_string(),
            Self::AdminRegister => "/admin/register".to_string(),
            Self::AdminForgotPassword => "/admin/forgot-password".to_string(),
            Self::AdminResetPassword => "/admin/reset-password".to_string(),
            Self::AdminDashboard => "/admin/dashboard".to_string(),
            Self::AdminCases => "/admin/cases".to_string(),
            Self::AdminCategories => "/admin/categories".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Admin views that require a signed-in identity.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::AdminDashboard | Self::AdminCases | Self::AdminCategories
        )
    }

    /// Returns the redirect target for a visit, if any.
    ///
    /// Protected views send anonymous visitors to the login page, and a
    /// signed-in visitor on the login page goes straight to the dashboard.
    pub fn guard(&self, authenticated: bool) -> Option<Route> {
        match self {
            route if route.requires_auth() && !authenticated => Some(Self::AdminLogin),
            Self::AdminLogin if authenticated => Some(Self::AdminDashboard),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_static_routes() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve("/cases/"), Route::Cases);
        assert_eq!(Route::resolve("/admin/forgot-password"), Route::AdminForgotPassword);
        assert_eq!(Route::resolve("/admin/categories?page=2"), Route::AdminCategories);
    }

    #[test]
    fn test_resolve_case_detail() {
        assert_eq!(
            Route::resolve("/cases/abc-123"),
            Route::CaseDetail {
                id: "abc-123".to_string()
            }
        );
        assert_eq!(Route::resolve("/cases/a/b"), Route::NotFound);
    }

    #[test]
    fn test_unknown_is_not_found() {
        assert_eq!(Route::resolve("/admin"), Route::NotFound);
        assert_eq!(Route::resolve("/nope"), Route::NotFound);
        assert_eq!(Route::resolve(""), Route::NotFound);
    }

    #[test]
    fn test_path_round_trips_for_known_routes() {
        for path in ["/", "/cases", "/cases/7", "/about", "/admin/dashboard"] {
            assert_eq!(Route::resolve(path).path(), path);
        }
    }

    #[test]
    fn test_guard() {
        assert_eq!(Route::AdminCases.guard(false), Some(Route::AdminLogin));
        assert_eq!(Route::AdminCases.guard(true), None);
        assert_eq!(Route::AdminLogin.guard(true), Some(Route::AdminDashboard));
        assert_eq!(Route::AdminLogin.guard(false), None);
        assert_eq!(Route::Cases.guard(false), None);
    }
}
