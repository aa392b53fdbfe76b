//! # Route Table
//!
//! Maps URL paths to views and applies the access guards. Guards read the
//! in-memory [`SessionState`] only; they never call the server.

use crate::model::Role;
use crate::session::SessionState;
use std::fmt::Display;
use tracing::debug;

/// Every path the client understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    ApplyJob,
    JobManagement,
    JobDetails(String),
    Dashboard,
    EmployerDashboard,
    JobSeekerDashboard,
    Login,
    Signup,
    Register,
    Profile,
    Unknown(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        match trimmed {
            "/" => Route::Home,
            "/apply/job" => Route::ApplyJob,
            "/jobs" => Route::JobManagement,
            "/dashboard" => Route::Dashboard,
            "/employer/dashboard" => Route::EmployerDashboard,
            "/jobseeker/dashboard" => Route::JobSeekerDashboard,
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/register" => Route::Register,
            "/profile" => Route::Profile,
            other => match other.strip_prefix("/jobs/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::JobDetails(id.to_string()),
                _ => Route::Unknown(other.to_string()),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::ApplyJob => "/apply/job".into(),
            Route::JobManagement => "/jobs".into(),
            Route::JobDetails(id) => format!("/jobs/{id}"),
            Route::Dashboard => "/dashboard".into(),
            Route::EmployerDashboard => "/employer/dashboard".into(),
            Route::JobSeekerDashboard => "/jobseeker/dashboard".into(),
            Route::Login => "/login".into(),
            Route::Signup => "/signup".into(),
            Route::Register => "/register".into(),
            Route::Profile => "/profile".into(),
            Route::Unknown(path) => path.clone(),
        }
    }

    /// Routes that need a signed-in user.
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::JobManagement
                | Route::Dashboard
                | Route::EmployerDashboard
                | Route::JobSeekerDashboard
                | Route::Profile
        )
    }

    /// The role a route is reserved for, if any.
    fn required_role(&self) -> Option<Role> {
        match self {
            Route::JobManagement | Route::EmployerDashboard => Some(Role::Recruiter),
            Route::JobSeekerDashboard => Some(Role::Applicant),
            _ => None,
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// The screen to render once guards have passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    Jobs,
    JobDetails(String),
    JobManagement,
    EmployerDashboard,
    JobSeekerDashboard,
    Login,
    Signup,
    Profile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(View),
    Redirect(String),
}

/// Resolves `path` against the current session.
pub fn resolve(path: &str, state: &SessionState) -> Resolution {
    let route = Route::parse(path);
    let user = state.current_user.as_ref();

    if route.is_protected() && user.is_none() {
        debug!(%route, "Unauthenticated, redirecting to /login");
        return Resolution::Redirect(Route::Login.path());
    }
    if let (Some(required), Some(user)) = (route.required_role(), user) {
        if user.role != required {
            debug!(%route, role = %user.role, "Role mismatch, redirecting to /dashboard");
            return Resolution::Redirect(Route::Dashboard.path());
        }
    }

    let view = match route {
        Route::Home => View::Home,
        Route::ApplyJob => View::Jobs,
        Route::JobManagement => View::JobManagement,
        Route::JobDetails(id) => View::JobDetails(id),
        Route::Dashboard => match user.map(|u| u.role) {
            Some(Role::Applicant) => View::JobSeekerDashboard,
            _ => View::EmployerDashboard,
        },
        Route::EmployerDashboard => View::EmployerDashboard,
        Route::JobSeekerDashboard => View::JobSeekerDashboard,
        Route::Login => View::Login,
        Route::Signup | Route::Register => View::Signup,
        Route::Profile => View::Profile,
        Route::Unknown(path) => {
            debug!(%path, "Unknown path, redirecting to /");
            return Resolution::Redirect(Route::Home.path());
        }
    };
    Resolution::Render(view)
}
