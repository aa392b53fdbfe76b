//! # Views
//!
//! One controller per screen. A controller owns its form inputs as public
//! fields, exposes user actions as methods, and hands back plain values
//! describing what the screen shows. Failures never escape a controller:
//! they become the inline message the screen displays.
//!
//! Controllers take `&mut self` for actions, so a response can only ever
//! land on the controller that issued the request.

pub mod dashboard;
pub mod footer;
pub mod home;
pub mod job_details;
pub mod job_management;
pub mod jobs;
pub mod login;
pub mod navbar;
pub mod profile;
pub mod signup;

pub use dashboard::{EmployerDashboardView, JobSeekerDashboardView};
pub use home::HomeView;
pub use job_details::JobDetailsView;
pub use job_management::JobManagementView;
pub use jobs::JobsView;
pub use login::LoginView;
pub use navbar::NavbarView;
pub use profile::ProfileView;
pub use signup::SignupView;

use crate::api::{ApiError, PortalApi};
use crate::clients::ApplicationClient;
use crate::session::Session;
use std::sync::Arc;
use std::time::Duration;

/// Everything a view needs to do its job. Cheap to clone.
#[derive(Clone)]
pub struct PortalContext {
    pub api: Arc<dyn PortalApi>,
    pub session: Session,
    pub applications: ApplicationClient,
}

/// A request to move to another path, optionally after a delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub to: String,
    pub delay: Duration,
}

impl Navigation {
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            to: path.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn after(path: impl Into<String>, delay: Duration) -> Self {
        Self {
            to: path.into(),
            delay,
        }
    }
}

/// The raw server payload when there is one, otherwise `fallback`.
pub(crate) fn payload_or(err: &ApiError, fallback: &str) -> String {
    err.raw_payload()
        .map(str::to_owned)
        .unwrap_or_else(|| fallback.to_string())
}
