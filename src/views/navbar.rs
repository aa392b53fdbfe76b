//! Top navigation bar.
//!
//! Hidden when signed out. The bar follows the session store through a
//! subscription, so it always renders the latest state.

use super::{Navigation, PortalContext};
use crate::model::Role;
use crate::session::{SessionError, SessionState};
use tokio::sync::watch;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub to: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarScreen {
    pub links: Vec<NavLink>,
    pub display_name: String,
    pub is_dark_mode: bool,
    /// Present while the user panel is open.
    pub details: Option<UserDetails>,
}

pub struct NavbarView {
    ctx: PortalContext,
    updates: watch::Receiver<SessionState>,
    state: SessionState,
    show_user_details: bool,
}

impl NavbarView {
    /// Subscribes to the session store and takes the current state.
    pub async fn new(ctx: &PortalContext) -> Result<Self, SessionError> {
        let updates = ctx.session.subscribe();
        let state = ctx.session.state().await?;
        Ok(Self {
            ctx: ctx.clone(),
            updates,
            state,
            show_user_details: false,
        })
    }

    /// Picks up any change published since the last call. Returns `true` if
    /// the bar needs re-rendering.
    pub fn sync(&mut self) -> bool {
        match self.updates.has_changed() {
            Ok(true) => {
                self.state = self.updates.borrow_and_update().clone();
                true
            }
            _ => false,
        }
    }

    /// Waits for the next store change. Returns `false` once the store is gone.
    pub async fn changed(&mut self) -> bool {
        if self.updates.changed().await.is_err() {
            return false;
        }
        self.state = self.updates.borrow_and_update().clone();
        true
    }

    pub fn render(&self) -> Option<NavbarScreen> {
        let user = self.state.current_user.as_ref()?;
        let mut links = vec![NavLink {
            label: "Dashboard",
            to: "/dashboard",
        }];
        links.push(match user.role {
            Role::Applicant => NavLink {
                label: "Apply Job",
                to: "/apply/job",
            },
            Role::Recruiter => NavLink {
                label: "Post Job",
                to: "/jobs",
            },
        });
        Some(NavbarScreen {
            links,
            display_name: user.display_name().to_string(),
            is_dark_mode: self.state.is_dark_mode,
            details: self.show_user_details.then(|| UserDetails {
                name: user.name.clone(),
                email: user.email.clone(),
                role: user.role.to_string(),
            }),
        })
    }

    /// First click opens the details panel; a second click goes to `/profile`.
    pub fn click_user(&mut self) -> Option<Navigation> {
        let navigation = self.show_user_details.then(|| Navigation::to("/profile"));
        self.show_user_details = !self.show_user_details;
        navigation
    }

    /// The "View Full Profile" button in the details panel.
    pub fn view_full_profile(&self) -> Navigation {
        Navigation::to("/profile")
    }

    pub async fn toggle_dark_mode(&mut self) -> Result<(), SessionError> {
        self.state = self.ctx.session.toggle_dark_mode().await?;
        Ok(())
    }

    /// Clears the user and the stored token, then heads to `/login`.
    pub async fn logout(&mut self) -> Navigation {
        match self.ctx.session.logout().await {
            Ok(state) => {
                info!("Logged out from navbar");
                self.state = state;
            }
            Err(e) => warn!(error = %e, "Logout did not complete cleanly"),
        }
        self.show_user_details = false;
        Navigation::to("/login")
    }
}
