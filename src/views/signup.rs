//! Account creation form. Also served at `/register`.

use super::{Navigation, PortalContext};
use crate::api::Registration;
use crate::model::Role;
use std::time::Duration;
use tracing::{info, instrument, warn};

pub const SUCCESS_NOTICE: &str = "Signup done successfully";
pub const MISSING_FIELDS: &str = "Name, email and password are required.";
pub const GENERIC_ERROR: &str = "Server error.";

/// Pause between the success notice and the redirect to `/login`.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(1);

pub struct SignupView {
    ctx: PortalContext,
    error: Option<String>,
    notice: Option<&'static str>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl SignupView {
    pub fn new(ctx: &PortalContext) -> Self {
        Self {
            ctx: ctx.clone(),
            error: None,
            notice: None,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::Applicant,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice
    }

    #[instrument(skip(self), fields(email = %self.email, role = %self.role))]
    pub async fn submit(&mut self) -> Option<Navigation> {
        self.error = None;
        self.notice = None;
        if [&self.name, &self.email, &self.password]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            self.error = Some(MISSING_FIELDS.to_string());
            return None;
        }

        let registration = Registration {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: self.role,
        };
        match self.ctx.api.signup(&registration).await {
            Ok(()) => {
                info!("Signup succeeded");
                self.notice = Some(SUCCESS_NOTICE);
                Some(Navigation::after("/login", REDIRECT_DELAY))
            }
            Err(e) => {
                warn!(error = %e, "Signup failed");
                self.error = Some(e.server_message().unwrap_or_else(|| GENERIC_ERROR.to_string()));
                None
            }
        }
    }
}
