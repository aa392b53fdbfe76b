//! Sign-in form.

use super::{Navigation, PortalContext};
use crate::api::{ApiError, Credentials};
use tracing::{debug, instrument, warn};

pub const GENERIC_ERROR: &str = "Server error.";

pub struct LoginView {
    ctx: PortalContext,
    error: Option<String>,
    pub email: String,
    pub password: String,
}

impl LoginView {
    pub fn new(ctx: &PortalContext) -> Self {
        Self {
            ctx: ctx.clone(),
            error: None,
            email: String::new(),
            password: String::new(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Posts the credentials. On success the token and user are stored and the
    /// caller is sent to `/dashboard`; on failure the error message is set.
    #[instrument(skip(self), fields(email = %self.email))]
    pub async fn submit(&mut self) -> Option<Navigation> {
        self.error = None;
        let credentials = Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        };

        let result = async {
            let response = self.ctx.api.login(&credentials).await?;
            let user = response.user.ok_or(ApiError::MissingUser)?;
            Ok::<_, ApiError>((response.token, user))
        }
        .await;

        let (token, user) = match result {
            Ok(pair) => pair,
            Err(e) => {
                warn!(error = %e, "Login failed");
                self.error = Some(login_error(&e));
                return None;
            }
        };

        if let Err(e) = self.ctx.session.login(&token, user).await {
            warn!(error = %e, "Could not store session");
            self.error = Some(e.to_string());
            return None;
        }
        debug!("Login succeeded");
        Some(Navigation::to("/dashboard"))
    }
}

/// The line shown under the form: the server's `message`, the transport
/// failure itself, or the generic text.
fn login_error(err: &ApiError) -> String {
    match err {
        ApiError::MissingUser => err.to_string(),
        ApiError::Transport(source) => source.to_string(),
        other => other
            .server_message()
            .unwrap_or_else(|| GENERIC_ERROR.to_string()),
    }
}
