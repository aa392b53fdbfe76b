//! Profile page with inline edit form.
//!
//! The form is validated locally before anything is sent. The first failing
//! rule wins and no request goes out.

use super::PortalContext;
use crate::api::ProfileUpdate;
use crate::model::User;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{info, instrument, warn};

pub const SIGNED_OUT: &str = "Please log in to view your profile.";
pub const UPDATE_FAILED: &str = "Error updating profile. Please try again.";
const NOT_PROVIDED: &str = "Not provided";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Name must be between 3 and 50 characters")]
    Name,
    #[error("Invalid email format")]
    Email,
    #[error("Phone must be a 10-digit number")]
    Phone,
    #[error("Age must be a number greater than or equal to 18")]
    Age,
    #[error("Gender must be male, female, or others")]
    Gender,
    #[error("Role must be Applicant or Recruiter")]
    Role,
}

/// Edit form values, exactly as typed. Empty optional fields are skipped by
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub gender: String,
    pub role: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            age: user.age.map(|age| age.to_string()).unwrap_or_default(),
            gender: user.gender.map(|g| g.as_str().to_string()).unwrap_or_default(),
            role: user.role.as_str().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        let name_len = self.name.chars().count();
        if !(3..=50).contains(&name_len) {
            return Err(ProfileError::Name);
        }
        if !EMAIL.is_match(&self.email) {
            return Err(ProfileError::Email);
        }
        if !self.phone.is_empty() && !PHONE.is_match(&self.phone) {
            return Err(ProfileError::Phone);
        }
        if !self.age.is_empty() {
            match self.age.trim().parse::<f64>() {
                Ok(age) if age >= 18.0 => {}
                _ => return Err(ProfileError::Age),
            }
        }
        if !self.gender.is_empty() && !["male", "female", "others"].contains(&self.gender.as_str()) {
            return Err(ProfileError::Gender);
        }
        if !["Applicant", "Recruiter"].contains(&self.role.as_str()) {
            return Err(ProfileError::Role);
        }
        Ok(())
    }

    fn into_update(self, id: &str) -> ProfileUpdate {
        ProfileUpdate {
            id: id.to_string(),
            name: self.name,
            email: self.email,
            phone: self.phone,
            age: self.age,
            gender: self.gender,
            role: self.role,
        }
    }
}

/// Read-only profile card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub initial: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub gender: String,
}

impl ProfileCard {
    fn from_user(user: &User) -> Self {
        Self {
            initial: user
                .name
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default(),
            name: user.name.clone(),
            role: user.role.to_string(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_else(|| NOT_PROVIDED.into()),
            age: user.age.map(|a| a.to_string()).unwrap_or_else(|| NOT_PROVIDED.into()),
            gender: user
                .gender
                .map(|g| g.as_str().to_string())
                .unwrap_or_else(|| NOT_PROVIDED.into()),
        }
    }
}

pub struct ProfileView {
    ctx: PortalContext,
    user: Option<User>,
    editing: bool,
    error: Option<String>,
    pub form: ProfileForm,
}

impl ProfileView {
    pub fn new(ctx: &PortalContext) -> Self {
        Self {
            ctx: ctx.clone(),
            user: None,
            editing: false,
            error: None,
            form: ProfileForm::default(),
        }
    }

    /// Loads the signed-in user and seeds the form from it.
    pub async fn load(&mut self) {
        self.user = self.ctx.session.current_user().await.ok().flatten();
        self.form = self
            .user
            .as_ref()
            .map(ProfileForm::from_user)
            .unwrap_or_default();
    }

    /// The profile card, or `Err` with the signed-out notice.
    pub fn card(&self) -> Result<ProfileCard, &'static str> {
        self.user.as_ref().map(ProfileCard::from_user).ok_or(SIGNED_OUT)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    pub fn cancel_edit(&mut self) {
        self.editing = false;
    }

    /// Validates and saves the form. Returns `true` once the store holds the
    /// updated user.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> bool {
        let Some(user) = self.user.clone() else {
            self.error = Some(SIGNED_OUT.to_string());
            return false;
        };
        if let Err(e) = self.form.validate() {
            self.error = Some(e.to_string());
            return false;
        }

        let update = self.form.clone().into_update(&user.id);
        let token = self.ctx.session.token().ok().flatten();
        let updated = match self.ctx.api.update_profile(token.as_deref(), &update).await {
            Ok(updated) => updated,
            Err(e) => {
                warn!(error = %e, "Profile update failed");
                self.error = Some(UPDATE_FAILED.to_string());
                return false;
            }
        };
        if let Err(e) = self.ctx.session.set_current_user(updated.clone()).await {
            warn!(error = %e, "Could not publish updated user");
            self.error = Some(UPDATE_FAILED.to_string());
            return false;
        }

        info!(user_id = %updated.id, "Profile updated");
        self.form = ProfileForm::from_user(&updated);
        self.user = Some(updated);
        self.editing = false;
        self.error = None;
        true
    }
}
