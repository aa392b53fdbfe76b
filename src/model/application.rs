//! A job application recorded during this session.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`application_actor`](crate::application_actor) for:
//! - Creation parameters ([`ApplicationCreate`])
//! - Custom actions ([`ApplicationAction`](crate::application_actor::ApplicationAction))
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Identifier handed out by the application book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(pub u32);

impl From<u32> for ApplicationId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "app_{}", self.0)
    }
}

impl FromStr for ApplicationId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("app_")
            .unwrap_or(s)
            .parse()
            .map(Self)
            .map_err(|_| format!("invalid application id: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// Capitalised label used in dashboard tables.
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(ApplicationStatus::Pending),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            _ => Err(format!("unknown application status: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub user_id: String,
    pub applicant_name: String,
    pub job_id: String,
    pub status: ApplicationStatus,
    pub applied_date: NaiveDate,
}

/// Payload for recording a new application. Status always starts as pending.
#[derive(Debug, Clone)]
pub struct ApplicationCreate {
    pub user_id: String,
    pub applicant_name: String,
    pub job_id: String,
    pub applied_date: NaiveDate,
}

impl Application {
    /// Applied date in `YYYY-MM-DD` form.
    pub fn applied_on(&self) -> String {
        self.applied_date.format("%Y-%m-%d").to_string()
    }
}
