//! Browse and apply.
//!
//! Filtering happens client-side over the fetched list. Applying records the
//! application in the local application book only; nothing is sent to the
//! server.

use super::{payload_or, Navigation, PortalContext};
use crate::model::{ApplicationCreate, ApplicationId, Job, Role};
use chrono::Local;
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{info, instrument, warn};

/// How long a successful apply message stays on screen.
pub const MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Jobs whose title or company contains `search` (ignoring case) and whose
/// category equals `category`. An empty `category` matches everything.
pub fn filter_jobs<'a>(jobs: &'a [Job], search: &str, category: &str) -> Vec<&'a Job> {
    let needle = search.to_lowercase();
    jobs.iter()
        .filter(|job| {
            job.title.to_lowercase().contains(&needle)
                || job.company.to_lowercase().contains(&needle)
        })
        .filter(|job| category.is_empty() || job.category.as_deref() == Some(category))
        .collect()
}

/// Distinct categories, in the order they first appear.
pub fn categories(jobs: &[Job]) -> Vec<String> {
    let mut seen = HashSet::new();
    jobs.iter()
        .filter_map(|job| job.category.as_deref())
        .filter(|category| seen.insert(*category))
        .map(str::to_owned)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// No one is signed in.
    LoginRequired(Navigation),
    NotApplicant,
    AlreadyApplied,
    Submitted(ApplicationId),
    Failed(String),
}

impl ApplyOutcome {
    pub fn message(&self) -> Option<&str> {
        match self {
            ApplyOutcome::LoginRequired(_) => None,
            ApplyOutcome::NotApplicant => Some("Only Applicants can apply for jobs."),
            ApplyOutcome::AlreadyApplied => Some("You have already applied for this job."),
            ApplyOutcome::Submitted(_) => Some("Application submitted successfully!"),
            ApplyOutcome::Failed(message) => Some(message.as_str()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApplyOutcome::Submitted(_))
    }
}

#[derive(Debug, Clone)]
struct Flash {
    text: String,
    success: bool,
    shown_at: Instant,
}

pub struct JobsView {
    ctx: PortalContext,
    jobs: Vec<Job>,
    applied: HashSet<String>,
    flash: Option<Flash>,
    error: Option<String>,
    pub search_term: String,
    pub selected_category: String,
}

impl JobsView {
    pub fn new(ctx: &PortalContext) -> Self {
        Self {
            ctx: ctx.clone(),
            jobs: Vec::new(),
            applied: HashSet::new(),
            flash: None,
            error: None,
            search_term: String::new(),
            selected_category: String::new(),
        }
    }

    /// Starts from an already-fetched list instead of calling the API.
    pub fn with_jobs(ctx: &PortalContext, jobs: Vec<Job>) -> Self {
        let mut view = Self::new(ctx);
        view.jobs = jobs;
        view
    }

    /// Fetches the listings and the jobs this user already applied to.
    #[instrument(skip(self))]
    pub async fn load(&mut self) {
        let token = self.ctx.session.token().ok().flatten();
        match self.ctx.api.list_jobs(token.as_deref()).await {
            Ok(jobs) => {
                self.jobs = jobs;
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "Could not load jobs");
                self.error = Some(payload_or(&e, "Error fetching jobs"));
            }
        }
        if let Ok(Some(user)) = self.ctx.session.current_user().await {
            if let Ok(mine) = self.ctx.applications.for_user(&user.id).await {
                self.applied = mine.into_iter().map(|a| a.job_id).collect();
            }
        }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn filtered(&self) -> Vec<&Job> {
        filter_jobs(&self.jobs, &self.search_term, &self.selected_category)
    }

    pub fn categories(&self) -> Vec<String> {
        categories(&self.jobs)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_applied(&self, job_id: &str) -> bool {
        self.applied.contains(job_id)
    }

    /// The current apply message. A success message expires after
    /// [`MESSAGE_TTL`]; any other stays until the next apply.
    pub fn message(&self) -> Option<&str> {
        self.flash
            .as_ref()
            .filter(|flash| !flash.success || flash.shown_at.elapsed() < MESSAGE_TTL)
            .map(|flash| flash.text.as_str())
    }

    /// Whether the current message reports a success.
    pub fn message_is_success(&self) -> bool {
        self.message().is_some() && self.flash.as_ref().is_some_and(|f| f.success)
    }

    #[instrument(skip(self))]
    pub async fn apply(&mut self, job_id: &str) -> ApplyOutcome {
        self.flash = None;
        let outcome = self.try_apply(job_id).await;
        if let Some(text) = outcome.message() {
            self.flash = Some(Flash {
                text: text.to_string(),
                success: outcome.is_success(),
                shown_at: Instant::now(),
            });
        }
        outcome
    }

    async fn try_apply(&mut self, job_id: &str) -> ApplyOutcome {
        let user = match self.ctx.session.current_user().await {
            Ok(Some(user)) => user,
            Ok(None) => return ApplyOutcome::LoginRequired(Navigation::to("/login")),
            Err(e) => return ApplyOutcome::Failed(e.to_string()),
        };
        if user.role != Role::Applicant {
            return ApplyOutcome::NotApplicant;
        }

        match self.ctx.applications.for_user(&user.id).await {
            Ok(mine) if mine.iter().any(|a| a.job_id == job_id) => {
                self.applied.insert(job_id.to_string());
                return ApplyOutcome::AlreadyApplied;
            }
            Ok(_) => {}
            Err(e) => return ApplyOutcome::Failed(e.to_string()),
        }

        let params = ApplicationCreate {
            user_id: user.id.clone(),
            applicant_name: user.display_name().to_string(),
            job_id: job_id.to_string(),
            applied_date: Local::now().date_naive(),
        };
        match self.ctx.applications.submit(params).await {
            Ok(id) => {
                info!(application_id = %id, job_id, user_id = %user.id, "Application submitted");
                self.applied.insert(job_id.to_string());
                ApplyOutcome::Submitted(id)
            }
            Err(e) => ApplyOutcome::Failed(e.to_string()),
        }
    }
}
