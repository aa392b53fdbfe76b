//! Employer job management at `/jobs`.
//!
//! Each action is one request carrying the bearer token. On success the local
//! list is patched directly; on failure the raw server payload (or a fixed
//! fallback) becomes the inline error and the list is left alone.

use super::{payload_or, Navigation, PortalContext};
use crate::model::{Job, JobDraft, JobStatus};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

pub const EMPTY_LIST: &str = "No jobs found. Create one to get started!";
pub const MISSING_FIELDS: &str = "Title, company, location and description are required.";

/// A listing plus the number of applications recorded against it.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagedJob {
    pub job: Job,
    pub applicant_count: usize,
}

/// The create/edit form. `status` defaults to `Open`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobForm {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub status: JobStatus,
}

impl JobForm {
    fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            description: job.description.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            salary: job.salary.clone(),
            status: job.status,
        }
    }

    fn is_complete(&self) -> bool {
        [&self.title, &self.company, &self.location, &self.description]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    fn draft(&self) -> JobDraft {
        JobDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            salary: self.salary.clone(),
            status: self.status,
        }
    }
}

pub struct JobManagementView {
    ctx: PortalContext,
    token: Option<String>,
    jobs: Vec<ManagedJob>,
    selected_job_id: Option<String>,
    error: Option<String>,
    pub form: JobForm,
}

impl JobManagementView {
    pub fn new(ctx: &PortalContext) -> Self {
        Self {
            ctx: ctx.clone(),
            token: None,
            jobs: Vec::new(),
            selected_job_id: None,
            error: None,
            form: JobForm::default(),
        }
    }

    /// Redirects to `/login` without both a token and a user, otherwise
    /// fetches the listings.
    #[instrument(skip(self))]
    pub async fn mount(&mut self) -> Option<Navigation> {
        self.token = self.ctx.session.token().ok().flatten();
        let user = self.ctx.session.current_user().await.ok().flatten();
        if self.token.is_none() || user.is_none() {
            debug!("No session, redirecting to /login");
            return Some(Navigation::to("/login"));
        }
        self.fetch_jobs().await;
        None
    }

    pub async fn fetch_jobs(&mut self) {
        let jobs = match self.ctx.api.list_jobs(self.token.as_deref()).await {
            Ok(jobs) => jobs,
            Err(e) => {
                warn!(error = %e, "Fetching jobs failed");
                self.error = Some(payload_or(&e, "Error fetching jobs"));
                return;
            }
        };
        let counts = match self.ctx.applications.applicant_counts().await {
            Ok(counts) => counts,
            Err(e) => {
                warn!(error = %e, "Applicant counts unavailable");
                HashMap::new()
            }
        };
        self.jobs = jobs
            .into_iter()
            .map(|job| ManagedJob {
                applicant_count: counts.get(&job.id).copied().unwrap_or(0),
                job,
            })
            .collect();
        debug!(count = self.jobs.len(), "Jobs loaded");
    }

    pub fn jobs(&self) -> &[ManagedJob] {
        &self.jobs
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_job_id(&self) -> Option<&str> {
        self.selected_job_id.as_deref()
    }

    /// "Edit Job Listing" while editing, "Create New Job Listing" otherwise.
    pub fn form_title(&self) -> &'static str {
        if self.selected_job_id.is_some() {
            "Edit Job Listing"
        } else {
            "Create New Job Listing"
        }
    }

    /// Loads a listing into the form for editing. Returns `false` for an unknown id.
    pub fn edit(&mut self, id: &str) -> bool {
        let Some(entry) = self.jobs.iter().find(|entry| entry.job.id == id) else {
            return false;
        };
        self.form = JobForm::from_job(&entry.job);
        self.selected_job_id = Some(id.to_string());
        true
    }

    pub fn cancel_edit(&mut self) {
        self.selected_job_id = None;
        self.form = JobForm::default();
    }

    /// Creates or updates depending on whether a listing is being edited.
    pub async fn submit(&mut self) -> bool {
        if !self.form.is_complete() {
            self.error = Some(MISSING_FIELDS.to_string());
            return false;
        }
        match self.selected_job_id.clone() {
            Some(id) => self.update(&id).await,
            None => self.create().await,
        }
    }

    #[instrument(skip(self), fields(title = %self.form.title))]
    async fn create(&mut self) -> bool {
        let draft = self.form.draft();
        match self.ctx.api.create_job(self.token.as_deref(), &draft).await {
            Ok(job) => {
                info!(job_id = %job.id, "Job created");
                self.jobs.push(ManagedJob {
                    job,
                    applicant_count: 0,
                });
                self.form = JobForm::default();
                self.error = None;
                true
            }
            Err(e) => {
                warn!(error = %e, "Create failed");
                self.error = Some(payload_or(&e, "Error creating job"));
                false
            }
        }
    }

    #[instrument(skip(self))]
    async fn update(&mut self, id: &str) -> bool {
        let draft = self.form.draft();
        match self.ctx.api.update_job(self.token.as_deref(), id, &draft).await {
            Ok(job) => {
                info!("Job updated");
                if let Some(entry) = self.jobs.iter_mut().find(|entry| entry.job.id == id) {
                    entry.job = job;
                }
                self.cancel_edit();
                self.error = None;
                true
            }
            Err(e) => {
                warn!(error = %e, "Update failed");
                self.error = Some(payload_or(&e, "Error updating job"));
                false
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: &str) -> bool {
        match self.ctx.api.delete_job(self.token.as_deref(), id).await {
            Ok(()) => {
                info!("Job deleted");
                self.jobs.retain(|entry| entry.job.id != id);
                self.error = None;
                true
            }
            Err(e) => {
                warn!(error = %e, "Delete failed");
                self.error = Some(payload_or(&e, "Error deleting job"));
                false
            }
        }
    }
}
