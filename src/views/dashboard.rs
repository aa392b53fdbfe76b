//! Role dashboards.
//!
//! Both join the fetched job list with the local application book. Jobs that
//! cannot be fetched degrade to "N/A" cells rather than failing the page.

use super::PortalContext;
use crate::application_actor::ApplicationError;
use crate::clients::ActorClient;
use crate::model::{Application, ApplicationId, ApplicationStatus, Job, Role, User};
use std::collections::HashMap;
use tracing::{info, instrument, warn};

pub const ACCESS_DENIED: &str = "Access denied. This dashboard is for Applicants only.";
pub const NO_APPLICATIONS: &str = "You haven't applied to any jobs yet.";
pub const NOT_OWNER: &str = "You can only review applications to your own listings.";
const NOT_AVAILABLE: &str = "N/A";
const RECENT_LIMIT: usize = 5;

async fn fetch_jobs(ctx: &PortalContext) -> Vec<Job> {
    let token = ctx.session.token().ok().flatten();
    match ctx.api.list_jobs(token.as_deref()).await {
        Ok(jobs) => jobs,
        Err(e) => {
            warn!(error = %e, "Dashboard could not fetch jobs");
            Vec::new()
        }
    }
}

/// A table cell from the joined job, or "N/A" when the job or value is missing.
fn cell(job: Option<&Job>, pick: impl Fn(&Job) -> &str) -> String {
    job.map(pick)
        .filter(|value| !value.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

// -----------------------------------------------------------------------------
// Job seeker
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedJobRow {
    pub application_id: ApplicationId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub status: &'static str,
    pub applied_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobSeekerScreen {
    AccessDenied,
    Applications { greeting: String, rows: Vec<AppliedJobRow> },
}

pub struct JobSeekerDashboardView {
    ctx: PortalContext,
}

impl JobSeekerDashboardView {
    pub fn new(ctx: &PortalContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<JobSeekerScreen, String> {
        let user = match self.ctx.session.current_user().await.map_err(|e| e.to_string())? {
            Some(user) if user.role == Role::Applicant => user,
            _ => return Ok(JobSeekerScreen::AccessDenied),
        };
        let applications = self
            .ctx
            .applications
            .for_user(&user.id)
            .await
            .map_err(|e| e.to_string())?;
        let jobs = fetch_jobs(&self.ctx).await;

        let rows = applications
            .iter()
            .map(|application| {
                let job = jobs.iter().find(|job| job.id == application.job_id);
                AppliedJobRow {
                    application_id: application.id,
                    title: cell(job, |job| job.title.as_str()),
                    company: cell(job, |job| job.company.as_str()),
                    location: cell(job, |job| job.location.as_str()),
                    status: application.status.label(),
                    applied_date: application.applied_on(),
                }
            })
            .collect();

        let name = if user.name.is_empty() { "Applicant" } else { &user.name };
        Ok(JobSeekerScreen::Applications {
            greeting: format!("Welcome back, {name}"),
            rows,
        })
    }
}

// -----------------------------------------------------------------------------
// Employer
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmployerStats {
    pub active_jobs: usize,
    pub total_applications: usize,
    pub pending_review: usize,
    pub hired: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentApplication {
    pub application_id: ApplicationId,
    pub job_title: String,
    pub applicant: String,
    pub applied_date: String,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployerScreen {
    pub greeting: String,
    pub stats: EmployerStats,
    pub recent: Vec<RecentApplication>,
    /// Listings per category, in first-seen order.
    pub categories: Vec<(String, usize)>,
}

impl EmployerStats {
    fn from_parts(jobs: &[&Job], applications: &[Application]) -> Self {
        let with_status = |status: ApplicationStatus| applications.iter().filter(|a| a.status == status).count();
        Self {
            active_jobs: jobs.len(),
            total_applications: applications.len(),
            pending_review: with_status(ApplicationStatus::Pending),
            hired: with_status(ApplicationStatus::Accepted),
        }
    }
}

fn category_breakdown(jobs: &[&Job]) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for job in jobs {
        let category = job.category.clone().unwrap_or_else(|| "Uncategorized".to_string());
        let count = counts.entry(category.clone()).or_insert(0);
        if *count == 0 {
            order.push(category);
        }
        *count += 1;
    }
    order
        .into_iter()
        .map(|category| {
            let count = counts.get(&category).copied().unwrap_or(0);
            (category, count)
        })
        .collect()
}

pub struct EmployerDashboardView {
    ctx: PortalContext,
}

impl EmployerDashboardView {
    pub fn new(ctx: &PortalContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    async fn recruiter(&self) -> Result<User, String> {
        match self.ctx.session.current_user().await.map_err(|e| e.to_string())? {
            Some(user) if user.role == Role::Recruiter => Ok(user),
            Some(_) => Err("Only Recruiters can manage applications.".to_string()),
            None => Err("Please log in.".to_string()),
        }
    }

    /// Jobs owned by the signed-in employer (matched on company name) and the
    /// applications made to them.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<EmployerScreen, String> {
        let user = self
            .ctx
            .session
            .current_user()
            .await
            .map_err(|e| e.to_string())?
            .ok_or_else(|| "Please log in.".to_string())?;
        let jobs = fetch_jobs(&self.ctx).await;
        let owned: Vec<&Job> = jobs
            .iter()
            .filter(|job| user.company.as_deref() == Some(job.company.as_str()))
            .collect();
        let owned_ids: Vec<&str> = owned.iter().map(|job| job.id.as_str()).collect();
        let applications = self
            .ctx
            .applications
            .for_jobs(&owned_ids)
            .await
            .map_err(|e| e.to_string())?;

        let recent = applications
            .iter()
            .rev()
            .take(RECENT_LIMIT)
            .map(|application| RecentApplication {
                application_id: application.id,
                job_title: owned
                    .iter()
                    .find(|job| job.id == application.job_id)
                    .map(|job| job.title.clone())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                applicant: application.applicant_name.clone(),
                applied_date: application.applied_on(),
                status: application.status.label(),
            })
            .collect();

        Ok(EmployerScreen {
            greeting: format!("Welcome back, {}", user.name),
            stats: EmployerStats::from_parts(&owned, &applications),
            recent,
            categories: category_breakdown(&owned),
        })
    }

    /// Records a decision on an application to one of the employer's own
    /// listings. Returns the previous status.
    #[instrument(skip(self))]
    pub async fn review(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<ApplicationStatus, String> {
        let user = self.recruiter().await?;
        let application = self
            .ctx
            .applications
            .get(id)
            .await
            .map_err(|e| e.to_string())?
            .ok_or_else(|| ApplicationError::NotFound(id.to_string()).to_string())?;
        let owned = fetch_jobs(&self.ctx).await.iter().any(|job| {
            job.id == application.job_id && user.company.as_deref() == Some(job.company.as_str())
        });
        if !owned {
            warn!(application_id = %id, job_id = %application.job_id, reviewer = %user.id, "Review refused for foreign listing");
            return Err(NOT_OWNER.to_string());
        }

        let previous = self
            .ctx
            .applications
            .set_status(id, status)
            .await
            .map_err(|e| e.to_string())?;
        info!(application_id = %id, reviewer = %user.id, from = previous.label(), to = status.label(), "Application reviewed");
        Ok(previous)
    }
}
