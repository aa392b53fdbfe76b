//! Single listing at `/jobs/:id`.

use super::{payload_or, PortalContext};
use crate::model::{Job, Role};

pub const NOT_FOUND: &str = "Job not found";

#[derive(Debug, Clone, PartialEq)]
pub struct JobDetailsScreen {
    pub job: Job,
    /// Only applicants see the apply button.
    pub can_apply: bool,
}

pub struct JobDetailsView {
    ctx: PortalContext,
    id: String,
}

impl JobDetailsView {
    pub fn new(ctx: &PortalContext, id: impl Into<String>) -> Self {
        Self {
            ctx: ctx.clone(),
            id: id.into(),
        }
    }

    /// Looks the id up in the fetched list. `Err` carries the inline message.
    pub async fn load(&self) -> Result<JobDetailsScreen, String> {
        let token = self.ctx.session.token().ok().flatten();
        let jobs = self
            .ctx
            .api
            .list_jobs(token.as_deref())
            .await
            .map_err(|e| payload_or(&e, "Error fetching jobs"))?;
        self.show(jobs).await
    }

    /// Same as [`load`](Self::load) over a list the caller already has.
    pub async fn show(&self, jobs: Vec<Job>) -> Result<JobDetailsScreen, String> {
        let job = jobs
            .into_iter()
            .find(|job| job.id == self.id)
            .ok_or_else(|| NOT_FOUND.to_string())?;
        let can_apply = matches!(
            self.ctx.session.current_user().await,
            Ok(Some(user)) if user.role == Role::Applicant
        );
        Ok(JobDetailsScreen { job, can_apply })
    }
}
