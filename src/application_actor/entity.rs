//! [`ActorEntity`] implementation for [`Application`].

use super::actions::{ApplicationAction, ApplicationActionResult};
use super::error::ApplicationError;
use crate::framework::ActorEntity;
use crate::model::{Application, ApplicationCreate, ApplicationId, ApplicationStatus};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Application {
    type Id = ApplicationId;
    type Create = ApplicationCreate;
    type Action = ApplicationAction;
    type ActionResult = ApplicationActionResult;
    type Context = ();
    type Error = ApplicationError;

    /// Every application starts out pending.
    fn from_create_params(id: ApplicationId, params: ApplicationCreate) -> Result<Self, ApplicationError> {
        if params.user_id.is_empty() {
            return Err(ApplicationError::ValidationError("user id is required".into()));
        }
        if params.job_id.is_empty() {
            return Err(ApplicationError::ValidationError("job id is required".into()));
        }
        Ok(Self {
            id,
            user_id: params.user_id,
            applicant_name: params.applicant_name,
            job_id: params.job_id,
            status: ApplicationStatus::Pending,
            applied_date: params.applied_date,
        })
    }

    async fn handle_action(
        &mut self,
        action: ApplicationAction,
        _ctx: &(),
    ) -> Result<ApplicationActionResult, ApplicationError> {
        match action {
            ApplicationAction::SetStatus(status) => {
                let previous = std::mem::replace(&mut self.status, status);
                Ok(ApplicationActionResult::SetStatus(previous))
            }
        }
    }
}
