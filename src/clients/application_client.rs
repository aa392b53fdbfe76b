//! # Application Client
//!
//! High-level API over the application book. Wraps a
//! `ResourceClient<Application>` and exposes the queries the views need.

use crate::application_actor::{ApplicationAction, ApplicationActionResult, ApplicationError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Application, ApplicationCreate, ApplicationId, ApplicationStatus};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Client for interacting with the application actor.
#[derive(Clone)]
pub struct ApplicationClient {
    inner: ResourceClient<Application>,
}

impl ApplicationClient {
    pub fn new(inner: ResourceClient<Application>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn submit(&self, params: ApplicationCreate) -> Result<ApplicationId, ApplicationError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Every application, oldest first.
    pub async fn all(&self) -> Result<Vec<Application>, ApplicationError> {
        let mut applications = self.inner.list().await.map_err(Self::map_error)?;
        applications.sort_by_key(|application| application.id);
        Ok(applications)
    }

    /// Applications submitted by one user, oldest first.
    #[instrument(skip(self))]
    pub async fn for_user(&self, user_id: &str) -> Result<Vec<Application>, ApplicationError> {
        let mut applications = self.all().await?;
        applications.retain(|application| application.user_id == user_id);
        Ok(applications)
    }

    /// Applications to any of the given jobs, oldest first.
    pub async fn for_jobs<S: AsRef<str>>(&self, job_ids: &[S]) -> Result<Vec<Application>, ApplicationError> {
        let mut applications = self.all().await?;
        applications.retain(|application| {
            job_ids
                .iter()
                .any(|job_id| job_id.as_ref() == application.job_id)
        });
        Ok(applications)
    }

    /// Number of applications per job id. Jobs without applications are absent.
    pub async fn applicant_counts(&self) -> Result<HashMap<String, usize>, ApplicationError> {
        let mut counts = HashMap::new();
        for application in self.inner.list().await.map_err(Self::map_error)? {
            *counts.entry(application.job_id).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Records a review decision and returns the previous status.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<ApplicationStatus, ApplicationError> {
        debug!("Setting status for application {}", id);
        match self
            .inner
            .perform_action(id, ApplicationAction::SetStatus(status))
            .await
        {
            Ok(ApplicationActionResult::SetStatus(previous)) => Ok(previous),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Application> for ApplicationClient {
    type Error = ApplicationError;

    fn inner(&self) -> &ResourceClient<Application> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ApplicationError::NotFound(id),
            FrameworkError::EntityError(source) => match source.downcast::<ApplicationError>() {
                Ok(error) => *error,
                Err(other) => ApplicationError::ActorCommunicationError(other.to_string()),
            },
            other => ApplicationError::ActorCommunicationError(other.to_string()),
        }
    }
}
