//! # Portal API
//!
//! The remote REST backend is an external collaborator. Views talk to it
//! through the [`PortalApi`] trait so they can be driven by
//! [`HttpPortalApi`] in production and [`mock::MockPortalApi`] in tests.
//!
//! | Operation      | Request                 | Auth   |
//! |----------------|-------------------------|--------|
//! | login          | `POST /login`           | none   |
//! | signup         | `POST /signup`          | none   |
//! | list jobs      | `GET /api/jobs`         | bearer |
//! | create job     | `POST /api/jobs`        | bearer |
//! | update job     | `PUT /api/jobs/:id`     | bearer |
//! | delete job     | `DELETE /api/jobs/:id`  | bearer |
//! | update profile | `PUT /user/update`      | bearer |

pub mod error;
pub mod http;
pub mod mock;
pub mod types;

pub use error::*;
pub use http::HttpPortalApi;
pub use types::*;

use crate::model::{Job, JobDraft, User};
use async_trait::async_trait;

/// The calls the client makes against the portal backend.
///
/// `token` is the bearer token; `None` sends the request without an
/// `Authorization` header, which the backend will typically reject.
#[async_trait]
pub trait PortalApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse>;

    async fn signup(&self, registration: &Registration) -> ApiResult<()>;

    async fn list_jobs(&self, token: Option<&str>) -> ApiResult<Vec<Job>>;

    async fn create_job(&self, token: Option<&str>, draft: &JobDraft) -> ApiResult<Job>;

    async fn update_job(&self, token: Option<&str>, id: &str, draft: &JobDraft) -> ApiResult<Job>;

    async fn delete_job(&self, token: Option<&str>, id: &str) -> ApiResult<()>;

    async fn update_profile(&self, token: Option<&str>, update: &ProfileUpdate) -> ApiResult<User>;
}
