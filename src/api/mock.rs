//! # Mock Portal API
//!
//! An in-process [`PortalApi`] for view tests. Queue one reply per expected
//! call, run the view, then inspect [`MockPortalApi::calls`] to see exactly
//! which requests were issued.
//!
//! ```ignore
//! let api = MockPortalApi::new();
//! api.expect_list_jobs().return_ok(vec![job]);
//!
//! let mut view = JobManagementView::new(&ctx);
//! view.mount().await;
//!
//! api.verify();
//! assert_eq!(api.calls().len(), 1);
//! ```

use super::{ApiError, ApiResult, Credentials, LoginResponse, PortalApi, ProfileUpdate, Registration};
use crate::model::{Job, JobDraft, User};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// A request the mock received, with the token it carried.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Login(Credentials),
    Signup(Registration),
    ListJobs {
        token: Option<String>,
    },
    CreateJob {
        token: Option<String>,
        draft: JobDraft,
    },
    UpdateJob {
        token: Option<String>,
        id: String,
        draft: JobDraft,
    },
    DeleteJob {
        token: Option<String>,
        id: String,
    },
    UpdateProfile {
        token: Option<String>,
        update: ProfileUpdate,
    },
}

enum Reply {
    Login(ApiResult<LoginResponse>),
    Signup(ApiResult<()>),
    ListJobs(ApiResult<Vec<Job>>),
    CreateJob(ApiResult<Job>),
    UpdateJob(ApiResult<Job>),
    DeleteJob(ApiResult<()>),
    UpdateProfile(ApiResult<User>),
}

#[derive(Default)]
struct State {
    replies: VecDeque<Reply>,
    calls: Vec<ApiCall>,
}

/// Expectation-queue fake of the portal backend. Cheap to clone; clones
/// share the same queue and call log.
#[derive(Clone, Default)]
pub struct MockPortalApi {
    state: Arc<Mutex<State>>,
}

impl MockPortalApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_login(&self) -> ReplyBuilder<LoginResponse> {
        self.builder(Reply::Login)
    }

    pub fn expect_signup(&self) -> ReplyBuilder<()> {
        self.builder(Reply::Signup)
    }

    pub fn expect_list_jobs(&self) -> ReplyBuilder<Vec<Job>> {
        self.builder(Reply::ListJobs)
    }

    pub fn expect_create_job(&self) -> ReplyBuilder<Job> {
        self.builder(Reply::CreateJob)
    }

    pub fn expect_update_job(&self) -> ReplyBuilder<Job> {
        self.builder(Reply::UpdateJob)
    }

    pub fn expect_delete_job(&self) -> ReplyBuilder<()> {
        self.builder(Reply::DeleteJob)
    }

    pub fn expect_update_profile(&self) -> ReplyBuilder<User> {
        self.builder(Reply::UpdateProfile)
    }

    fn builder<R>(&self, wrap: fn(ApiResult<R>) -> Reply) -> ReplyBuilder<R> {
        ReplyBuilder {
            wrap,
            state: self.state.clone(),
        }
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    /// Panics if any queued reply was not consumed.
    pub fn verify(&self) {
        let remaining = self.lock().replies.len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Logs the call and pops the next reply.
    fn next(&self, call: ApiCall) -> Reply {
        let mut state = self.lock();
        state.calls.push(call.clone());
        match state.replies.pop_front() {
            Some(reply) => reply,
            None => panic!("Unexpected call with no queued reply: {call:?}"),
        }
    }
}

/// Queues the reply for one expected call.
pub struct ReplyBuilder<R> {
    wrap: fn(ApiResult<R>) -> Reply,
    state: Arc<Mutex<State>>,
}

impl<R> ReplyBuilder<R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(self, result: ApiResult<R>) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replies
            .push_back((self.wrap)(result));
    }
}

fn mismatch(call: &str) -> ! {
    panic!("Unexpected request or expectation mismatch: {call}")
}

#[async_trait]
impl PortalApi for MockPortalApi {
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        match self.next(ApiCall::Login(credentials.clone())) {
            Reply::Login(result) => result,
            _ => mismatch("login"),
        }
    }

    async fn signup(&self, registration: &Registration) -> ApiResult<()> {
        match self.next(ApiCall::Signup(registration.clone())) {
            Reply::Signup(result) => result,
            _ => mismatch("signup"),
        }
    }

    async fn list_jobs(&self, token: Option<&str>) -> ApiResult<Vec<Job>> {
        let call = ApiCall::ListJobs {
            token: token.map(str::to_owned),
        };
        match self.next(call) {
            Reply::ListJobs(result) => result,
            _ => mismatch("list_jobs"),
        }
    }

    async fn create_job(&self, token: Option<&str>, draft: &JobDraft) -> ApiResult<Job> {
        let call = ApiCall::CreateJob {
            token: token.map(str::to_owned),
            draft: draft.clone(),
        };
        match self.next(call) {
            Reply::CreateJob(result) => result,
            _ => mismatch("create_job"),
        }
    }

    async fn update_job(&self, token: Option<&str>, id: &str, draft: &JobDraft) -> ApiResult<Job> {
        let call = ApiCall::UpdateJob {
            token: token.map(str::to_owned),
            id: id.to_owned(),
            draft: draft.clone(),
        };
        match self.next(call) {
            Reply::UpdateJob(result) => result,
            _ => mismatch("update_job"),
        }
    }

    async fn delete_job(&self, token: Option<&str>, id: &str) -> ApiResult<()> {
        let call = ApiCall::DeleteJob {
            token: token.map(str::to_owned),
            id: id.to_owned(),
        };
        match self.next(call) {
            Reply::DeleteJob(result) => result,
            _ => mismatch("delete_job"),
        }
    }

    async fn update_profile(&self, token: Option<&str>, update: &ProfileUpdate) -> ApiResult<User> {
        let call = ApiCall::UpdateProfile {
            token: token.map(str::to_owned),
            update: update.clone(),
        };
        match self.next(call) {
            Reply::UpdateProfile(result) => result,
            _ => mismatch("update_profile"),
        }
    }
}
