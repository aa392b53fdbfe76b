#![allow(dead_code)]

use job_portal::api::mock::MockPortalApi;
use job_portal::api::LoginResponse;
use job_portal::model::{Job, Role, User};
use job_portal::session::MemoryTokenStore;
use job_portal::views::{LoginView, Navigation, PortalContext};
use job_portal::PortalSystem;
use std::sync::Arc;

/// A running system backed by the mock API and an in-memory token store.
pub struct Harness {
    pub system: PortalSystem,
    pub ctx: PortalContext,
    pub api: MockPortalApi,
    pub tokens: Arc<MemoryTokenStore>,
}

pub fn harness() -> Harness {
    let api = MockPortalApi::new();
    let tokens = Arc::new(MemoryTokenStore::new());
    let system = PortalSystem::with_parts(Arc::new(api.clone()), tokens.clone());
    let ctx = system.context();
    Harness {
        system,
        ctx,
        api,
        tokens,
    }
}

pub fn applicant() -> User {
    User::new("u1", "Ravi", "ravi@example.com", Role::Applicant)
}

pub fn recruiter() -> User {
    User::new("u2", "Asha", "asha@techcorp.com", Role::Recruiter).with_company("TechCorp")
}

pub fn listings() -> Vec<Job> {
    vec![
        Job::new("j1", "Frontend Developer", "TechCorp", "Remote").with_category("Development"),
        Job::new("j2", "Backend Engineer", "DataSys", "San Francisco, CA").with_category("Development"),
        Job::new("j3", "UI/UX Designer", "CreativeLabs", "New York, NY").with_category("Design"),
        Job::new("j4", "DevOps Engineer", "TechCorp", "Austin, TX").with_category("Operations"),
    ]
}

/// Signs `user` in through the login view.
pub async fn sign_in(h: &Harness, user: User) {
    h.api.expect_login().return_ok(LoginResponse {
        token: "tok-1".into(),
        user: Some(user.clone()),
    });
    let mut login = LoginView::new(&h.ctx);
    login.email = user.email;
    login.password = "secret".into();
    assert_eq!(login.submit().await, Some(Navigation::to("/dashboard")));
}
