mod common;

use common::{applicant, harness, listings, recruiter, sign_in};
use job_portal::api::mock::ApiCall;
use job_portal::api::{ApiError, LoginResponse};
use job_portal::clients::ActorClient;
use job_portal::model::{ApplicationId, ApplicationStatus, Job, JobStatus, Role, User};
use job_portal::routes::{resolve, Resolution, View};
use job_portal::session::TokenStore;
use job_portal::views::dashboard::JobSeekerScreen;
use job_portal::views::jobs::ApplyOutcome;
use job_portal::views::{
    EmployerDashboardView, JobManagementView, JobSeekerDashboardView, JobsView, LoginView, Navigation,
    NavbarView,
};

/// Full flow with real actors: an applicant applies, the employer sees and
/// reviews it, the applicant sees the decision.
#[tokio::test]
async fn test_apply_review_round_trip() {
    let h = harness();
    sign_in(&h, applicant()).await;

    // Browse and apply
    h.api.expect_list_jobs().return_ok(listings());
    let mut jobs = JobsView::new(&h.ctx);
    jobs.load().await;
    let outcome = jobs.apply("j1").await;
    let ApplyOutcome::Submitted(application_id) = outcome else {
        panic!("expected a submitted application, got {outcome:?}");
    };
    assert_eq!(jobs.message(), Some("Application submitted successfully!"));
    assert!(jobs.has_applied("j1"));

    // Switch to the employer
    h.ctx.session.logout().await.expect("logout");
    sign_in(&h, recruiter()).await;

    h.api.expect_list_jobs().return_ok(listings());
    let dashboard = EmployerDashboardView::new(&h.ctx);
    let screen = dashboard.load().await.expect("employer dashboard");
    assert_eq!(screen.stats.active_jobs, 2);
    assert_eq!(screen.stats.total_applications, 1);
    assert_eq!(screen.stats.pending_review, 1);
    assert_eq!(screen.stats.hired, 0);
    assert_eq!(screen.recent.len(), 1);
    assert_eq!(screen.recent[0].applicant, "Ravi");
    assert_eq!(screen.recent[0].job_title, "Frontend Developer");
    assert_eq!(
        screen.categories,
        vec![("Development".to_string(), 1), ("Operations".to_string(), 1)]
    );

    h.api.expect_list_jobs().return_ok(listings());
    let previous = dashboard
        .review(application_id, ApplicationStatus::Accepted)
        .await
        .expect("review");
    assert_eq!(previous, ApplicationStatus::Pending);

    // Back to the applicant
    h.ctx.session.logout().await.expect("logout");
    sign_in(&h, applicant()).await;
    h.api.expect_list_jobs().return_ok(listings());
    let screen = JobSeekerDashboardView::new(&h.ctx).load().await.expect("seeker dashboard");
    let JobSeekerScreen::Applications { greeting, rows } = screen else {
        panic!("applicant should see their applications");
    };
    assert_eq!(greeting, "Welcome back, Ravi");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Frontend Developer");
    assert_eq!(rows[0].status, "Accepted");

    h.api.verify();
}

#[tokio::test]
async fn test_review_is_limited_to_own_listings() {
    let h = harness();
    sign_in(&h, applicant()).await;
    let mut jobs = JobsView::with_jobs(&h.ctx, listings());
    let ApplyOutcome::Submitted(application_id) = jobs.apply("j2").await else {
        panic!("applicant should be able to apply");
    };
    h.ctx.session.logout().await.expect("logout");

    // j2 belongs to DataSys
    let outsider = User::new("u3", "Omar", "omar@otherco.com", Role::Recruiter).with_company("OtherCo");
    sign_in(&h, outsider).await;
    h.api.expect_list_jobs().return_ok(listings());
    let dashboard = EmployerDashboardView::new(&h.ctx);
    let err = dashboard
        .review(application_id, ApplicationStatus::Rejected)
        .await
        .unwrap_err();
    assert_eq!(err, "You can only review applications to your own listings.");

    let stored = h.ctx.applications.get(application_id).await.expect("get").expect("present");
    assert_eq!(stored.status, ApplicationStatus::Pending);

    let err = dashboard
        .review(ApplicationId(99), ApplicationStatus::Rejected)
        .await
        .unwrap_err();
    assert_eq!(err, "Application not found: app_99");

    // The owning company may decide
    h.ctx.session.logout().await.expect("logout");
    let owner = User::new("u4", "Dana", "dana@datasys.com", Role::Recruiter).with_company("DataSys");
    sign_in(&h, owner).await;
    h.api.expect_list_jobs().return_ok(listings());
    let previous = EmployerDashboardView::new(&h.ctx)
        .review(application_id, ApplicationStatus::Rejected)
        .await
        .expect("owner review");
    assert_eq!(previous, ApplicationStatus::Pending);
    h.api.verify();
}

#[tokio::test]
async fn test_applying_twice_keeps_one_record() {
    let h = harness();
    sign_in(&h, applicant()).await;

    let mut jobs = JobsView::with_jobs(&h.ctx, listings());
    assert!(jobs.apply("j2").await.is_success());
    assert_eq!(jobs.apply("j2").await, ApplyOutcome::AlreadyApplied);
    assert_eq!(jobs.message(), Some("You have already applied for this job."));

    // A fresh view sees the same book
    let mut again = JobsView::with_jobs(&h.ctx, listings());
    assert_eq!(again.apply("j2").await, ApplyOutcome::AlreadyApplied);

    let all = h.ctx.applications.all().await.expect("list applications");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].job_id, "j2");
    assert_eq!(all[0].status, ApplicationStatus::Pending);
}

#[tokio::test]
async fn test_apply_requires_an_applicant() {
    let h = harness();

    let mut jobs = JobsView::with_jobs(&h.ctx, listings());
    assert_eq!(
        jobs.apply("j1").await,
        ApplyOutcome::LoginRequired(Navigation::to("/login"))
    );
    assert_eq!(jobs.message(), None);

    sign_in(&h, recruiter()).await;
    assert_eq!(jobs.apply("j1").await, ApplyOutcome::NotApplicant);
    assert_eq!(jobs.message(), Some("Only Applicants can apply for jobs."));
    assert!(!jobs.message_is_success());
    assert!(h.ctx.applications.all().await.expect("list").is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_apply_message_clears_after_three_seconds() {
    let h = harness();
    sign_in(&h, applicant()).await;

    let mut jobs = JobsView::with_jobs(&h.ctx, listings());
    jobs.apply("j3").await;
    assert!(jobs.message_is_success());

    tokio::time::advance(std::time::Duration::from_millis(2_900)).await;
    assert!(jobs.message().is_some());

    tokio::time::advance(std::time::Duration::from_millis(200)).await;
    assert_eq!(jobs.message(), None);
}

#[tokio::test(start_paused = true)]
async fn test_apply_refusals_stay_until_next_apply() {
    let h = harness();
    sign_in(&h, recruiter()).await;

    let mut jobs = JobsView::with_jobs(&h.ctx, listings());
    assert_eq!(jobs.apply("j1").await, ApplyOutcome::NotApplicant);

    tokio::time::advance(std::time::Duration::from_secs(4)).await;
    assert_eq!(jobs.message(), Some("Only Applicants can apply for jobs."));

    // Switch to an applicant who already applied
    h.ctx.session.logout().await.expect("logout");
    sign_in(&h, applicant()).await;
    assert!(jobs.apply("j1").await.is_success());
    assert_eq!(jobs.apply("j1").await, ApplyOutcome::AlreadyApplied);

    tokio::time::advance(std::time::Duration::from_secs(10)).await;
    assert_eq!(jobs.message(), Some("You have already applied for this job."));
}

#[tokio::test]
async fn test_logout_clears_token_and_guards_every_protected_route() {
    let h = harness();
    sign_in(&h, recruiter()).await;
    assert_eq!(h.tokens.load().expect("load").as_deref(), Some("tok-1"));

    let state = h.ctx.session.state().await.expect("state");
    assert_eq!(resolve("/jobs", &state), Resolution::Render(View::JobManagement));

    let mut navbar = NavbarView::new(&h.ctx).await.expect("navbar");
    assert_eq!(navbar.logout().await, Navigation::to("/login"));

    assert_eq!(h.tokens.load().expect("load"), None);
    let state = h.ctx.session.state().await.expect("state");
    assert!(state.current_user.is_none());
    for path in ["/jobs", "/dashboard", "/employer/dashboard", "/jobseeker/dashboard", "/profile"] {
        assert_eq!(resolve(path, &state), Resolution::Redirect("/login".into()), "{path}");
    }
    assert!(navbar.render().is_none());
}

#[tokio::test]
async fn test_created_job_shows_zero_applicants() {
    let h = harness();
    sign_in(&h, applicant()).await;
    let mut jobs = JobsView::with_jobs(&h.ctx, listings());
    jobs.apply("j1").await;
    h.ctx.session.logout().await.expect("logout");
    sign_in(&h, recruiter()).await;

    h.api.expect_list_jobs().return_ok(listings());
    let mut view = JobManagementView::new(&h.ctx);
    assert_eq!(view.mount().await, None);
    let count = |view: &JobManagementView, id: &str| {
        view.jobs()
            .iter()
            .find(|entry| entry.job.id == id)
            .map(|entry| entry.applicant_count)
    };
    assert_eq!(count(&view, "j1"), Some(1));
    assert_eq!(count(&view, "j2"), Some(0));

    let mut created = Job::new("j9", "Data Analyst", "TechCorp", "Delhi");
    created.description = "SQL and dashboards".into();
    created.salary = "50000".into();
    h.api.expect_create_job().return_ok(created);

    view.form.title = "Data Analyst".into();
    view.form.company = "TechCorp".into();
    view.form.location = "Delhi".into();
    view.form.salary = "50000".into();
    view.form.description = "SQL and dashboards".into();
    assert!(view.submit().await);

    let entry = view.jobs().last().expect("new entry");
    assert_eq!(entry.job.title, "Data Analyst");
    assert_eq!(entry.job.company, "TechCorp");
    assert_eq!(entry.job.location, "Delhi");
    assert_eq!(entry.job.salary, "50000");
    assert_eq!(entry.job.status, JobStatus::Open);
    assert_eq!(entry.applicant_count, 0);
    assert_eq!(view.form, Default::default());

    let calls = h.api.calls();
    let Some(ApiCall::CreateJob { token, draft }) = calls.last() else {
        panic!("expected a create call, got {calls:?}");
    };
    assert_eq!(token.as_deref(), Some("tok-1"));
    assert_eq!(draft.title, "Data Analyst");
    h.api.verify();
}

#[tokio::test]
async fn test_login_without_user_is_rejected() {
    let h = harness();
    h.api.expect_login().return_ok(LoginResponse {
        token: "tok-1".into(),
        user: None,
    });

    let mut login = LoginView::new(&h.ctx);
    login.email = "ravi@example.com".into();
    login.password = "secret".into();
    assert_eq!(login.submit().await, None);
    assert_eq!(login.error(), Some("User data missing from response"));
    assert_eq!(h.tokens.load().expect("load"), None);
    assert!(h.ctx.session.current_user().await.expect("state").is_none());
}

#[tokio::test]
async fn test_login_shows_server_message_or_fallback() {
    let h = harness();
    h.api.expect_login().return_err(ApiError::Server {
        status: 401,
        body: r#"{"message":"Invalid credentials"}"#.into(),
    });
    h.api.expect_login().return_err(ApiError::Server {
        status: 500,
        body: "<html>oops</html>".into(),
    });

    let mut login = LoginView::new(&h.ctx);
    assert_eq!(login.submit().await, None);
    assert_eq!(login.error(), Some("Invalid credentials"));

    assert_eq!(login.submit().await, None);
    assert_eq!(login.error(), Some("Server error."));
    h.api.verify();
}

#[tokio::test]
async fn test_shutdown_waits_for_actors() {
    let h = harness();
    sign_in(&h, applicant()).await;
    assert_eq!(
        h.ctx.session.current_user().await.expect("state").map(|u| u.role),
        Some(Role::Applicant)
    );

    let common::Harness { system, ctx, .. } = h;
    drop(ctx);
    system.shutdown().await.expect("clean shutdown");
}
