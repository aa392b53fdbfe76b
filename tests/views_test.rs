mod common;

use common::{applicant, harness, listings, recruiter, sign_in};
use job_portal::api::mock::ApiCall;
use job_portal::api::ApiError;
use job_portal::model::{Gender, Role, User};
use job_portal::views::{
    JobDetailsView, JobManagementView, JobsView, Navigation, NavbarView, ProfileView, SignupView,
};
use std::time::Duration;

#[tokio::test]
async fn test_search_and_category_filter_together() {
    let h = harness();
    let mut jobs = JobsView::with_jobs(&h.ctx, listings());

    jobs.search_term = "engineer".into();
    let titles: Vec<_> = jobs.filtered().iter().map(|job| job.title.as_str()).collect();
    assert_eq!(titles, vec!["Backend Engineer", "DevOps Engineer"]);

    jobs.selected_category = "Development".into();
    let titles: Vec<_> = jobs.filtered().iter().map(|job| job.title.as_str()).collect();
    assert_eq!(titles, vec!["Backend Engineer"]);

    jobs.search_term = "techcorp".into();
    jobs.selected_category = String::new();
    assert_eq!(jobs.filtered().len(), 2);

    assert_eq!(jobs.categories(), vec!["Development", "Design", "Operations"]);
}

#[tokio::test]
async fn test_failed_listing_shows_server_payload() {
    let h = harness();
    h.api.expect_list_jobs().return_err(ApiError::Server {
        status: 503,
        body: "maintenance".into(),
    });

    let mut jobs = JobsView::new(&h.ctx);
    jobs.load().await;
    assert_eq!(jobs.error(), Some("maintenance"));
    assert!(jobs.jobs().is_empty());
}

#[tokio::test]
async fn test_job_details_finds_or_reports_missing() {
    let h = harness();
    sign_in(&h, applicant()).await;

    let screen = JobDetailsView::new(&h.ctx, "j3").show(listings()).await.expect("found");
    assert_eq!(screen.job.title, "UI/UX Designer");
    assert!(screen.can_apply);

    let missing = JobDetailsView::new(&h.ctx, "nope").show(listings()).await;
    assert_eq!(missing, Err("Job not found".to_string()));
}

#[tokio::test]
async fn test_signup_redirects_after_notice() {
    let h = harness();
    h.api.expect_signup().return_ok(());

    let mut signup = SignupView::new(&h.ctx);
    signup.name = "Meera".into();
    signup.email = "meera@example.com".into();
    signup.password = "secret".into();
    signup.role = Role::Recruiter;

    let navigation = signup.submit().await;
    assert_eq!(
        navigation,
        Some(Navigation::after("/login", Duration::from_secs(1)))
    );
    assert_eq!(signup.notice(), Some("Signup done successfully"));
    assert_eq!(signup.error(), None);

    let calls = h.api.calls();
    let [ApiCall::Signup(registration)] = calls.as_slice() else {
        panic!("expected one signup call, got {calls:?}");
    };
    assert_eq!(registration.role, Role::Recruiter);
    assert_eq!(registration.email, "meera@example.com");
}

#[tokio::test]
async fn test_signup_with_missing_fields_sends_nothing() {
    let h = harness();
    let mut signup = SignupView::new(&h.ctx);
    signup.email = "meera@example.com".into();
    signup.password = "secret".into();

    assert_eq!(signup.submit().await, None);
    assert_eq!(signup.error(), Some("Name, email and password are required."));
    assert!(h.api.calls().is_empty());
}

#[tokio::test]
async fn test_signup_shows_server_message() {
    let h = harness();
    h.api.expect_signup().return_err(ApiError::Server {
        status: 409,
        body: r#"{"message":"Email already registered"}"#.into(),
    });

    let mut signup = SignupView::new(&h.ctx);
    signup.name = "Meera".into();
    signup.email = "meera@example.com".into();
    signup.password = "secret".into();
    assert_eq!(signup.submit().await, None);
    assert_eq!(signup.error(), Some("Email already registered"));
    assert_eq!(signup.notice(), None);
}

#[tokio::test]
async fn test_underage_profile_is_never_sent() {
    let h = harness();
    sign_in(&h, applicant()).await;

    let mut profile = ProfileView::new(&h.ctx);
    profile.load().await;
    profile.begin_edit();
    profile.form.age = "17".into();

    assert!(!profile.submit().await);
    assert_eq!(
        profile.error(),
        Some("Age must be a number greater than or equal to 18")
    );
    assert!(profile.is_editing());
    assert!(!h
        .api
        .calls()
        .iter()
        .any(|call| matches!(call, ApiCall::UpdateProfile { .. })));

    let mut updated = applicant();
    updated.age = Some(18);
    updated.gender = Some(Gender::Female);
    h.api.expect_update_profile().return_ok(updated.clone());

    profile.form.age = "18".into();
    profile.form.gender = "female".into();
    assert!(profile.submit().await);
    assert!(!profile.is_editing());
    assert_eq!(profile.error(), None);

    let calls = h.api.calls();
    let Some(ApiCall::UpdateProfile { token, update }) = calls.last() else {
        panic!("expected a profile update, got {calls:?}");
    };
    assert_eq!(token.as_deref(), Some("tok-1"));
    assert_eq!(update.id, "u1");
    assert_eq!(update.age, "18");

    let stored = h.ctx.session.current_user().await.expect("state");
    assert_eq!(stored, Some(updated));
    let card = profile.card().expect("card");
    assert_eq!(card.phone, "Not provided");
}

#[tokio::test]
async fn test_profile_update_failure_keeps_store() {
    let h = harness();
    sign_in(&h, applicant()).await;
    h.api.expect_update_profile().return_err(ApiError::Server {
        status: 500,
        body: String::new(),
    });

    let mut profile = ProfileView::new(&h.ctx);
    profile.load().await;
    profile.form.name = "Ravi Kumar".into();

    assert!(!profile.submit().await);
    assert_eq!(profile.error(), Some("Error updating profile. Please try again."));
    let stored = h.ctx.session.current_user().await.expect("state");
    assert_eq!(stored.map(|user| user.name), Some("Ravi".to_string()));
}

#[tokio::test]
async fn test_signed_out_profile_card() {
    let h = harness();
    let mut profile = ProfileView::new(&h.ctx);
    profile.load().await;
    assert_eq!(profile.card(), Err("Please log in to view your profile."));
}

#[tokio::test]
async fn test_job_management_without_session_redirects() {
    let h = harness();
    let mut view = JobManagementView::new(&h.ctx);

    assert_eq!(view.mount().await, Some(Navigation::to("/login")));
    assert!(view.jobs().is_empty());
    assert!(h.api.calls().is_empty());
}

#[tokio::test]
async fn test_job_management_edit_and_delete() {
    let h = harness();
    sign_in(&h, recruiter()).await;
    h.api.expect_list_jobs().return_ok(listings());

    let mut view = JobManagementView::new(&h.ctx);
    assert_eq!(view.mount().await, None);
    assert_eq!(view.form_title(), "Create New Job Listing");

    assert!(view.edit("j4"));
    assert_eq!(view.selected_job_id(), Some("j4"));
    assert_eq!(view.form_title(), "Edit Job Listing");
    assert_eq!(view.form.title, "DevOps Engineer");

    let mut renamed = listings().remove(3);
    renamed.title = "Platform Engineer".into();
    renamed.description = "Kubernetes".into();
    renamed.salary = "90000".into();
    h.api.expect_update_job().return_ok(renamed);

    view.form.title = "Platform Engineer".into();
    view.form.description = "Kubernetes".into();
    view.form.salary = "90000".into();
    assert!(view.submit().await);
    assert_eq!(view.selected_job_id(), None);
    assert_eq!(view.jobs()[3].job.title, "Platform Engineer");

    h.api.expect_delete_job().return_err(ApiError::Server {
        status: 403,
        body: "Not your job".into(),
    });
    assert!(!view.delete("j2").await);
    assert_eq!(view.error(), Some("Not your job"));
    assert_eq!(view.jobs().len(), 4);

    h.api.expect_delete_job().return_ok(());
    assert!(view.delete("j2").await);
    assert!(view.jobs().iter().all(|entry| entry.job.id != "j2"));
    h.api.verify();
}

#[tokio::test]
async fn test_navbar_follows_the_store() {
    let h = harness();
    let mut navbar = NavbarView::new(&h.ctx).await.expect("navbar");
    assert!(!navbar.sync());
    assert!(navbar.render().is_none());

    sign_in(&h, recruiter()).await;
    assert!(navbar.sync());
    let screen = navbar.render().expect("signed in");
    assert_eq!(screen.display_name, "Asha");
    let targets: Vec<_> = screen.links.iter().map(|link| link.to).collect();
    assert_eq!(targets, vec!["/dashboard", "/jobs"]);
    assert!(screen.details.is_none());

    assert_eq!(navbar.click_user(), None);
    let details = navbar.render().and_then(|screen| screen.details).expect("details open");
    assert_eq!(details.role, "Recruiter");
    assert_eq!(navbar.click_user(), Some(Navigation::to("/profile")));

    // Another screen flips dark mode
    h.ctx.session.toggle_dark_mode().await.expect("toggle");
    assert!(navbar.changed().await);
    assert!(navbar.render().expect("signed in").is_dark_mode);
}

#[tokio::test]
async fn test_navbar_falls_back_to_user_label() {
    let h = harness();
    sign_in(&h, User::new("u7", "", "anon@example.com", Role::Applicant)).await;

    let navbar = NavbarView::new(&h.ctx).await.expect("navbar");
    let screen = navbar.render().expect("signed in");
    assert_eq!(screen.display_name, "User");
    assert_eq!(screen.links[1].to, "/apply/job");
}
