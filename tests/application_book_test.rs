use chrono::NaiveDate;
use job_portal::application_actor::ApplicationError;
use job_portal::clients::actor_client::ActorClient;
use job_portal::model::{ApplicationCreate, ApplicationId, ApplicationStatus};

fn params(user_id: &str, job_id: &str) -> ApplicationCreate {
    ApplicationCreate {
        user_id: user_id.to_string(),
        applicant_name: format!("Applicant {user_id}"),
        job_id: job_id.to_string(),
        applied_date: NaiveDate::from_ymd_opt(2025, 4, 22).expect("valid date"),
    }
}

/// Integration test: real application actor driven only through its client.
///
/// Covers id assignment, the per-user and per-job queries the dashboards use,
/// review decisions and actor shutdown once the last client is dropped.
#[tokio::test]
async fn test_application_book_lifecycle() {
    let (book, client) = job_portal::application_actor::new();
    let actor_handle = tokio::spawn(book.run(()));

    // Ids are handed out in submission order
    let first = client.submit(params("u1", "j1")).await.expect("first submit");
    let second = client.submit(params("u2", "j1")).await.expect("second submit");
    let third = client.submit(params("u1", "j3")).await.expect("third submit");
    assert_eq!((first, second, third), (ApplicationId(1), ApplicationId(2), ApplicationId(3)));

    let mine = client.for_user("u1").await.expect("for_user");
    let jobs: Vec<_> = mine.iter().map(|a| a.job_id.as_str()).collect();
    assert_eq!(jobs, vec!["j1", "j3"]);

    let to_j1 = client.for_jobs(&["j1"]).await.expect("for_jobs");
    assert_eq!(to_j1.len(), 2);
    assert!(to_j1.iter().all(|a| a.status == ApplicationStatus::Pending));

    let counts = client.applicant_counts().await.expect("counts");
    assert_eq!(counts.get("j1"), Some(&2));
    assert_eq!(counts.get("j3"), Some(&1));

    // Reviews flip status and report what it was
    let previous = client
        .set_status(second, ApplicationStatus::Rejected)
        .await
        .expect("review");
    assert_eq!(previous, ApplicationStatus::Pending);
    let stored = client.get(second).await.expect("get").expect("present");
    assert_eq!(stored.status, ApplicationStatus::Rejected);
    assert_eq!(stored.applicant_name, "Applicant u2");

    let missing = client
        .set_status(ApplicationId(99), ApplicationStatus::Accepted)
        .await
        .unwrap_err();
    assert_eq!(missing, ApplicationError::NotFound("app_99".to_string()));

    // Cleanup
    drop(client);
    actor_handle.await.expect("actor exits cleanly");
}

#[tokio::test]
async fn test_rejected_payload_is_not_stored() {
    let (book, client) = job_portal::application_actor::new();
    tokio::spawn(book.run(()));

    let err = client.submit(params("u1", "")).await.unwrap_err();
    assert_eq!(err, ApplicationError::ValidationError("job id is required".into()));
    assert!(client.all().await.expect("all").is_empty());
}
