//! reqwest-backed [`PortalApi`].

use super::{ApiError, ApiResult, Credentials, LoginResponse, PortalApi, ProfileUpdate, Registration};
use crate::model::{Job, JobDraft, User};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// HTTP client for the portal backend.
#[derive(Debug, Clone)]
pub struct HttpPortalApi {
    http: Client,
    base_url: String,
}

impl HttpPortalApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends the request and turns any non-2xx status into [`ApiError::Server`].
    async fn send(builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), %body, "Portal API request failed");
        Err(ApiError::Server {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl PortalApi for HttpPortalApi {
    #[instrument(skip_all, fields(email = %credentials.email))]
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        debug!("Sending login request");
        let response = Self::send(self.http.post(self.url("/login")).json(credentials)).await?;
        Self::decode(response).await
    }

    #[instrument(skip_all, fields(email = %registration.email, role = %registration.role))]
    async fn signup(&self, registration: &Registration) -> ApiResult<()> {
        debug!("Sending signup request");
        Self::send(self.http.post(self.url("/signup")).json(registration)).await?;
        Ok(())
    }

    #[instrument(skip_all)]
    async fn list_jobs(&self, token: Option<&str>) -> ApiResult<Vec<Job>> {
        let request = Self::authorized(self.http.get(self.url("/api/jobs")), token);
        let jobs: Vec<Job> = Self::decode(Self::send(request).await?).await?;
        debug!(count = jobs.len(), "Fetched jobs");
        Ok(jobs)
    }

    #[instrument(skip_all, fields(title = %draft.title))]
    async fn create_job(&self, token: Option<&str>, draft: &JobDraft) -> ApiResult<Job> {
        debug!(?draft, "create_job called");
        let request = Self::authorized(self.http.post(self.url("/api/jobs")), token).json(draft);
        Self::decode(Self::send(request).await?).await
    }

    #[instrument(skip(self, token, draft))]
    async fn update_job(&self, token: Option<&str>, id: &str, draft: &JobDraft) -> ApiResult<Job> {
        debug!(?draft, "update_job called");
        let request =
            Self::authorized(self.http.put(self.url(&format!("/api/jobs/{id}"))), token).json(draft);
        Self::decode(Self::send(request).await?).await
    }

    #[instrument(skip(self, token))]
    async fn delete_job(&self, token: Option<&str>, id: &str) -> ApiResult<()> {
        let request = Self::authorized(self.http.delete(self.url(&format!("/api/jobs/{id}"))), token);
        Self::send(request).await?;
        Ok(())
    }

    #[instrument(skip_all, fields(user_id = %update.id))]
    async fn update_profile(&self, token: Option<&str>, update: &ProfileUpdate) -> ApiResult<User> {
        debug!(?update, "update_profile called");
        let request = Self::authorized(self.http.put(self.url("/user/update")), token).json(update);
        Self::decode(Self::send(request).await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{JobStatus, Role};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> HttpPortalApi {
        HttpPortalApi::new(server.uri(), Duration::from_secs(5)).unwrap()
    }

    fn draft() -> JobDraft {
        JobDraft {
            title: "Backend Engineer".into(),
            description: "APIs".into(),
            company: "DataSys".into(),
            location: "Delhi".into(),
            salary: "50000".into(),
            status: JobStatus::Open,
        }
    }

    #[tokio::test]
    async fn test_login_posts_credentials_and_decodes_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(json!({"email": "asha@example.com", "password": "secret"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "tok-1",
                "user": {"_id": "u1", "name": "Asha", "email": "asha@example.com", "role": "Applicant"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = api(&server)
            .login(&Credentials {
                email: "asha@example.com".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();

        assert_eq!(response.token, "tok-1");
        assert_eq!(response.user.unwrap().role, Role::Applicant);
    }

    #[tokio::test]
    async fn test_error_status_keeps_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"message":"Invalid credentials"}"#))
            .mount(&server)
            .await;

        let err = api(&server)
            .login(&Credentials {
                email: "x@example.com".into(),
                password: "nope".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Server { status: 401, .. }));
        assert_eq!(err.server_message().as_deref(), Some("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_job_calls_carry_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/jobs"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"_id": "j1", "title": "Backend Engineer", "company": "DataSys", "salary": 50000, "status": "Open"}
            ])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/jobs/j1"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let api = api(&server);
        let jobs = api.list_jobs(Some("tok-1")).await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].salary, "50000");

        api.delete_job(Some("tok-1"), "j1").await.unwrap();
    }

    #[tokio::test]
    async fn test_create_and_update_send_the_draft() {
        let server = MockServer::start().await;
        let body = json!({
            "title": "Backend Engineer",
            "description": "APIs",
            "company": "DataSys",
            "location": "Delhi",
            "salary": "50000",
            "status": "Open"
        });
        Mock::given(method("POST"))
            .and(path("/api/jobs"))
            .and(body_json(body.clone()))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "_id": "j9", "title": "Backend Engineer", "description": "APIs",
                "company": "DataSys", "location": "Delhi", "salary": "50000", "status": "Open"
            })))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/jobs/j9"))
            .and(body_json(body))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "_id": "j9", "title": "Backend Engineer", "company": "DataSys", "status": "Closed"
            })))
            .mount(&server)
            .await;

        let api = api(&server);
        let created = api.create_job(Some("tok"), &draft()).await.unwrap();
        assert_eq!(created.id, "j9");

        let updated = api.update_job(Some("tok"), "j9", &draft()).await.unwrap();
        assert_eq!(updated.status, JobStatus::Closed);
    }

    #[tokio::test]
    async fn test_undecodable_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/user/update"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = api(&server)
            .update_profile(
                Some("tok"),
                &ProfileUpdate {
                    id: "u1".into(),
                    name: "Asha".into(),
                    email: "asha@example.com".into(),
                    phone: String::new(),
                    age: "18".into(),
                    gender: String::new(),
                    role: "Applicant".into(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = HttpPortalApi::new("http://localhost:3000/", Duration::from_secs(1)).unwrap();
        assert_eq!(api.url("/login"), "http://localhost:3000/login");
    }
}
