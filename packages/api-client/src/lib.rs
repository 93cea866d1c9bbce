//! Pure HealthBooker REST API client.
//!
//! A minimal client for the HealthBooker API. Covers the moderation queue
//! (pending doctor applications), the accept/reject mutations, user
//! registration and login.
//!
//! # Example
//!
//! ```rust,ignore
//! use api_client::HealthBookerClient;
//!
//! let client = HealthBookerClient::new("http://localhost:5000");
//!
//! let queue = client.pending_applications().await?;
//! for app in &queue {
//!     println!("{} {}", app.applicant.firstname, app.applicant.lastname);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{ApiError, Result};
pub use types::{Ack, ApplicantProfile, Application, LoginResponse, RegisterRequest, SessionToken};

use serde::Serialize;

#[derive(Debug, Clone)]
pub struct HealthBookerClient {
    client: reqwest::Client,
    base_url: String,
}

impl HealthBookerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the moderation queue of not-yet-decided doctor applications.
    ///
    /// The API serves this list without an Authorization header while the
    /// mutations below require one. Kept as the API defines it.
    pub async fn pending_applications(&self) -> Result<Vec<Application>> {
        let url = format!("{}/doctor/getnotdoctors", self.base_url);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let applications: Vec<Application> = resp.json().await?;
        Ok(applications)
    }

    /// Accept a doctor application. `id` is the applicant's user id.
    pub async fn accept_doctor(&self, id: &str, token: &SessionToken) -> Result<Ack> {
        self.put_verdict("acceptdoctor", id, token).await
    }

    /// Reject a doctor application. `id` is the applicant's user id.
    pub async fn reject_doctor(&self, id: &str, token: &SessionToken) -> Result<Ack> {
        self.put_verdict("rejectdoctor", id, token).await
    }

    async fn put_verdict(&self, endpoint: &str, id: &str, token: &SessionToken) -> Result<Ack> {
        #[derive(Serialize)]
        struct Body<'a> {
            id: &'a str,
        }

        let url = format!("{}/doctor/{}", self.base_url, endpoint);
        let resp = self
            .client
            .put(&url)
            .bearer_auth(token.as_str())
            .json(&Body { id })
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            tracing::warn!(%id, endpoint, status = status.as_u16(), "Verdict request rejected by API");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(Ack { message: body })
    }

    /// Register a new user account.
    pub async fn register_user(&self, request: &RegisterRequest) -> Result<Ack> {
        let url = format!("{}/user/register", self.base_url);
        let resp = self.client.post(&url).json(request).send().await?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(Ack { message: body })
    }

    /// Exchange credentials for a bearer token. The token is issued by the
    /// API; this client only consumes it.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        #[derive(Serialize)]
        struct Body<'a> {
            email: &'a str,
            password: &'a str,
        }

        let url = format!("{}/user/login", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&Body { email, password })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let login: LoginResponse = resp.json().await?;
        Ok(login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_deserializes_nested_applicant() {
        let json = r#"[{
            "_id": "66b1f0",
            "userId": {
                "_id": "u1",
                "firstname": "Asha",
                "lastname": "Patel",
                "email": "asha@example.com",
                "mobile": "5551234",
                "pic": "https://cdn.example.com/asha.png"
            },
            "experience": 7,
            "specialization": "cardiology",
            "fees": 120,
            "createdAt": "2024-03-01T10:00:00.000Z"
        }]"#;

        let apps: Vec<Application> = serde_json::from_str(json).unwrap();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].applicant.id, "u1");
        assert_eq!(apps[0].applicant.firstname, "Asha");
        assert_eq!(apps[0].experience, Some(7));
        assert_eq!(apps[0].fees, Some(120.0));
    }

    #[test]
    fn application_tolerates_missing_optional_fields() {
        let json = r#"[{
            "_id": "66b1f1",
            "userId": {
                "_id": "u2",
                "firstname": "Ben",
                "lastname": "Okafor",
                "email": "ben@example.com"
            }
        }]"#;

        let apps: Vec<Application> = serde_json::from_str(json).unwrap();
        assert_eq!(apps[0].applicant.mobile, None);
        assert_eq!(apps[0].applicant.pic, None);
        assert_eq!(apps[0].specialization, None);
    }

    #[test]
    fn register_request_serializes_flat_payload() {
        let req = RegisterRequest {
            firstname: "Asha".into(),
            lastname: "Patel".into(),
            email: "asha@example.com".into(),
            password: "secret".into(),
            pic: "https://cdn.example.com/asha.png".into(),
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["firstname"], "Asha");
        assert_eq!(value["pic"], "https://cdn.example.com/asha.png");
        assert!(value.get("confpassword").is_none());
    }
}
