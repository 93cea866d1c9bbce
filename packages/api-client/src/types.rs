use serde::{Deserialize, Serialize};

/// Profile of the user behind a doctor application.
///
/// The API nests this under the application's `userId` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub mobile: Option<String>,
    pub pic: Option<String>,
}

/// A pending practitioner-registration request awaiting an admin verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId")]
    pub applicant: ApplicantProfile,
    pub experience: Option<i64>,
    pub specialization: Option<String>,
    pub fees: Option<f64>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

/// Payload for `POST /user/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub pic: String,
}

/// Acknowledgement of a state-changing request. The API answers mutations
/// with a plain-text message body.
#[derive(Debug, Clone, PartialEq)]
pub struct Ack {
    pub message: String,
}

/// Response to `POST /user/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub msg: Option<String>,
    pub token: String,
}

/// Opaque bearer credential for the mutating endpoints. Threaded
/// explicitly into each call rather than read from ambient storage.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
