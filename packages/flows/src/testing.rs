//! Recording mocks shared by the workflow tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use api_client::{Ack, ApiError, ApplicantProfile, Application, RegisterRequest, SessionToken};
use cloudinary::{ImageFile, UploadError};

use crate::traits::{AvatarHost, Confirm, DirectoryApi, StatusSink};

pub fn server_error() -> ApiError {
    ApiError::Api {
        status: 500,
        message: "Internal Server Error".to_string(),
    }
}

pub fn sample_application(user_id: &str) -> Application {
    Application {
        id: format!("app-{user_id}"),
        applicant: ApplicantProfile {
            id: user_id.to_string(),
            firstname: "Asha".to_string(),
            lastname: "Patel".to_string(),
            email: "asha@example.com".to_string(),
            mobile: Some("5551234".to_string()),
            pic: None,
        },
        experience: Some(7),
        specialization: Some("cardiology".to_string()),
        fees: Some(120.0),
        created_at: None,
    }
}

/// Records every call; queue responses are consumed front-to-back, with an
/// empty queue as the default.
#[derive(Default)]
pub struct RecordingApi {
    queue: RefCell<VecDeque<api_client::Result<Vec<Application>>>>,
    fetches: Cell<usize>,
    accepted: RefCell<Vec<String>>,
    rejected: RefCell<Vec<String>>,
    registers: Cell<usize>,
    next_verdict_error: RefCell<Option<ApiError>>,
    next_register_error: RefCell<Option<ApiError>>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_queue(&self, response: api_client::Result<Vec<Application>>) {
        self.queue.borrow_mut().push_back(response);
    }

    pub fn fail_next_verdict(&self, err: ApiError) {
        *self.next_verdict_error.borrow_mut() = Some(err);
    }

    pub fn fail_next_register(&self, err: ApiError) {
        *self.next_register_error.borrow_mut() = Some(err);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }

    pub fn accepted(&self) -> Vec<String> {
        self.accepted.borrow().clone()
    }

    pub fn rejected(&self) -> Vec<String> {
        self.rejected.borrow().clone()
    }

    pub fn register_count(&self) -> usize {
        self.registers.get()
    }

    fn ack(message: &str) -> Ack {
        Ack {
            message: message.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl DirectoryApi for RecordingApi {
    async fn pending_applications(&self) -> api_client::Result<Vec<Application>> {
        self.fetches.set(self.fetches.get() + 1);
        self.queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn accept_doctor(&self, id: &str, _token: &SessionToken) -> api_client::Result<Ack> {
        self.accepted.borrow_mut().push(id.to_string());
        match self.next_verdict_error.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(Self::ack("Application accepted")),
        }
    }

    async fn reject_doctor(&self, id: &str, _token: &SessionToken) -> api_client::Result<Ack> {
        self.rejected.borrow_mut().push(id.to_string());
        match self.next_verdict_error.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(Self::ack("Application rejected")),
        }
    }

    async fn register_user(&self, _request: &RegisterRequest) -> api_client::Result<Ack> {
        self.registers.set(self.registers.get() + 1);
        match self.next_register_error.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(Self::ack("User registered successfully")),
        }
    }
}

/// Answers every confirmation with a fixed verdict.
pub struct StaticConfirm(pub bool);

#[async_trait(?Send)]
impl Confirm for StaticConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

/// Captures `(phase, message)` pairs in call order.
#[derive(Clone, Default)]
pub struct RecordingSink(Rc<RefCell<Vec<(String, String)>>>);

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, String)> {
        self.0.borrow().clone()
    }
}

impl StatusSink for RecordingSink {
    fn pending(&self, message: &str) {
        self.0
            .borrow_mut()
            .push(("pending".to_string(), message.to_string()));
    }

    fn success(&self, message: &str) {
        self.0
            .borrow_mut()
            .push(("success".to_string(), message.to_string()));
    }

    fn error(&self, message: &str) {
        self.0
            .borrow_mut()
            .push(("error".to_string(), message.to_string()));
    }
}

/// Serves queued upload responses; defaults to a fixed URL.
#[derive(Default)]
pub struct RecordingHost(RefCell<VecDeque<Result<String, UploadError>>>);

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: Result<String, UploadError>) {
        self.0.borrow_mut().push_back(response);
    }
}

#[async_trait(?Send)]
impl AvatarHost for RecordingHost {
    async fn upload(&self, _file: ImageFile) -> Result<String, UploadError> {
        self.0
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok("https://cdn.example.com/default.png".to_string()))
    }
}
