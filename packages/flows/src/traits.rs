//! Seams between the workflows and their collaborators.
//!
//! Futures here are `?Send`: everything runs on the UI event loop (or a
//! current-thread test runtime), never across threads.

use async_trait::async_trait;

use api_client::{Ack, Application, HealthBookerClient, RegisterRequest, SessionToken};
use cloudinary::{CloudinaryClient, ImageFile, UploadError};

/// The remote HealthBooker service, as the workflows see it.
#[async_trait(?Send)]
pub trait DirectoryApi {
    /// Moderation queue of undecided applications. No credential; the API
    /// serves this endpoint unauthenticated.
    async fn pending_applications(&self) -> api_client::Result<Vec<Application>>;

    async fn accept_doctor(&self, id: &str, token: &SessionToken) -> api_client::Result<Ack>;

    async fn reject_doctor(&self, id: &str, token: &SessionToken) -> api_client::Result<Ack>;

    async fn register_user(&self, request: &RegisterRequest) -> api_client::Result<Ack>;
}

#[async_trait(?Send)]
impl DirectoryApi for HealthBookerClient {
    async fn pending_applications(&self) -> api_client::Result<Vec<Application>> {
        HealthBookerClient::pending_applications(self).await
    }

    async fn accept_doctor(&self, id: &str, token: &SessionToken) -> api_client::Result<Ack> {
        HealthBookerClient::accept_doctor(self, id, token).await
    }

    async fn reject_doctor(&self, id: &str, token: &SessionToken) -> api_client::Result<Ack> {
        HealthBookerClient::reject_doctor(self, id, token).await
    }

    async fn register_user(&self, request: &RegisterRequest) -> api_client::Result<Ack> {
        HealthBookerClient::register_user(self, request).await
    }
}

/// Asks the user a yes/no question and resolves with the answer. Replaces
/// the blocking `window.confirm` with an awaitable modal.
#[async_trait(?Send)]
pub trait Confirm {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Three-phase user feedback channel (toasts in the web UI).
pub trait StatusSink {
    fn pending(&self, message: &str);
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Third-party asset host accepting an image and returning a public URL.
#[async_trait(?Send)]
pub trait AvatarHost {
    async fn upload(&self, file: ImageFile) -> Result<String, UploadError>;
}

#[async_trait(?Send)]
impl AvatarHost for CloudinaryClient {
    async fn upload(&self, file: ImageFile) -> Result<String, UploadError> {
        CloudinaryClient::upload(self, file).await
    }
}
