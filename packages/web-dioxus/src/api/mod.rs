//! Server functions bridging the UI to the HealthBooker API, plus the
//! client-side adapter the workflows run against.

use async_trait::async_trait;
use dioxus::prelude::*;

use api_client::{Ack, Application, RegisterRequest, SessionToken};
use cloudinary::{ImageFile, UploadError};
use flows::{AvatarHost, DirectoryApi};

#[cfg(feature = "server")]
fn server_api_client() -> api_client::HealthBookerClient {
    let url = std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
    api_client::HealthBookerClient::new(url)
}

/// Moderation queue of undecided doctor applications.
#[server]
pub async fn fetch_applications() -> Result<Vec<Application>, ServerFnError> {
    server_api_client()
        .pending_applications()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Accept the application of the user identified by `id`.
#[server]
pub async fn accept_doctor(id: String, token: String) -> Result<String, ServerFnError> {
    let ack = server_api_client()
        .accept_doctor(&id, &SessionToken::new(token))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(ack.message)
}

/// Reject the application of the user identified by `id`.
#[server]
pub async fn reject_doctor(id: String, token: String) -> Result<String, ServerFnError> {
    let ack = server_api_client()
        .reject_doctor(&id, &SessionToken::new(token))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(ack.message)
}

/// Create a new user account.
#[server]
pub async fn register_user(request: RegisterRequest) -> Result<String, ServerFnError> {
    let ack = server_api_client()
        .register_user(&request)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(ack.message)
}

/// Upload an avatar image to the asset host and return its public URL.
/// Preset configuration stays server-side.
#[server]
pub async fn upload_avatar(
    filename: String,
    content_type: String,
    bytes: Vec<u8>,
) -> Result<String, ServerFnError> {
    let client = cloudinary::CloudinaryClient::new(cloudinary::CloudinaryOptions::from_env());
    client
        .upload(ImageFile {
            filename,
            content_type,
            bytes,
        })
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Client-side view of the remote service: every call goes through a
/// server function.
#[derive(Clone, Copy, Default)]
pub struct ServerFnApi;

fn into_api_error(err: ServerFnError) -> api_client::ApiError {
    api_client::ApiError::Network(err.to_string())
}

#[async_trait(?Send)]
impl DirectoryApi for ServerFnApi {
    async fn pending_applications(&self) -> api_client::Result<Vec<Application>> {
        fetch_applications().await.map_err(into_api_error)
    }

    async fn accept_doctor(&self, id: &str, token: &SessionToken) -> api_client::Result<Ack> {
        accept_doctor(id.to_string(), token.as_str().to_string())
            .await
            .map(|message| Ack { message })
            .map_err(into_api_error)
    }

    async fn reject_doctor(&self, id: &str, token: &SessionToken) -> api_client::Result<Ack> {
        reject_doctor(id.to_string(), token.as_str().to_string())
            .await
            .map(|message| Ack { message })
            .map_err(into_api_error)
    }

    async fn register_user(&self, request: &RegisterRequest) -> api_client::Result<Ack> {
        register_user(request.clone())
            .await
            .map(|message| Ack { message })
            .map_err(into_api_error)
    }
}

#[async_trait(?Send)]
impl AvatarHost for ServerFnApi {
    async fn upload(&self, file: ImageFile) -> Result<String, UploadError> {
        // reject unsupported content before shipping bytes anywhere
        if !cloudinary::is_supported_image(&file.content_type) {
            return Err(UploadError::UnsupportedContentType(file.content_type));
        }

        upload_avatar(file.filename, file.content_type, file.bytes)
            .await
            .map_err(|e| UploadError::Network(e.to_string()))
    }
}
