//! Minimal Cloudinary unsigned upload client.
//!
//! Uploads an image via the unauthenticated preset endpoint and returns the
//! publicly addressable URL. Only `image/jpeg` and `image/png` content is
//! accepted; anything else is rejected before a request is made.

use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, UploadError>;

#[derive(Debug, Error)]
pub enum UploadError {
    /// Content type other than image/jpeg or image/png
    #[error("Please select an image in jpeg or png format")]
    UnsupportedContentType(String),

    /// Transport failure reaching the asset host
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the asset host
    #[error("Upload rejected ({status}): {message}")]
    Host { status: u16, message: String },

    /// Host answered 2xx but the response carried no `url` field
    #[error("Upload response contained no URL")]
    MissingUrl,
}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        UploadError::Network(err.to_string())
    }
}

/// Configuration for the unsigned upload endpoint.
#[derive(Debug, Clone)]
pub struct CloudinaryOptions {
    pub base_url: String,
    pub upload_preset: String,
    pub cloud_name: String,
}

impl CloudinaryOptions {
    /// Read options from `CLOUDINARY_BASE_URL`, `CLOUDINARY_PRESET` and
    /// `CLOUDINARY_CLOUD_NAME`.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("CLOUDINARY_BASE_URL")
                .unwrap_or_else(|_| "https://api.cloudinary.com/v1_1/demo/image/upload".to_string()),
            upload_preset: std::env::var("CLOUDINARY_PRESET").unwrap_or_default(),
            cloud_name: std::env::var("CLOUDINARY_CLOUD_NAME").unwrap_or_default(),
        }
    }
}

/// An image picked by the user, ready for upload.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Content types the avatar upload accepts.
pub fn is_supported_image(content_type: &str) -> bool {
    matches!(content_type, "image/jpeg" | "image/png")
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: Option<String>,
    secure_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CloudinaryClient {
    client: reqwest::Client,
    options: CloudinaryOptions,
}

impl CloudinaryClient {
    pub fn new(options: CloudinaryOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            options,
        }
    }

    /// Upload an image and return its public URL.
    pub async fn upload(&self, file: ImageFile) -> Result<String> {
        if !is_supported_image(&file.content_type) {
            return Err(UploadError::UnsupportedContentType(file.content_type));
        }

        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.filename)
            .mime_str(&file.content_type)?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("upload_preset", self.options.upload_preset.clone())
            .text("cloud_name", self.options.cloud_name.clone());

        let resp = self
            .client
            .post(&self.options.base_url)
            .multipart(form)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Asset host rejected upload");
            return Err(UploadError::Host {
                status: status.as_u16(),
                message: body,
            });
        }

        let upload: UploadResponse = resp.json().await?;
        upload
            .url
            .or(upload.secure_url)
            .ok_or(UploadError::MissingUrl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_jpeg_and_png_are_supported() {
        assert!(is_supported_image("image/jpeg"));
        assert!(is_supported_image("image/png"));
        assert!(!is_supported_image("image/gif"));
        assert!(!is_supported_image("application/pdf"));
        assert!(!is_supported_image(""));
    }

    #[tokio::test]
    async fn unsupported_content_type_never_hits_the_network() {
        // base_url is unroutable; an attempted request would error differently
        let client = CloudinaryClient::new(CloudinaryOptions {
            base_url: "http://127.0.0.1:1/upload".to_string(),
            upload_preset: "preset".to_string(),
            cloud_name: "cloud".to_string(),
        });

        let err = client
            .upload(ImageFile {
                filename: "cv.pdf".to_string(),
                content_type: "application/pdf".to_string(),
                bytes: vec![1, 2, 3],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, UploadError::UnsupportedContentType(_)));
    }

    #[test]
    fn upload_response_without_url_fields_parses() {
        let resp: UploadResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.url.is_none());
        assert!(resp.secure_url.is_none());
    }
}
