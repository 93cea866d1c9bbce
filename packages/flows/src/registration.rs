//! Registration form workflow.
//!
//! `Editing -> Uploading -> Editing` on each avatar pick, and
//! `Editing -> Submitting -> Editing` on a failed submit; a successful
//! submit hands control back to the caller, which navigates to sign-in.

use std::rc::Rc;

use api_client::RegisterRequest;
use cloudinary::{ImageFile, UploadError};

use crate::busy::BusyFlag;
use crate::error::{SubmitError, ValidationError};
use crate::traits::{AvatarHost, DirectoryApi, StatusSink};

/// In-progress, unsubmitted form state. Kept intact on every failure path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub confpassword: String,
    pub pic: Option<String>,
}

/// Check the draft, short-circuiting on the first failure.
pub fn validate(draft: &RegistrationDraft) -> Result<(), ValidationError> {
    if draft.pic.as_deref().unwrap_or("").is_empty() {
        return Err(ValidationError::MissingAvatar);
    }
    if draft.firstname.is_empty()
        || draft.lastname.is_empty()
        || draft.email.is_empty()
        || draft.password.is_empty()
        || draft.confpassword.is_empty()
    {
        return Err(ValidationError::EmptyFields);
    }
    if draft.firstname.chars().count() < 3 {
        return Err(ValidationError::FirstNameTooShort);
    }
    if draft.lastname.chars().count() < 3 {
        return Err(ValidationError::LastNameTooShort);
    }
    if draft.password.chars().count() < 5 {
        return Err(ValidationError::PasswordTooShort);
    }
    if draft.password != draft.confpassword {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// How a `submit` call ended. A submit racing an in-flight avatar upload
/// is ignored, not a success; only `Completed` leaves the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Completed,
    Ignored,
}

/// Collects a draft, uploads the avatar, submits the creation request.
///
/// The uploading and submitting indicators are independent: picking an
/// avatar toggles only `uploading`, submitting only `submitting`.
pub struct RegistrationFlow<A, U, S> {
    api: Rc<A>,
    host: U,
    status: S,
    uploading: BusyFlag,
    submitting: BusyFlag,
}

impl<A, U, S> RegistrationFlow<A, U, S>
where
    A: DirectoryApi,
    U: AvatarHost,
    S: StatusSink,
{
    pub fn new(api: Rc<A>, host: U, status: S) -> Self {
        Self {
            api,
            host,
            status,
            uploading: BusyFlag::new(),
            submitting: BusyFlag::new(),
        }
    }

    pub fn uploading(&self) -> &BusyFlag {
        &self.uploading
    }

    pub fn submitting(&self) -> &BusyFlag {
        &self.submitting
    }

    /// Upload a picked avatar and store its URL in the draft.
    pub async fn upload_avatar(
        &self,
        draft: &mut RegistrationDraft,
        file: ImageFile,
    ) -> Result<(), UploadError> {
        let _uploading = self.uploading.acquire();

        match self.host.upload(file).await {
            Ok(url) => {
                draft.pic = Some(url);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Avatar upload failed");
                let message = match &err {
                    UploadError::UnsupportedContentType(_) => err.to_string(),
                    _ => "Image upload failed. Please try again.".to_string(),
                };
                self.status.error(&message);
                Err(err)
            }
        }
    }

    /// Validate the draft and issue the creation request.
    ///
    /// Validation failures never reach the network. On `Completed` the
    /// caller navigates to sign-in; on `Ignored` or failure the draft is
    /// untouched and the user stays on the form.
    pub async fn submit(&self, draft: &RegistrationDraft) -> Result<Submission, SubmitError> {
        // ignore submits racing an in-flight avatar upload
        if self.uploading.is_busy() {
            tracing::debug!("Submit ignored while avatar upload in flight");
            return Ok(Submission::Ignored);
        }

        if let Err(err) = validate(draft) {
            self.status.error(&err.to_string());
            return Err(err.into());
        }

        let pic = draft.pic.clone().ok_or(ValidationError::MissingAvatar)?;
        let request = RegisterRequest {
            firstname: draft.firstname.clone(),
            lastname: draft.lastname.clone(),
            email: draft.email.clone(),
            password: draft.password.clone(),
            pic,
        };

        let _submitting = self.submitting.acquire();
        self.status.pending("Registering user...");

        match self.api.register_user(&request).await {
            Ok(_ack) => {
                self.status.success("User registered successfully");
                Ok(Submission::Completed)
            }
            Err(err) => {
                tracing::error!(error = %err, "Registration request failed");
                self.status.error("Unable to register user");
                Err(SubmitError::Request(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{server_error, RecordingApi, RecordingHost, RecordingSink};

    fn valid_draft() -> RegistrationDraft {
        RegistrationDraft {
            firstname: "Asha".to_string(),
            lastname: "Patel".to_string(),
            email: "asha@example.com".to_string(),
            password: "secret".to_string(),
            confpassword: "secret".to_string(),
            pic: Some("https://cdn.example.com/asha.png".to_string()),
        }
    }

    fn flow(
        api: Rc<RecordingApi>,
        host: RecordingHost,
    ) -> (
        RegistrationFlow<RecordingApi, RecordingHost, RecordingSink>,
        RecordingSink,
    ) {
        let sink = RecordingSink::new();
        (RegistrationFlow::new(api, host, sink.clone()), sink)
    }

    #[test]
    fn validation_order_short_circuits() {
        let mut draft = valid_draft();
        draft.pic = None;
        assert_eq!(validate(&draft), Err(ValidationError::MissingAvatar));

        let mut draft = valid_draft();
        draft.email.clear();
        assert_eq!(validate(&draft), Err(ValidationError::EmptyFields));

        let mut draft = valid_draft();
        draft.firstname = "Al".to_string();
        assert_eq!(validate(&draft), Err(ValidationError::FirstNameTooShort));

        let mut draft = valid_draft();
        draft.lastname = "Ng".to_string();
        assert_eq!(validate(&draft), Err(ValidationError::LastNameTooShort));

        let mut draft = valid_draft();
        draft.password = "abcd".to_string();
        draft.confpassword = "abcd".to_string();
        assert_eq!(validate(&draft), Err(ValidationError::PasswordTooShort));

        let mut draft = valid_draft();
        draft.confpassword = "different".to_string();
        assert_eq!(validate(&draft), Err(ValidationError::PasswordMismatch));

        assert_eq!(validate(&valid_draft()), Ok(()));
    }

    #[test]
    fn empty_fields_reported_before_length_checks() {
        let mut draft = valid_draft();
        draft.firstname = "Al".to_string();
        draft.lastname.clear();
        assert_eq!(validate(&draft), Err(ValidationError::EmptyFields));
    }

    #[test]
    fn mismatch_reported_regardless_of_other_fields() {
        let mut draft = valid_draft();
        draft.password = "longenough".to_string();
        draft.confpassword = "different".to_string();
        assert_eq!(validate(&draft), Err(ValidationError::PasswordMismatch));
    }

    #[tokio::test]
    async fn invalid_draft_issues_no_network_call() {
        let api = Rc::new(RecordingApi::new());
        let (flow, sink) = flow(api.clone(), RecordingHost::new());

        let mut draft = valid_draft();
        draft.firstname = "Al".to_string();

        let err = flow.submit(&draft).await.unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Validation(ValidationError::FirstNameTooShort)
        ));
        assert_eq!(api.register_count(), 0);
        assert_eq!(
            sink.events(),
            vec![(
                "error".to_string(),
                "First name must be at least 3 characters long".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn short_password_rejected_before_any_request() {
        let api = Rc::new(RecordingApi::new());
        let (flow, _sink) = flow(api.clone(), RecordingHost::new());

        let mut draft = valid_draft();
        draft.password = "abc".to_string();
        draft.confpassword = "abc".to_string();

        assert!(flow.submit(&draft).await.is_err());
        assert_eq!(api.register_count(), 0);
    }

    #[tokio::test]
    async fn successful_submit_sends_one_creation_request() {
        let api = Rc::new(RecordingApi::new());
        let (flow, sink) = flow(api.clone(), RecordingHost::new());

        let outcome = flow.submit(&valid_draft()).await.unwrap();

        assert_eq!(outcome, Submission::Completed);
        assert_eq!(api.register_count(), 1);
        assert_eq!(
            sink.events(),
            vec![
                ("pending".to_string(), "Registering user...".to_string()),
                ("success".to_string(), "User registered successfully".to_string()),
            ]
        );
        assert!(!flow.submitting().is_busy());
    }

    #[tokio::test]
    async fn submit_during_avatar_upload_is_ignored_not_completed() {
        let api = Rc::new(RecordingApi::new());
        let (flow, sink) = flow(api.clone(), RecordingHost::new());

        let _uploading = flow.uploading().acquire();
        let outcome = flow.submit(&valid_draft()).await.unwrap();

        // ignored submits must not look like a completed registration
        assert_eq!(outcome, Submission::Ignored);
        assert_eq!(api.register_count(), 0);
        assert!(sink.events().is_empty());
        assert!(!flow.submitting().is_busy());
    }

    #[tokio::test]
    async fn failed_submit_keeps_draft_and_reports_error() {
        let api = Rc::new(RecordingApi::new());
        api.fail_next_register(server_error());
        let (flow, sink) = flow(api.clone(), RecordingHost::new());

        let draft = valid_draft();
        let err = flow.submit(&draft).await.unwrap_err();

        assert!(matches!(err, SubmitError::Request(_)));
        assert_eq!(draft, valid_draft());
        assert_eq!(sink.events()[1].1, "Unable to register user");
        assert!(!flow.submitting().is_busy());
    }

    #[tokio::test]
    async fn upload_stores_url_in_draft() {
        let api = Rc::new(RecordingApi::new());
        let host = RecordingHost::new();
        host.push(Ok("https://cdn.example.com/pic.png".to_string()));
        let (flow, sink) = flow(api, host);

        let mut draft = RegistrationDraft::default();
        flow.upload_avatar(
            &mut draft,
            ImageFile {
                filename: "pic.png".to_string(),
                content_type: "image/png".to_string(),
                bytes: vec![0u8; 4],
            },
        )
        .await
        .unwrap();

        assert_eq!(draft.pic.as_deref(), Some("https://cdn.example.com/pic.png"));
        assert!(sink.events().is_empty());
        assert!(!flow.uploading().is_busy());
    }

    #[tokio::test]
    async fn missing_url_surfaces_upload_error_and_sends_no_creation_request() {
        let api = Rc::new(RecordingApi::new());
        let host = RecordingHost::new();
        host.push(Err(UploadError::MissingUrl));
        let (flow, sink) = flow(api.clone(), host);

        let mut draft = valid_draft();
        draft.pic = None;

        let err = flow
            .upload_avatar(
                &mut draft,
                ImageFile {
                    filename: "pic.png".to_string(),
                    content_type: "image/png".to_string(),
                    bytes: vec![0u8; 4],
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, UploadError::MissingUrl));
        assert_eq!(draft.pic, None);
        assert_eq!(api.register_count(), 0);
        assert_eq!(
            sink.events(),
            vec![(
                "error".to_string(),
                "Image upload failed. Please try again.".to_string()
            )]
        );
        assert!(!flow.uploading().is_busy());
    }

    #[tokio::test]
    async fn unsupported_content_type_message_is_specific() {
        let api = Rc::new(RecordingApi::new());
        let host = RecordingHost::new();
        host.push(Err(UploadError::UnsupportedContentType(
            "image/gif".to_string(),
        )));
        let (flow, sink) = flow(api, host);

        let mut draft = RegistrationDraft::default();
        let _ = flow
            .upload_avatar(
                &mut draft,
                ImageFile {
                    filename: "pic.gif".to_string(),
                    content_type: "image/gif".to_string(),
                    bytes: vec![0u8; 4],
                },
            )
            .await;

        assert_eq!(
            sink.events(),
            vec![(
                "error".to_string(),
                "Please select an image in jpeg or png format".to_string()
            )]
        );
    }
}
