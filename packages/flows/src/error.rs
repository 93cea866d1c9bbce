//! Error taxonomy for the client workflows.
//!
//! `ValidationError` is local and never reaches the network. `RequestFailed`
//! wraps a remote-service failure; it is logged and surfaced as a status
//! message at the component boundary and never propagates past it. A
//! declined confirmation is not an error (see `moderation::Outcome`).

use thiserror::Error;

/// Pre-flight registration form failures, in check order. Each variant's
/// display string is the user-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload a profile picture")]
    MissingAvatar,

    #[error("All fields must be filled out")]
    EmptyFields,

    #[error("First name must be at least 3 characters long")]
    FirstNameTooShort,

    #[error("Last name must be at least 3 characters long")]
    LastNameTooShort,

    #[error("Password must be at least 5 characters long")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// A remote-service request failed (non-2xx or transport error).
#[derive(Debug, Error)]
#[error("{0}")]
pub struct RequestFailed(#[from] pub api_client::ApiError);

/// Registration submit failures.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unable to register user")]
    Request(#[source] api_client::ApiError),
}
