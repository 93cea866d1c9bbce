//! Request-confirm-mutate-refresh workflows for the HealthBooker client.
//!
//! Three entry points, mirroring the UI components that drive them:
//!
//! - [`queue::ModerationQueue`] fetches the pending-applications queue and
//!   exposes it as a shared snapshot behind a scoped busy flag.
//! - [`moderation::ModerationAction`] applies a user-confirmed
//!   accept/reject verdict and resynchronizes the queue on success.
//! - [`registration::RegistrationFlow`] validates the sign-up draft,
//!   uploads the avatar and issues the creation request.
//!
//! Collaborators (remote API, confirmation modal, status toasts, asset
//! host) sit behind the traits in [`traits`], so the workflows run the
//! same headless under test and inside the Dioxus frontend. All futures
//! are `?Send`: one UI event loop, one action in flight per user gesture,
//! no cancellation and no automatic retry.

pub mod busy;
pub mod error;
pub mod moderation;
pub mod queue;
pub mod registration;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use busy::{BusyFlag, BusyGuard};
pub use error::{RequestFailed, SubmitError, ValidationError};
pub use moderation::{ModerationAction, Outcome, Verdict};
pub use queue::ModerationQueue;
pub use registration::{validate, RegistrationDraft, RegistrationFlow, Submission};
pub use traits::{AvatarHost, Confirm, DirectoryApi, StatusSink};
