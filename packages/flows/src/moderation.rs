//! User-confirmed accept/reject action against the moderation queue.

use std::rc::Rc;

use api_client::SessionToken;

use crate::error::RequestFailed;
use crate::queue::ModerationQueue;
use crate::traits::{Confirm, DirectoryApi, StatusSink};

/// Admin decision applied to an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject,
}

impl Verdict {
    pub fn prompt(&self) -> &'static str {
        match self {
            Verdict::Accept => "Are you sure you want to accept?",
            Verdict::Reject => "Are you sure you want to delete?",
        }
    }

    pub fn pending_message(&self) -> &'static str {
        match self {
            Verdict::Accept => "Accepting application...",
            Verdict::Reject => "Rejecting application...",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Verdict::Accept => "Application accepted",
            Verdict::Reject => "Application rejected",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Verdict::Accept => "Unable to accept application",
            Verdict::Reject => "Unable to reject application",
        }
    }
}

/// How an `execute` call ended. A declined confirmation is a no-op, not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Declined,
}

/// Confirm-then-mutate-then-refresh action.
///
/// One call issues at most one state-changing request, with no automatic
/// retry. The verdict endpoints require a bearer credential, passed
/// explicitly per call.
pub struct ModerationAction<A, C, S> {
    api: Rc<A>,
    confirm: C,
    status: S,
    queue: ModerationQueue<A>,
}

impl<A, C, S> ModerationAction<A, C, S>
where
    A: DirectoryApi,
    C: Confirm,
    S: StatusSink,
{
    pub fn new(api: Rc<A>, confirm: C, status: S, queue: ModerationQueue<A>) -> Self {
        Self {
            api,
            confirm,
            status,
            queue,
        }
    }

    /// Apply a verdict to the application identified by `target_id`.
    ///
    /// Failures are logged and surfaced through the status sink here; the
    /// returned error exists for callers that need to branch, not to be
    /// re-reported.
    pub async fn execute(
        &self,
        target_id: &str,
        verdict: Verdict,
        token: &SessionToken,
    ) -> Result<Outcome, RequestFailed> {
        if !self.confirm.confirm(verdict.prompt()).await {
            return Ok(Outcome::Declined);
        }

        self.status.pending(verdict.pending_message());

        let result = match verdict {
            Verdict::Accept => self.api.accept_doctor(target_id, token).await,
            Verdict::Reject => self.api.reject_doctor(target_id, token).await,
        };

        match result {
            Ok(_ack) => {
                self.status.success(verdict.success_message());

                // Resynchronize the queue. If this refresh fails the verdict
                // is already applied server-side and the view stays stale
                // until the next fetch.
                if let Err(err) = self.queue.refresh().await {
                    tracing::warn!(id = %target_id, error = %err, "Queue refresh after verdict failed");
                }

                Ok(Outcome::Applied)
            }
            Err(err) => {
                tracing::error!(id = %target_id, ?verdict, error = %err, "Verdict request failed");
                self.status.error(verdict.error_message());
                Err(RequestFailed(err))
            }
        }
    }
}
