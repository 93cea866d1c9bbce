//! Moderation queue fetcher.

use std::cell::RefCell;
use std::rc::Rc;

use api_client::Application;

use crate::busy::BusyFlag;
use crate::error::RequestFailed;
use crate::traits::DirectoryApi;

/// Fetches the moderation queue and exposes it as a shared snapshot.
///
/// The snapshot is only ever replaced wholesale after a successful fetch;
/// a failed fetch leaves the previous value in place. The busy flag is
/// held for the duration of the fetch and cleared on both paths.
pub struct ModerationQueue<A> {
    api: Rc<A>,
    busy: BusyFlag,
    items: Rc<RefCell<Vec<Application>>>,
}

impl<A> Clone for ModerationQueue<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            busy: self.busy.clone(),
            items: self.items.clone(),
        }
    }
}

impl<A: DirectoryApi> ModerationQueue<A> {
    pub fn new(api: Rc<A>) -> Self {
        Self {
            api,
            busy: BusyFlag::new(),
            items: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn busy(&self) -> &BusyFlag {
        &self.busy
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Current snapshot of the queue.
    pub fn items(&self) -> Vec<Application> {
        self.items.borrow().clone()
    }

    /// Re-fetch the queue from the remote service.
    pub async fn refresh(&self) -> Result<(), RequestFailed> {
        let _busy = self.busy.acquire();

        match self.api.pending_applications().await {
            Ok(applications) => {
                tracing::debug!(count = applications.len(), "Fetched moderation queue");
                *self.items.borrow_mut() = applications;
                Ok(())
            }
            Err(err) => {
                // keep the previous snapshot; the caller decides what to show
                tracing::warn!(error = %err, "Failed to fetch moderation queue");
                Err(RequestFailed(err))
            }
        }
    }
}
