//! Scoped busy indicator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared busy flag toggled through a scoped guard, so the reset happens
/// on both success and failure paths. Single-writer-at-a-time is assumed
/// (UI event-loop scheduling); acquisitions are not refcounted.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Set the flag; it clears when the returned guard drops.
    pub fn acquire(&self) -> BusyGuard {
        self.0.store(true, Ordering::Relaxed);
        BusyGuard(self.0.clone())
    }
}

pub struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_clears_flag_on_drop() {
        let busy = BusyFlag::new();
        assert!(!busy.is_busy());

        {
            let _guard = busy.acquire();
            assert!(busy.is_busy());
        }

        assert!(!busy.is_busy());
    }

    #[test]
    fn guard_clears_flag_on_early_exit() {
        let busy = BusyFlag::new();

        fn bails(busy: &BusyFlag) -> Result<(), ()> {
            let _guard = busy.acquire();
            Err(())
        }

        assert!(bails(&busy).is_err());
        assert!(!busy.is_busy());
    }
}
