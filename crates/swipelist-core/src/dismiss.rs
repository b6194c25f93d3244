#![forbid(unsafe_code)]

//! Batched dismissal.
//!
//! Every dismiss that starts bumps an in-flight count and registers a
//! pending entry. Each dismiss finishes with its own height collapse; only
//! when the last in-flight collapse completes is the whole batch released,
//! so N overlapping dismissals produce one removal report.
//!
//! # Invariants
//!
//! 1. A released batch is sorted by descending position, so the receiver can
//!    remove items by index without shifting the ones still to be removed.
//! 2. Nothing is released while any dismiss is still in flight.
//! 3. After a release the batcher is empty and the count is zero.

use crate::host::ViewId;

/// A row whose dismiss animation has started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingDismiss {
    pub position: usize,
    pub view: ViewId,
    /// Height before the collapse started; restored after the batch.
    pub original_height: Option<f32>,
}

/// Merges overlapping dismiss animations into one batch.
#[derive(Debug, Clone, Default)]
pub struct DismissBatcher {
    pending: Vec<PendingDismiss>,
    in_flight: usize,
}

impl DismissBatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dismiss whose slide-out has just started.
    pub fn begin(&mut self, position: usize, view: ViewId) {
        self.in_flight += 1;
        self.pending.push(PendingDismiss {
            position,
            view,
            original_height: None,
        });
    }

    /// Remember the height a view had before its collapse.
    pub fn record_height(&mut self, position: usize, view: ViewId, height: f32) {
        if let Some(entry) = self
            .pending
            .iter_mut()
            .find(|p| p.position == position && p.view == view)
        {
            entry.original_height = Some(height);
        }
    }

    /// One collapse finished. Returns the batch once nothing is in flight.
    pub fn finish(&mut self) -> Option<Vec<PendingDismiss>> {
        if self.in_flight == 0 {
            tracing::warn!("dismiss completion with no dismiss in flight");
            return None;
        }
        self.in_flight -= 1;
        if self.in_flight > 0 {
            return None;
        }
        let mut batch = std::mem::take(&mut self.pending);
        batch.sort_by(|a, b| b.position.cmp(&a.position));
        Some(batch)
    }

    /// Dismiss animations started but not yet collapsed.
    #[inline]
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Entries waiting for the batch to release.
    #[inline]
    #[must_use]
    pub fn pending(&self) -> &[PendingDismiss] {
        &self.pending
    }

    /// Whether a row is part of the pending batch.
    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.pending.iter().any(|p| p.position == position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(batch: &[PendingDismiss]) -> Vec<usize> {
        batch.iter().map(|p| p.position).collect()
    }

    #[test]
    fn single_dismiss_releases_immediately() {
        let mut b = DismissBatcher::new();
        b.begin(4, ViewId(40));
        let batch = b.finish().expect("batch");
        assert_eq!(positions(&batch), vec![4]);
        assert_eq!(b.in_flight(), 0);
        assert!(b.pending().is_empty());
    }

    #[test]
    fn overlapping_dismisses_release_once_sorted_descending() {
        let mut b = DismissBatcher::new();
        b.begin(2, ViewId(20));
        b.begin(7, ViewId(70));
        b.begin(5, ViewId(50));
        assert!(b.finish().is_none());
        assert!(b.finish().is_none());
        let batch = b.finish().expect("batch on last completion");
        assert_eq!(positions(&batch), vec![7, 5, 2]);
    }

    #[test]
    fn late_joiner_extends_the_batch() {
        let mut b = DismissBatcher::new();
        b.begin(1, ViewId(10));
        b.begin(3, ViewId(30));
        assert!(b.finish().is_none());
        b.begin(0, ViewId(1));
        assert!(b.finish().is_none());
        assert_eq!(positions(&b.finish().unwrap()), vec![3, 1, 0]);
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut b = DismissBatcher::new();
        assert!(b.finish().is_none());
        b.begin(0, ViewId(1));
        assert!(b.finish().is_some());
    }

    #[test]
    fn record_height_targets_matching_entry() {
        let mut b = DismissBatcher::new();
        b.begin(1, ViewId(10));
        b.begin(2, ViewId(20));
        b.record_height(2, ViewId(20), 48.0);
        assert_eq!(b.pending()[0].original_height, None);
        assert_eq!(b.pending()[1].original_height, Some(48.0));
        assert!(b.contains(1));
        assert!(!b.contains(3));
    }
}
