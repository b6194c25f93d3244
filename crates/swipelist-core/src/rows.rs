#![forbid(unsafe_code)]

//! Per-row swipe state, indexed by list position.
//!
//! # Invariants
//!
//! 1. The table is grown to cover the list before any row is read.
//! 2. Growth only appends closed, unchecked rows; the table shrinks only on
//!    [`RowTable::reset`].
//! 3. Mutation is crate-private. The controller calls the mutators only from
//!    animation completion handlers, so a reader never observes a state the
//!    row's animation has not reached yet.
//!
//! Reading past the grown range is a programming error: it asserts in debug
//! builds and reads as a closed row in release builds.

/// Committed swipe state of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowState {
    /// The front surface rests in its open position.
    pub open: bool,
    /// Direction the row was opened toward (meaningful while `open`).
    pub opened_right: bool,
    /// Toggled by committed Check swipes.
    pub checked: bool,
}

/// Arena of [`RowState`] indexed by row position.
#[derive(Debug, Clone, Default)]
pub struct RowTable {
    rows: Vec<RowState>,
}

impl RowTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows covered.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Grow to cover at least `len` rows. Never shrinks.
    pub fn ensure_len(&mut self, len: usize) {
        if len > self.rows.len() {
            self.rows.resize(len, RowState::default());
        }
    }

    /// Forget every row and cover `len` fresh ones.
    pub fn reset(&mut self, len: usize) {
        self.rows.clear();
        self.rows.resize(len, RowState::default());
    }

    /// Committed state of a row.
    #[must_use]
    pub fn get(&self, position: usize) -> RowState {
        debug_assert!(
            position < self.rows.len(),
            "row {position} read beyond table of {}",
            self.rows.len()
        );
        self.rows.get(position).copied().unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub fn is_open(&self, position: usize) -> bool {
        self.get(position).open
    }

    #[inline]
    #[must_use]
    pub fn opened_right(&self, position: usize) -> bool {
        self.get(position).opened_right
    }

    /// Positions of open rows within `range`, clipped to the table.
    pub fn open_in(&self, range: std::ops::RangeInclusive<usize>) -> Vec<usize> {
        range
            .filter(|&p| self.rows.get(p).is_some_and(|r| r.open))
            .collect()
    }

    /// Flip the open flag, recording the direction when opening.
    ///
    /// Returns the new open state.
    pub(crate) fn toggle_open(&mut self, position: usize, toward_right: bool) -> bool {
        let Some(row) = self.slot(position) else {
            return false;
        };
        row.open = !row.open;
        if row.open {
            row.opened_right = toward_right;
        }
        row.open
    }

    /// Flip the checked flag. Returns the new value.
    pub(crate) fn toggle_checked(&mut self, position: usize) -> bool {
        let Some(row) = self.slot(position) else {
            return false;
        };
        row.checked = !row.checked;
        row.checked
    }

    fn slot(&mut self, position: usize) -> Option<&mut RowState> {
        debug_assert!(
            position < self.rows.len(),
            "row {position} written beyond table of {}",
            self.rows.len()
        );
        self.rows.get_mut(position)
    }
}
