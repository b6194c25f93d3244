#![forbid(unsafe_code)]

//! Construction errors.
//!
//! Runtime operations never fail: a paused controller, a blocked swipe
//! direction or an off-screen row are silent no-ops. Only building a
//! controller can be rejected.

/// Errors raised while constructing a [`SwipeListController`](crate::SwipeListController).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SwipeError {
    /// A required surface identifier was left unset.
    #[error("missing {which} surface identifier")]
    MissingSurface { which: &'static str },
    /// Device metrics cannot classify gestures.
    #[error("invalid touch metrics: {reason}")]
    InvalidMetrics { reason: &'static str },
}
