#![forbid(unsafe_code)]

//! Swipe gestures for rows of a vertically scrolling list.
//!
//! # Role
//! `swipelist-core` interprets a single pointer's touch stream over a list,
//! decides whether it is a vertical scroll or a horizontal row swipe, and
//! drives the row to reveal, dismiss or check. It owns per-row open/checked
//! state and merges overlapping dismissals into one removal report.
//!
//! # Primary responsibilities
//! - **Velocity/slop classification** ([`velocity`]): fling and slop checks.
//! - **Row state** ([`rows`]): positional open/checked flags.
//! - **Gesture state machine** ([`gesture`]): rest, tracking, committed.
//! - **Settle** ([`settle`]): resolve a released swipe; write row state on
//!   completion only.
//! - **Batched dismissal** ([`dismiss`]): one report per overlapping batch.
//! - **Scroll coordination** ([`scroll`]): pause during list scrolls and
//!   close open rows when the list moves.
//!
//! # How it fits
//! The list widget, view properties and listener are collaborators behind
//! the traits in [`host`]. All input, including animation completions,
//! arrives as a [`SwipeEvent`] through [`SwipeListController::dispatch`].

pub mod config;
pub mod controller;
pub mod dismiss;
pub mod error;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod rows;
pub mod scroll;
pub mod settle;
pub mod velocity;

pub use config::{SurfaceId, SurfaceIds, SwipeAction, SwipeConfig, SwipeMode};
#[cfg(feature = "config")]
pub use config::ConfigError;
pub use controller::SwipeListController;
pub use error::SwipeError;
pub use event::{AnimationToken, ScrollState, Surface, SwipeEvent, TouchEvent, TouchPhase};
pub use geometry::Rect;
pub use gesture::GesturePhase;
pub use host::{Animator, ListHost, RowViews, SettleTarget, SwipeListener, ViewId};
pub use rows::RowState;
pub use scroll::InterceptState;
pub use velocity::{TouchMetrics, VelocityTracker};
