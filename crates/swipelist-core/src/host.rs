#![forbid(unsafe_code)]

//! Collaborator interfaces.
//!
//! The controller never renders anything. It reads geometry from a
//! [`ListHost`], moves views through an [`Animator`], and reports outcomes to
//! a [`SwipeListener`]. Animation completions come back later as
//! [`SwipeEvent`](crate::SwipeEvent)s carrying the token passed to the
//! animator.

use std::time::Duration;

use crate::config::SurfaceId;
use crate::event::AnimationToken;
use crate::geometry::Rect;
use crate::velocity::TouchMetrics;

/// Opaque handle to a host view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

/// The views making up one visible row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowViews {
    /// Row container (moved and collapsed on dismiss).
    pub parent: ViewId,
    /// Swipeable front surface.
    pub front: ViewId,
    /// Surface revealed behind the front, if the row has one.
    pub back: Option<ViewId>,
}

/// The scrolling list that owns the rows.
pub trait ListHost {
    /// Number of row views currently attached.
    fn child_count(&self) -> usize;

    /// Row view at a screen index (0 = first visible).
    fn child_at(&self, screen_index: usize) -> Option<ViewId>;

    /// Hit rectangle of a row view in list-local coordinates.
    fn hit_rect(&self, view: ViewId) -> Rect;

    /// Find a surface inside a row view.
    fn find_surface(&self, row: ViewId, id: SurfaceId) -> Option<ViewId>;

    /// Adapter position of the first attached row.
    fn first_visible_position(&self) -> usize;

    /// Adapter position of the last attached row.
    fn last_visible_position(&self) -> usize;

    /// Row width in pixels.
    fn width(&self) -> f32;

    /// Adapter position of a row view.
    fn position_for_view(&self, view: ViewId) -> Option<usize>;

    /// Ask ancestors to stop (or resume) intercepting the current gesture.
    fn request_disallow_intercept(&mut self, disallow: bool);

    /// Deliver a cancel to the list's own scroll handling.
    fn cancel_touch(&mut self);

    /// Enable or disable the click and long-click contracts of a view.
    fn set_clickable(&mut self, view: ViewId, clickable: bool);

    /// Device-calibrated touch thresholds.
    fn metrics(&self) -> TouchMetrics {
        TouchMetrics::default()
    }
}

/// Where a settle animation ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleTarget {
    pub translation_x: f32,
    /// Target opacity, or `None` to leave opacity alone.
    pub opacity: Option<f32>,
}

/// View property and animation primitives.
pub trait Animator {
    /// Move a view immediately.
    fn set_translation_x(&mut self, view: ViewId, value: f32);

    /// Change a view's opacity immediately.
    fn set_opacity(&mut self, view: ViewId, value: f32);

    /// Current laid-out height.
    fn height(&self, view: ViewId) -> f32;

    /// Change a view's laid-out height immediately.
    fn set_height(&mut self, view: ViewId, value: f32);

    /// Interpolate toward `target`; completion is reported as
    /// `SwipeEvent::AnimationSettled(token)`.
    fn animate(
        &mut self,
        view: ViewId,
        target: SettleTarget,
        duration: Duration,
        token: AnimationToken,
    );

    /// Interpolate the height of `view`, applying it every frame;
    /// completion is reported as `SwipeEvent::DismissCollapsed(token)`.
    fn animate_height(
        &mut self,
        view: ViewId,
        from: f32,
        to: f32,
        duration: Duration,
        token: AnimationToken,
    );
}

/// Receives swipe outcomes. Every method defaults to doing nothing.
#[allow(unused_variables)]
pub trait SwipeListener {
    /// A row finished opening toward the given side.
    fn opened(&mut self, position: usize, toward_right: bool) {}

    /// A row finished closing; reports the side it had been open toward.
    fn closed(&mut self, position: usize, was_toward_right: bool) {}

    /// A committed swipe moved the row to `offset`.
    fn moving(&mut self, position: usize, offset: f32) {}

    /// The front surface of a closed row was tapped.
    fn front_clicked(&mut self, position: usize) {}

    /// The back surface of a row was tapped.
    fn back_clicked(&mut self, position: usize) {}

    /// Adapter contents changed.
    fn list_contents_changed(&mut self) {}

    /// Rows finished dismissing, highest position first.
    fn dismissed(&mut self, positions_descending: &[usize]) {}

    /// A Check swipe toggled a row.
    fn choice_changed(&mut self, position: usize, checked: bool) {}
}

impl SwipeListener for () {}
