#![forbid(unsafe_code)]

//! Fixed-geometry list double.
//!
//! Rows are `row_height` tall and stacked from the top of the list starting
//! at `first_visible`. Each row owns three views with deterministic ids:
//! `position * 10 + 1` (parent), `+ 2` (front) and `+ 3` (back).

use ahash::AHashMap;
use swipelist_core::{ListHost, Rect, SurfaceId, TouchMetrics, ViewId};

/// Surface identifier the harness uses for front views.
pub const FRONT: u32 = 1;
/// Surface identifier the harness uses for back views.
pub const BACK: u32 = 2;

/// Deterministic [`ListHost`].
#[derive(Debug, Clone)]
pub struct FakeList {
    pub width: f32,
    pub row_height: f32,
    pub item_count: usize,
    pub first_visible: usize,
    pub visible_rows: usize,
    pub metrics: TouchMetrics,
    /// Positions whose row has no back surface.
    pub rows_without_back: Vec<usize>,

    /// Every `request_disallow_intercept` argument, in order.
    pub disallow_requests: Vec<bool>,
    /// Number of cancels delivered to the list's scroll handling.
    pub cancels: usize,
    /// Last clickable state applied to each view.
    pub clickable: AHashMap<ViewId, bool>,
}

impl FakeList {
    #[must_use]
    pub fn new(width: f32, row_height: f32, item_count: usize, visible_rows: usize) -> Self {
        Self {
            width,
            row_height,
            item_count,
            first_visible: 0,
            visible_rows,
            metrics: TouchMetrics::default(),
            rows_without_back: Vec::new(),
            disallow_requests: Vec::new(),
            cancels: 0,
            clickable: AHashMap::new(),
        }
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: TouchMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    #[must_use]
    pub const fn parent_view(position: usize) -> ViewId {
        ViewId(position as u64 * 10 + 1)
    }

    #[must_use]
    pub const fn front_view(position: usize) -> ViewId {
        ViewId(position as u64 * 10 + 2)
    }

    #[must_use]
    pub const fn back_view(position: usize) -> ViewId {
        ViewId(position as u64 * 10 + 3)
    }

    /// List-local y coordinate of the middle of a visible row.
    #[must_use]
    pub fn row_center_y(&self, position: usize) -> f32 {
        let screen = position.saturating_sub(self.first_visible) as f32;
        screen * self.row_height + self.row_height / 2.0
    }

    /// Scroll so that `position` is the first attached row.
    pub fn scroll_to(&mut self, position: usize) {
        self.first_visible = position.min(self.item_count.saturating_sub(1));
    }

    fn attached(&self) -> usize {
        self.visible_rows
            .min(self.item_count.saturating_sub(self.first_visible))
    }

    fn position_of(view: ViewId) -> usize {
        (view.0 / 10) as usize
    }
}

impl ListHost for FakeList {
    fn child_count(&self) -> usize {
        self.attached()
    }

    fn child_at(&self, screen_index: usize) -> Option<ViewId> {
        (screen_index < self.attached()).then(|| Self::parent_view(self.first_visible + screen_index))
    }

    fn hit_rect(&self, view: ViewId) -> Rect {
        let screen = Self::position_of(view).saturating_sub(self.first_visible);
        Rect::new(0.0, screen as f32 * self.row_height, self.width, self.row_height)
    }

    fn find_surface(&self, row: ViewId, id: SurfaceId) -> Option<ViewId> {
        let position = Self::position_of(row);
        match id.0 {
            FRONT => Some(Self::front_view(position)),
            BACK if self.rows_without_back.contains(&position) => None,
            BACK => Some(Self::back_view(position)),
            _ => None,
        }
    }

    fn first_visible_position(&self) -> usize {
        self.first_visible
    }

    fn last_visible_position(&self) -> usize {
        (self.first_visible + self.attached()).saturating_sub(1)
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn position_for_view(&self, view: ViewId) -> Option<usize> {
        let position = Self::position_of(view);
        (position < self.item_count).then_some(position)
    }

    fn request_disallow_intercept(&mut self, disallow: bool) {
        self.disallow_requests.push(disallow);
    }

    fn cancel_touch(&mut self) {
        self.cancels += 1;
    }

    fn set_clickable(&mut self, view: ViewId, clickable: bool) {
        self.clickable.insert(view, clickable);
    }

    fn metrics(&self) -> TouchMetrics {
        self.metrics
    }
}
