#![forbid(unsafe_code)]

//! The swipe controller: one owner for all swipe state and one dispatch
//! entry point.
//!
//! # Event model
//!
//! Everything happens on a single sequential queue. Touch input, host click
//! contracts, scroll-state changes, adapter changes and animation
//! completions all enter through [`SwipeListController::dispatch`]. Starting
//! an animation returns immediately; its effect on row state is applied when
//! the matching completion event is dispatched later.
//!
//! # Invariants
//!
//! 1. At most one touch session exists at a time.
//! 2. Row open/checked flags change only while handling `AnimationSettled`.
//! 3. Every animation token is consumed at most once; unknown tokens are
//!    logged and ignored.
//! 4. A paused controller ignores pointer-down and pointer-move but never
//!    aborts animations already in flight.

use std::time::Duration;

use ahash::AHashMap;

use crate::config::{SwipeAction, SwipeConfig, SwipeMode};
use crate::dismiss::DismissBatcher;
use crate::error::SwipeError;
use crate::event::{AnimationToken, SwipeEvent};
use crate::gesture::{GesturePhase, TouchSession};
use crate::host::{Animator, ListHost, RowViews, SwipeListener, ViewId};
use crate::rows::{RowState, RowTable};
use crate::scroll::InterceptTracker;
use crate::settle::Settle;
use crate::velocity::TouchMetrics;

/// Swipe gesture engine for one list.
pub struct SwipeListController<H, A, L> {
    pub(crate) config: SwipeConfig,
    pub(crate) metrics: TouchMetrics,

    pub(crate) host: H,
    pub(crate) animator: A,
    pub(crate) listener: L,

    pub(crate) rows: RowTable,
    pub(crate) session: Option<TouchSession>,
    /// Row the host's click contracts refer to.
    pub(crate) tap_position: Option<usize>,
    /// Row width sampled at pointer-down and at settle start; never below 1.
    pub(crate) view_width: f32,

    // Pause sources
    pub(crate) enabled: bool,
    pub(crate) scroll_paused: bool,
    pub(crate) list_moving: bool,
    pub(crate) intercept: InterceptTracker,

    // In-flight animations
    pub(crate) settles: AHashMap<AnimationToken, Settle>,
    pub(crate) collapses: AHashMap<AnimationToken, (usize, ViewId)>,
    pub(crate) dismiss: DismissBatcher,
    next_token: u64,
}

impl<H, A, L> std::fmt::Debug for SwipeListController<H, A, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeListController")
            .field("rows", &self.rows.len())
            .field("session", &self.session.is_some())
            .field("paused", &self.is_paused())
            .field("settles", &self.settles.len())
            .field("dismiss_in_flight", &self.dismiss.in_flight())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Construction and dispatch
// ---------------------------------------------------------------------------

impl<H: ListHost, A: Animator, L: SwipeListener> SwipeListController<H, A, L> {
    /// Build a controller.
    ///
    /// Fails when a surface identifier is missing or the host reports
    /// unusable metrics.
    pub fn new(config: SwipeConfig, host: H, animator: A, listener: L) -> Result<Self, SwipeError> {
        config.surfaces.validate()?;
        let metrics = host.metrics();
        metrics.validate()?;
        tracing::debug!(mode = ?config.mode, ?metrics, "swipe controller created");
        Ok(Self {
            config,
            metrics,
            host,
            animator,
            listener,
            rows: RowTable::new(),
            session: None,
            tap_position: None,
            view_width: 1.0,
            enabled: true,
            scroll_paused: false,
            list_moving: false,
            intercept: InterceptTracker::new(),
            settles: AHashMap::new(),
            collapses: AHashMap::new(),
            dismiss: DismissBatcher::new(),
            next_token: 1,
        })
    }

    /// Handle one event.
    ///
    /// For touch events the result says whether the event was consumed
    /// (an accepted pointer-down, or a move applied to a committed swipe).
    /// Every other event returns `false`.
    pub fn dispatch(&mut self, event: SwipeEvent) -> bool {
        match event {
            SwipeEvent::Touch(touch) => return self.on_touch(&touch),
            SwipeEvent::RowTapped(surface) => self.on_row_tapped(surface),
            SwipeEvent::RowLongPressed => self.on_row_long_pressed(),
            SwipeEvent::AnimationSettled(token) => self.on_settled(token),
            SwipeEvent::DismissCollapsed(token) => self.on_collapsed(token),
            SwipeEvent::ScrollStateChanged(state) => self.on_scroll_state(state),
            SwipeEvent::DataSetChanged { item_count } => {
                self.rows.ensure_len(item_count);
                self.listener.list_contents_changed();
            }
            SwipeEvent::AdapterReset { item_count } => {
                tracing::debug!(item_count, "adapter reset; row state cleared");
                self.rows.reset(item_count);
                self.session = None;
                self.tap_position = None;
            }
        }
        false
    }

    /// Open a visible row programmatically.
    ///
    /// No-op for rows that are already open, off screen, or still settling.
    pub fn open_animate(&mut self, position: usize) {
        self.rows.ensure_len(position + 1);
        if self.rows.is_open(position) || self.is_settling(position) {
            return;
        }
        let Some(views) = self.visible_row_views(position) else {
            return;
        };
        let toward_right = self.config.mode == SwipeMode::RightOnly;
        self.start_settle(views, position, SwipeAction::Reveal, true, toward_right);
    }

    /// Close a visible row programmatically.
    ///
    /// No-op for rows that are already closed, off screen, or still settling.
    pub fn close_animate(&mut self, position: usize) {
        self.rows.ensure_len(position + 1);
        if !self.rows.is_open(position) || self.is_settling(position) {
            return;
        }
        let Some(views) = self.visible_row_views(position) else {
            return;
        };
        self.start_settle(views, position, SwipeAction::Reveal, true, false);
    }

    /// Views of a row if it is currently attached to the list.
    pub(crate) fn visible_row_views(&self, position: usize) -> Option<RowViews> {
        let first = self.host.first_visible_position();
        let screen_index = position.checked_sub(first)?;
        let row = self.host.child_at(screen_index)?;
        self.row_views(row)
    }

    pub(crate) fn row_views(&self, row: ViewId) -> Option<RowViews> {
        let front = self.host.find_surface(row, self.config.surfaces.front)?;
        let back = self.host.find_surface(row, self.config.surfaces.back);
        Some(RowViews {
            parent: row,
            front,
            back,
        })
    }

    pub(crate) fn next_token(&mut self) -> AnimationToken {
        let token = AnimationToken(self.next_token);
        self.next_token += 1;
        token
    }
}

// ---------------------------------------------------------------------------
// Configuration setters
// ---------------------------------------------------------------------------

impl<H, A, L> SwipeListController<H, A, L> {
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn set_mode(&mut self, mode: SwipeMode) {
        self.config.mode = mode;
    }

    pub fn set_action_left(&mut self, action: SwipeAction) {
        self.config.action_left = action;
    }

    pub fn set_action_right(&mut self, action: SwipeAction) {
        self.config.action_right = action;
    }

    pub fn set_offset_left(&mut self, offset: f32) {
        self.config.offset_left = offset;
    }

    pub fn set_offset_right(&mut self, offset: f32) {
        self.config.offset_right = offset;
    }

    /// `None` or zero restores the device short-animation duration.
    pub fn set_animation_time(&mut self, duration: Option<Duration>) {
        self.config.animation_time = duration;
    }

    pub fn set_open_on_long_press(&mut self, enabled: bool) {
        self.config.open_on_long_press = enabled;
    }

    pub fn set_close_all_on_list_move(&mut self, enabled: bool) {
        self.config.close_all_on_list_move = enabled;
    }

    /// Enable or disable new gesture handling.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[inline]
    #[must_use]
    pub fn metrics(&self) -> &TouchMetrics {
        &self.metrics
    }

    /// Effective settle duration.
    #[must_use]
    pub fn animation_time(&self) -> Duration {
        self.config
            .resolved_animation_time(self.metrics.short_animation)
    }
}

// ---------------------------------------------------------------------------
// Inspection
// ---------------------------------------------------------------------------

impl<H, A, L> SwipeListController<H, A, L> {
    /// Where the gesture state machine currently is.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match &self.session {
            Some(s) if s.swiping => GesturePhase::Committed(s.action),
            Some(_) => GesturePhase::Tracking,
            None if !self.settles.is_empty() || self.dismiss.in_flight() > 0 => {
                GesturePhase::Settling
            }
            None => GesturePhase::Rest,
        }
    }

    /// Committed state of a row; closed for rows the table does not cover.
    #[must_use]
    pub fn row(&self, position: usize) -> RowState {
        if position < self.rows.len() {
            self.rows.get(position)
        } else {
            RowState::default()
        }
    }

    #[must_use]
    pub fn is_open(&self, position: usize) -> bool {
        self.row(position).open
    }

    #[must_use]
    pub fn opened_from_right(&self, position: usize) -> bool {
        self.row(position).opened_right
    }

    #[must_use]
    pub fn is_checked(&self, position: usize) -> bool {
        self.row(position).checked
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &RowTable {
        &self.rows
    }

    /// Whether the list itself is being scrolled.
    #[inline]
    #[must_use]
    pub fn is_list_moving(&self) -> bool {
        self.list_moving
    }

    /// Whether new gestures are currently ignored.
    #[inline]
    #[must_use]
    pub fn is_paused(&self) -> bool {
        !self.enabled || self.scroll_paused
    }

    /// Rows waiting in the current dismiss batch.
    #[inline]
    #[must_use]
    pub fn pending_dismiss_count(&self) -> usize {
        self.dismiss.pending().len()
    }

    /// Whether a row has an animation in flight.
    #[must_use]
    pub fn is_settling(&self, position: usize) -> bool {
        self.settles.values().any(|s| s.position == position) || self.dismiss.contains(position)
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[inline]
    pub fn animator(&self) -> &A {
        &self.animator
    }

    #[inline]
    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    #[inline]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    #[inline]
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Give back the collaborators.
    pub fn into_parts(self) -> (H, A, L) {
        (self.host, self.animator, self.listener)
    }
}
