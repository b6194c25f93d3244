#![forbid(unsafe_code)]

//! Gesture state machine: turns one pointer's touch stream into a swipe.
//!
//! # State Machine
//!
//! ```text
//! Rest ──down on row──▶ Tracking ──|delta| > slop, vx > vy──▶ Committed(action)
//!   ▲                      │                                      │
//!   │                 up (tap)/cancel                        up / cancel
//!   │                      ▼                                      ▼
//!   └──────────────────── Rest ◀──────── completion ────────── Settling
//! ```
//!
//! # Invariants
//!
//! 1. The action is chosen once, at commit. An open row always commits as
//!    [`SwipeAction::Reveal`] since dragging it can only retract it.
//! 2. A direction the swipe mode forbids contributes zero displacement, both
//!    to the commit check and to the live offset.
//! 3. Touch handling never writes row state; it only starts animations.
//!
//! # Failure Modes
//!
//! - Pointer-down outside every row starts no session; the following move
//!   and up events are ignored.
//! - Pointer-cancel reverts a committed swipe without a fling check.
//! - A release on a row that is already settling (closed by a list scroll
//!   or programmatically mid-drag) starts no second settle.

use crate::config::{SwipeAction, SwipeConfig, SwipeMode};
use crate::event::{Surface, TouchEvent, TouchPhase};
use crate::host::{Animator, ListHost, RowViews, SwipeListener, ViewId};
use crate::velocity::{TouchMetrics, VelocityTracker};
use crate::SwipeListController;

/// Observable phase of the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No touch session and nothing animating.
    Rest,
    /// Pointer is down on a row; no swipe yet.
    Tracking,
    /// A swipe has been committed with the given action.
    Committed(SwipeAction),
    /// No touch session, but animations are still in flight.
    Settling,
}

/// State for the active pointer.
#[derive(Debug, Clone)]
pub(crate) struct TouchSession {
    pub position: usize,
    pub down_x: f32,
    pub views: RowViews,
    pub swiping: bool,
    pub action: SwipeAction,
    pub tracker: VelocityTracker,
}

/// How a released swipe resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Release {
    /// Commit to the new state (open, close or dismiss) instead of reverting.
    pub swap: bool,
    /// Direction of the new state when `swap` is set.
    pub toward_right: bool,
}

/// Horizontal displacement after applying the swipe-mode restriction.
///
/// A closed row may only move in the opening direction the mode allows; an
/// open row may only move back toward closed.
#[must_use]
pub fn effective_delta(mode: SwipeMode, open: bool, delta: f32) -> f32 {
    let blocked = match mode {
        SwipeMode::None => true,
        SwipeMode::Both => false,
        SwipeMode::LeftOnly => {
            if open {
                delta < 0.0
            } else {
                delta > 0.0
            }
        }
        SwipeMode::RightOnly => {
            if open {
                delta > 0.0
            } else {
                delta < 0.0
            }
        }
    };
    if blocked { 0.0 } else { delta }
}

/// Action a freshly committed swipe takes.
#[must_use]
pub fn select_action(config: &SwipeConfig, open: bool, toward_right: bool) -> SwipeAction {
    if open {
        return SwipeAction::Reveal;
    }
    match config.action_for(toward_right) {
        SwipeAction::Dismiss => SwipeAction::Dismiss,
        SwipeAction::Check => SwipeAction::Check,
        SwipeAction::Reveal | SwipeAction::None => SwipeAction::Reveal,
    }
}

/// Inputs to the release decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseInput {
    /// Total effective horizontal displacement.
    pub delta: f32,
    /// Signed horizontal velocity (px/s).
    pub vx: f32,
    /// Signed vertical velocity (px/s).
    pub vy: f32,
    pub open: bool,
    pub opened_right: bool,
    pub mode: SwipeMode,
    pub width: f32,
}

/// Decide swap versus revert for a released swipe.
///
/// A decisive fling wins; otherwise more than half the row width swaps.
/// A fling that would re-open a row toward the side it is already open on
/// cancels the swap.
#[must_use]
pub fn decide_release(input: ReleaseInput, metrics: &TouchMetrics) -> Release {
    let mut vx_abs = input.vx.abs();
    if !input.open {
        let forbidden = match input.mode {
            SwipeMode::LeftOnly => input.vx > 0.0,
            SwipeMode::RightOnly => input.vx < 0.0,
            SwipeMode::None | SwipeMode::Both => false,
        };
        if forbidden {
            vx_abs = 0.0;
        }
    }
    let vy_abs = input.vy.abs();

    if metrics.is_fling(vx_abs, vy_abs) {
        let toward_right = input.vx > 0.0;
        let reopens_same_side = input.open && input.opened_right == toward_right;
        Release {
            swap: !reopens_same_side,
            toward_right,
        }
    } else if input.delta.abs() > input.width / 2.0 {
        Release {
            swap: true,
            toward_right: input.delta > 0.0,
        }
    } else {
        Release {
            swap: false,
            toward_right: false,
        }
    }
}

/// Live opacity of a row being dragged out by a Dismiss swipe.
#[must_use]
pub fn dismiss_opacity(offset: f32, width: f32) -> f32 {
    (1.0 - 2.0 * offset.abs() / width.max(1.0)).clamp(0.0, 1.0)
}

// ---------------------------------------------------------------------------
// Touch handlers
// ---------------------------------------------------------------------------

impl<H: ListHost, A: Animator, L: SwipeListener> SwipeListController<H, A, L> {
    pub(crate) fn on_touch(&mut self, event: &TouchEvent) -> bool {
        match event.phase {
            TouchPhase::Down => self.on_pointer_down(event),
            TouchPhase::Move => self.on_pointer_move(event),
            TouchPhase::Up => {
                self.on_pointer_up(event);
                false
            }
            TouchPhase::Cancel => {
                self.on_pointer_cancel();
                false
            }
        }
    }

    /// Screen-space hit test over the attached rows.
    fn hit_row(&self, x: f32, y: f32) -> Option<(ViewId, usize)> {
        (0..self.host.child_count())
            .filter_map(|i| self.host.child_at(i))
            .find(|&view| self.host.hit_rect(view).contains(x, y))
            .and_then(|view| Some((view, self.host.position_for_view(view)?)))
    }

    fn on_pointer_down(&mut self, event: &TouchEvent) -> bool {
        if self.is_paused() {
            return false;
        }
        self.view_width = self.host.width().max(1.0);
        self.session = None;
        self.tap_position = None;

        let Some((row, position)) = self.hit_row(event.x, event.y) else {
            return true;
        };
        let Some(views) = self.row_views(row) else {
            tracing::warn!(position, "row has no front surface");
            return true;
        };
        self.rows.ensure_len(position + 1);
        self.tap_position = Some(position);

        if self.is_settling(position) {
            tracing::debug!(position, "row still settling; touch not tracked");
            return true;
        }

        let open = self.rows.is_open(position);
        self.host.set_clickable(views.front, !open);

        let mut tracker = VelocityTracker::new(self.metrics.velocity_horizon);
        tracker.add(event.x, event.y, event.time);
        self.session = Some(TouchSession {
            position,
            down_x: event.x,
            views,
            swiping: false,
            action: SwipeAction::None,
            tracker,
        });
        true
    }

    fn on_pointer_move(&mut self, event: &TouchEvent) -> bool {
        if self.is_paused() {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        session.tracker.add(event.x, event.y, event.time);
        let (vx, vy) = session.tracker.velocity();
        let (vx, vy) = (vx.abs(), vy.abs());

        let row = self.rows.get(session.position);
        let delta = event.x - session.down_x;
        let effective = effective_delta(self.config.mode, row.open, delta);

        if !session.swiping && self.metrics.exceeds_slop(effective) && vy < vx {
            session.swiping = true;
            session.action = select_action(&self.config, row.open, delta > 0.0);
            tracing::debug!(
                position = session.position,
                action = ?session.action,
                delta,
                "swipe committed"
            );
            self.host.request_disallow_intercept(true);
            self.host.cancel_touch();
        }

        if !session.swiping {
            return false;
        }
        let (position, action, views) = (session.position, session.action, session.views);
        let offset = if row.open {
            effective + self.open_offset(row.opened_right)
        } else {
            effective
        };
        self.move_row(position, action, views, offset);
        true
    }

    fn on_pointer_up(&mut self, event: &TouchEvent) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        if !session.swiping {
            // A tap; the host's click contract follows.
            return;
        }
        self.tap_position = None;
        session.tracker.add(event.x, event.y, event.time);
        let (vx, vy) = session.tracker.velocity();
        let row = self.rows.get(session.position);
        let release = decide_release(
            ReleaseInput {
                delta: effective_delta(self.config.mode, row.open, event.x - session.down_x),
                vx,
                vy,
                open: row.open,
                opened_right: row.opened_right,
                mode: self.config.mode,
                width: self.view_width,
            },
            &self.metrics,
        );
        tracing::debug!(
            position = session.position,
            swap = release.swap,
            toward_right = release.toward_right,
            vx,
            vy,
            "swipe released"
        );
        if self.is_settling(session.position) {
            tracing::debug!(position = session.position, "row already settling; release dropped");
            return;
        }
        self.start_settle(
            session.views,
            session.position,
            session.action,
            release.swap,
            release.toward_right,
        );
    }

    fn on_pointer_cancel(&mut self) {
        self.tap_position = None;
        let Some(session) = self.session.take() else {
            return;
        };
        if session.swiping {
            tracing::debug!(position = session.position, "swipe cancelled");
            self.start_settle(session.views, session.position, session.action, false, false);
        }
    }

    /// Echo a committed swipe's offset onto the row immediately.
    fn move_row(&mut self, position: usize, action: SwipeAction, views: RowViews, offset: f32) {
        tracing::trace!(position, offset, "swipe move");
        self.listener.moving(position, offset);
        if action == SwipeAction::Dismiss {
            self.animator.set_translation_x(views.parent, offset);
            self.animator
                .set_opacity(views.parent, dismiss_opacity(offset, self.view_width));
        } else {
            self.animator.set_translation_x(views.front, offset);
        }
    }

    /// Resting offset of a row open toward the given side.
    pub(crate) fn open_offset(&self, toward_right: bool) -> f32 {
        if toward_right {
            self.view_width - self.config.offset_right
        } else {
            -self.view_width + self.config.offset_left
        }
    }

    pub(crate) fn on_row_tapped(&mut self, surface: Surface) {
        let Some(position) = self.tap_position else {
            return;
        };
        match surface {
            Surface::Front if self.row(position).open => self.close_animate(position),
            Surface::Front => self.listener.front_clicked(position),
            Surface::Back => {
                let has_back = self
                    .visible_row_views(position)
                    .is_some_and(|views| views.back.is_some());
                if has_back {
                    self.listener.back_clicked(position);
                } else {
                    tracing::debug!(position, "back tap on a row without a back surface");
                }
            }
        }
    }

    pub(crate) fn on_row_long_pressed(&mut self) {
        if !self.config.open_on_long_press {
            return;
        }
        if let Some(position) = self.tap_position {
            self.open_animate(position);
        }
    }
}
