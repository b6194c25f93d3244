#![forbid(unsafe_code)]

//! Scroll coordination between the list and row swipes.
//!
//! Two pieces live here:
//!
//! - The scroll-state handler: a touch scroll pauses new gestures, marks the
//!   list as moving and (optionally) closes every visible open row; settling
//!   back to idle clears the moving flag.
//! - [`InterceptTracker`]: the list widget's own decision whether a drag is a
//!   vertical scroll the list should intercept, or a horizontal drag that
//!   belongs to the row under the pointer.

use crate::event::{ScrollState, TouchEvent, TouchPhase};
use crate::host::{Animator, ListHost, SwipeListener};
use crate::SwipeListController;

/// Which axis the list believes the current drag is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterceptState {
    #[default]
    Rest,
    ScrollingX,
    ScrollingY,
}

/// Axis detection for the list's intercept decision.
#[derive(Debug, Clone, Default)]
pub struct InterceptTracker {
    state: InterceptState,
    last_x: f32,
    last_y: f32,
}

impl InterceptTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> InterceptState {
        self.state
    }

    /// Start tracking a new drag from `(x, y)`.
    pub fn begin(&mut self, x: f32, y: f32) {
        self.state = InterceptState::Rest;
        self.last_x = x;
        self.last_y = y;
    }

    pub fn reset(&mut self) {
        self.state = InterceptState::Rest;
    }

    /// Update the axis from a move. Vertical movement wins when both axes
    /// pass the slop on the same sample.
    pub fn track_move(&mut self, x: f32, y: f32, slop: f32) {
        let x_moved = (x - self.last_x).abs().trunc() > slop;
        let y_moved = (y - self.last_y).abs().trunc() > slop;
        if x_moved {
            self.state = InterceptState::ScrollingX;
            self.last_x = x;
            self.last_y = y;
        }
        if y_moved {
            self.state = InterceptState::ScrollingY;
            self.last_x = x;
            self.last_y = y;
        }
    }
}

impl<H: ListHost, A: Animator, L: SwipeListener> SwipeListController<H, A, L> {
    /// Decide whether the list should intercept `event` as a scroll.
    ///
    /// Hosts that route touches through their intercept hook call this
    /// instead of dispatching `SwipeEvent::Touch`; once a drag is classified
    /// as horizontal, events are forwarded to the gesture state machine.
    pub fn intercept_touch(&mut self, event: &TouchEvent) -> bool {
        if self.intercept.state() == InterceptState::ScrollingX {
            return self.on_touch(event);
        }
        match event.phase {
            TouchPhase::Move => {
                self.intercept
                    .track_move(event.x, event.y, self.metrics.paging_slop);
                self.intercept.state() == InterceptState::ScrollingY
            }
            TouchPhase::Down => {
                self.on_touch(event);
                self.intercept.begin(event.x, event.y);
                false
            }
            TouchPhase::Cancel => {
                self.intercept.reset();
                false
            }
            TouchPhase::Up => {
                self.on_touch(event);
                self.intercept.state() == InterceptState::ScrollingY
            }
        }
    }

    /// Current intercept axis.
    #[must_use]
    pub fn intercept_state(&self) -> InterceptState {
        self.intercept.state()
    }

    pub(crate) fn on_scroll_state(&mut self, state: ScrollState) {
        let touch_scroll = state == ScrollState::TouchScroll;
        let owns_pointer = self.session.as_ref().is_some_and(|s| s.swiping);
        if !owns_pointer {
            self.scroll_paused = touch_scroll;
        }
        tracing::debug!(?state, paused = self.is_paused(), "list scroll state");

        if touch_scroll {
            self.list_moving = true;
            if self.config.close_all_on_list_move {
                self.close_open_rows();
            }
        }
        match state {
            ScrollState::Idle => {
                self.list_moving = false;
                self.intercept.reset();
            }
            ScrollState::Fling => self.intercept.reset(),
            ScrollState::TouchScroll => {}
        }
    }

    /// Close every open row in the visible range, except the row a
    /// committed swipe is dragging.
    fn close_open_rows(&mut self) {
        let first = self.host.first_visible_position();
        let last = self.host.last_visible_position();
        if last < first {
            return;
        }
        let dragged = self
            .session
            .as_ref()
            .filter(|s| s.swiping)
            .map(|s| s.position);
        self.rows.ensure_len(last + 1);
        for position in self.rows.open_in(first..=last) {
            if Some(position) != dragged {
                self.close_animate(position);
            }
        }
    }
}
