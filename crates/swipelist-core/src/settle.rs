#![forbid(unsafe_code)]

//! Settle animations and their completions.
//!
//! A released swipe (or a programmatic open/close) starts one settle
//! animation toward the row's resting offset. Row state is written only
//! when that animation's completion is dispatched back:
//!
//! - **Reveal** with swap: the open flag flips and `opened`/`closed` fires.
//! - **Dismiss** with swap: the row joins the dismiss batch and starts its
//!   height collapse; the batch is released when the last collapse ends.
//! - **Check** with swap: the checked flag flips and `choice_changed` fires.
//!
//! Completions for rows the table no longer covers (after an adapter reset)
//! are dropped.

use crate::config::SwipeAction;
use crate::event::AnimationToken;
use crate::host::{Animator, ListHost, RowViews, SettleTarget, SwipeListener, ViewId};
use crate::SwipeListController;

/// Height a dismissed row collapses to.
pub const COLLAPSED_HEIGHT: f32 = 1.0;

/// What to do when a settle animation completes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Settle {
    pub position: usize,
    pub views: RowViews,
    pub action: SwipeAction,
    pub swap: bool,
    pub toward_right: bool,
}

impl<H: ListHost, A: Animator, L: SwipeListener> SwipeListController<H, A, L> {
    /// Resting offset a settle animation heads for.
    ///
    /// An open row stays at its open offset unless it swaps closed; a closed
    /// row stays at zero unless it swaps open toward `toward_right`.
    pub(crate) fn settle_offset(&self, position: usize, swap: bool, toward_right: bool) -> f32 {
        let row = self.rows.get(position);
        match (row.open, swap) {
            (true, false) => self.open_offset(row.opened_right),
            (false, true) => self.open_offset(toward_right),
            _ => 0.0,
        }
    }

    /// Start the settle animation for a finished gesture.
    pub(crate) fn start_settle(
        &mut self,
        views: RowViews,
        position: usize,
        action: SwipeAction,
        swap: bool,
        toward_right: bool,
    ) {
        // Programmatic and scroll-driven settles run without a pointer-down.
        self.view_width = self.host.width().max(1.0);
        let (view, target) = match action {
            SwipeAction::Reveal => (
                views.front,
                SettleTarget {
                    translation_x: self.settle_offset(position, swap, toward_right),
                    opacity: None,
                },
            ),
            SwipeAction::Dismiss => {
                if swap {
                    self.dismiss.begin(position, views.parent);
                }
                (
                    views.parent,
                    SettleTarget {
                        translation_x: self.settle_offset(position, swap, toward_right),
                        opacity: Some(if swap { 0.0 } else { 1.0 }),
                    },
                )
            }
            SwipeAction::Check => (
                views.front,
                SettleTarget {
                    translation_x: 0.0,
                    opacity: None,
                },
            ),
            SwipeAction::None => return,
        };

        let token = self.next_token();
        let duration = self.animation_time();
        tracing::debug!(
            position,
            ?action,
            swap,
            toward_right,
            target = target.translation_x,
            token = token.0,
            "settle started"
        );
        self.settles.insert(
            token,
            Settle {
                position,
                views,
                action,
                swap,
                toward_right,
            },
        );
        self.animator.animate(view, target, duration, token);
    }

    pub(crate) fn on_settled(&mut self, token: AnimationToken) {
        let Some(settle) = self.settles.remove(&token) else {
            tracing::warn!(token = token.0, "unknown settle token");
            return;
        };
        let position = settle.position;
        tracing::debug!(position, action = ?settle.action, swap = settle.swap, "settle finished");

        if settle.action == SwipeAction::Reveal {
            self.intercept.reset();
        }
        if !settle.swap {
            return;
        }
        if settle.action == SwipeAction::Dismiss {
            self.begin_collapse(position, settle.views.parent);
            return;
        }
        if position >= self.rows.len() {
            tracing::warn!(position, "settle finished for a row no longer tracked");
            return;
        }

        match settle.action {
            SwipeAction::Reveal => {
                let open = self.rows.toggle_open(position, settle.toward_right);
                if open {
                    self.listener.opened(position, settle.toward_right);
                } else {
                    let was_right = self.rows.opened_right(position);
                    self.listener.closed(position, was_right);
                }
                self.host.set_clickable(settle.views.front, !open);
            }
            SwipeAction::Check => {
                let checked = self.rows.toggle_checked(position);
                self.listener.choice_changed(position, checked);
            }
            SwipeAction::Dismiss | SwipeAction::None => {}
        }
    }

    /// Second stage of a dismiss: collapse the row's height.
    fn begin_collapse(&mut self, position: usize, view: ViewId) {
        let height = self.animator.height(view);
        self.dismiss.record_height(position, view, height);
        let token = self.next_token();
        let duration = self.animation_time();
        self.collapses.insert(token, (position, view));
        self.animator
            .animate_height(view, height, COLLAPSED_HEIGHT, duration, token);
    }

    pub(crate) fn on_collapsed(&mut self, token: AnimationToken) {
        if self.collapses.remove(&token).is_none() {
            tracing::warn!(token = token.0, "unknown collapse token");
            return;
        }
        let Some(batch) = self.dismiss.finish() else {
            return;
        };
        let positions: Vec<usize> = batch.iter().map(|p| p.position).collect();
        tracing::debug!(?positions, "dismiss batch released");
        self.listener.dismissed(&positions);

        for entry in &batch {
            self.animator.set_opacity(entry.view, 1.0);
            self.animator.set_translation_x(entry.view, 0.0);
            if let Some(height) = entry.original_height {
                self.animator.set_height(entry.view, height);
            }
        }
    }
}
