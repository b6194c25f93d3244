#![forbid(unsafe_code)]

//! Events consumed by the swipe controller.
//!
//! Touch input, the host's click contracts, scroll-state changes, adapter
//! changes and animation completions all arrive as one [`SwipeEvent`] and
//! are handled by [`SwipeListController::dispatch`](crate::SwipeListController::dispatch)
//! on a single sequential queue.

use web_time::Instant;

/// Phase of a single-pointer touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// A pointer sample in list-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub x: f32,
    pub y: f32,
    pub time: Instant,
}

impl TouchEvent {
    #[must_use]
    pub const fn new(phase: TouchPhase, x: f32, y: f32, time: Instant) -> Self {
        Self { phase, x, y, time }
    }

    #[must_use]
    pub const fn down(x: f32, y: f32, time: Instant) -> Self {
        Self::new(TouchPhase::Down, x, y, time)
    }

    #[must_use]
    pub const fn moved(x: f32, y: f32, time: Instant) -> Self {
        Self::new(TouchPhase::Move, x, y, time)
    }

    #[must_use]
    pub const fn up(x: f32, y: f32, time: Instant) -> Self {
        Self::new(TouchPhase::Up, x, y, time)
    }

    #[must_use]
    pub const fn cancel(x: f32, y: f32, time: Instant) -> Self {
        Self::new(TouchPhase::Cancel, x, y, time)
    }
}

/// Which surface of a row the host reported a tap on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Front,
    Back,
}

/// Scroll state of the host list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    /// Not scrolling.
    #[default]
    Idle,
    /// Scrolling under a pointer.
    TouchScroll,
    /// Coasting after the pointer lifted.
    Fling,
}

/// Correlates an animation the controller started with its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationToken(pub u64);

/// Everything the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeEvent {
    /// Raw pointer input.
    Touch(TouchEvent),
    /// The host's click contract fired on the last pressed row.
    RowTapped(Surface),
    /// The host's long-click contract fired on the last pressed row's front.
    RowLongPressed,
    /// A settle animation reached its target.
    AnimationSettled(AnimationToken),
    /// A dismiss height collapse finished.
    DismissCollapsed(AnimationToken),
    /// The list's scroll state changed.
    ScrollStateChanged(ScrollState),
    /// Adapter contents changed; rows are appended, never dropped.
    DataSetChanged { item_count: usize },
    /// A new adapter was installed; all row state is forgotten.
    AdapterReset { item_count: usize },
}

impl From<TouchEvent> for SwipeEvent {
    fn from(event: TouchEvent) -> Self {
        Self::Touch(event)
    }
}
