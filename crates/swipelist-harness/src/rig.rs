#![forbid(unsafe_code)]

//! Scripted gesture driver.
//!
//! [`Rig`] owns a controller wired to the harness doubles and a virtual
//! clock. Touch helpers advance the clock by a fixed step per sample so
//! velocities are reproducible; animation helpers feed completions back
//! through `dispatch` the way a host event loop would.

use std::time::Duration;

use swipelist_core::{
    Surface, SwipeConfig, SwipeEvent, SwipeListController, TouchEvent, TouchMetrics,
};
use web_time::Instant;

use crate::animator::RecordingAnimator;
use crate::list::{BACK, FRONT, FakeList};
use crate::listener::RecordingListener;

/// Controller wired to the harness doubles.
pub type Controller = SwipeListController<FakeList, RecordingAnimator, RecordingListener>;

/// Row width used by [`Rig::standard`].
pub const WIDTH: f32 = 300.0;
/// Row height used by [`Rig::standard`].
pub const ROW_HEIGHT: f32 = 40.0;
/// Horizontal coordinate every scripted touch starts from.
pub const START_X: f32 = 150.0;

/// Time between scripted samples.
pub const STEP: Duration = Duration::from_millis(16);

/// Deterministic metrics: 8 px slop, fling band 1000..=8000 px/s.
#[must_use]
pub fn test_metrics() -> TouchMetrics {
    TouchMetrics {
        slop: 8.0,
        paging_slop: 16.0,
        min_fling_velocity: 1000.0,
        max_fling_velocity: 8000.0,
        velocity_horizon: Duration::from_secs(1),
        short_animation: Duration::from_millis(200),
    }
}

/// Default config with the harness surface identifiers.
#[must_use]
pub fn test_config() -> SwipeConfig {
    SwipeConfig::with_surfaces(FRONT, BACK)
}

/// A controller plus a virtual clock.
pub struct Rig {
    pub ctl: Controller,
    pub now: Instant,
    y: f32,
}

impl std::fmt::Debug for Rig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rig")
            .field("ctl", &self.ctl)
            .field("y", &self.y)
            .finish_non_exhaustive()
    }
}

impl Rig {
    /// 300x40 rows, 20 items, 10 attached, [`test_metrics`].
    #[must_use]
    pub fn standard(config: SwipeConfig) -> Self {
        let list = FakeList::new(WIDTH, ROW_HEIGHT, 20, 10).with_metrics(test_metrics());
        Self::new(config, list)
    }

    /// Build a rig around `list`; the row table is sized from the list.
    ///
    /// # Panics
    ///
    /// When `config` is rejected by the controller.
    #[must_use]
    pub fn new(config: SwipeConfig, list: FakeList) -> Self {
        let item_count = list.item_count;
        let animator = RecordingAnimator::new(list.row_height);
        let mut ctl = SwipeListController::new(config, list, animator, RecordingListener::new())
            .expect("valid harness config");
        ctl.dispatch(SwipeEvent::AdapterReset { item_count });
        Self {
            ctl,
            now: Instant::now(),
            y: 0.0,
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        self.now += dt;
    }

    pub fn dispatch(&mut self, event: SwipeEvent) -> bool {
        self.ctl.dispatch(event)
    }

    /// Pointer down at `x` over `position`.
    pub fn down_at(&mut self, position: usize, x: f32) -> bool {
        self.y = self.ctl.host().row_center_y(position);
        let event = TouchEvent::down(x, self.y, self.now);
        self.ctl.dispatch(event.into())
    }

    /// Pointer down at [`START_X`] over `position`.
    pub fn down(&mut self, position: usize) -> bool {
        self.down_at(position, START_X)
    }

    /// One move sample, [`STEP`] after the previous one.
    pub fn move_to(&mut self, x: f32) -> bool {
        self.move_xy(x, self.y)
    }

    pub fn move_xy(&mut self, x: f32, y: f32) -> bool {
        self.tick(STEP);
        self.y = y;
        let event = TouchEvent::moved(x, y, self.now);
        self.ctl.dispatch(event.into())
    }

    /// Drag from [`START_X`] by `dx` in `steps` evenly spaced samples.
    pub fn drag(&mut self, position: usize, dx: f32, steps: u32) {
        self.down(position);
        for i in 1..=steps {
            self.move_to(START_X + dx * i as f32 / steps as f32);
        }
    }

    /// Release at `x`, [`STEP`] after the previous sample.
    pub fn release(&mut self, x: f32) {
        self.tick(STEP);
        let event = TouchEvent::up(x, self.y, self.now);
        self.ctl.dispatch(event.into());
    }

    /// Hold still past the velocity horizon, then release at `x`.
    pub fn release_still(&mut self, x: f32) {
        let horizon = self.ctl.metrics().velocity_horizon;
        self.tick(horizon + Duration::from_millis(100));
        let event = TouchEvent::up(x, self.y, self.now);
        self.ctl.dispatch(event.into());
    }

    pub fn cancel(&mut self) {
        self.tick(STEP);
        let event = TouchEvent::cancel(START_X, self.y, self.now);
        self.ctl.dispatch(event.into());
    }

    pub fn tap(&mut self, surface: Surface) {
        self.ctl.dispatch(SwipeEvent::RowTapped(surface));
    }

    /// Slow drag by `dx` then a still release: no fling involved.
    pub fn slow_swipe(&mut self, position: usize, dx: f32) {
        self.drag(position, dx, 10);
        self.release_still(START_X + dx);
    }

    /// Advance animations by `dt` and dispatch their completions.
    pub fn advance(&mut self, dt: Duration) {
        self.tick(dt);
        let done = self.ctl.animator_mut().advance(dt);
        for event in done {
            self.ctl.dispatch(event);
        }
    }

    /// Complete one animation and dispatch its completion.
    pub fn complete(&mut self, token: swipelist_core::AnimationToken) -> bool {
        match self.ctl.animator_mut().complete(token) {
            Some(event) => {
                self.ctl.dispatch(event);
                true
            }
            None => false,
        }
    }

    /// Run animations to completion, including ones started by completions.
    pub fn settle(&mut self) {
        while self.ctl.animator().in_flight() > 0 {
            let done = self.ctl.animator_mut().finish_all();
            for event in done {
                self.ctl.dispatch(event);
            }
        }
    }

    pub fn listener(&self) -> &RecordingListener {
        self.ctl.listener()
    }

    pub fn animator(&self) -> &RecordingAnimator {
        self.ctl.animator()
    }

    pub fn list(&self) -> &FakeList {
        self.ctl.host()
    }
}
