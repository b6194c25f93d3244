#![forbid(unsafe_code)]

//! Velocity and slop classification for the active pointer.
//!
//! [`VelocityTracker`] buffers raw `(x, y, t)` samples for one touch session
//! and estimates velocity over a trailing time window. [`TouchMetrics`] holds
//! the device-calibrated thresholds that turn those numbers into decisions.
//!
//! # Invariants
//!
//! 1. Velocity is computed from the oldest and newest samples inside the
//!    horizon, in pixels per second.
//! 2. Fewer than two samples in the horizon, or zero elapsed time, yields
//!    zero velocity.
//! 3. Classification never mutates the buffer.

use std::time::Duration;

use web_time::Instant;

use crate::error::SwipeError;

/// Device-calibrated gesture thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchMetrics {
    /// Minimum horizontal displacement (px) before a drag counts as a swipe.
    pub slop: f32,
    /// Displacement (px) the list itself uses to claim a drag as a scroll.
    pub paging_slop: f32,
    /// Lower bound (px/s) of a decisive fling.
    pub min_fling_velocity: f32,
    /// Upper bound (px/s) of a decisive fling.
    pub max_fling_velocity: f32,
    /// Trailing window used for velocity estimation.
    pub velocity_horizon: Duration,
    /// Platform short-animation duration.
    pub short_animation: Duration,
}

impl Default for TouchMetrics {
    fn default() -> Self {
        Self {
            slop: 16.0,
            paging_slop: 32.0,
            min_fling_velocity: 100.0,
            max_fling_velocity: 8000.0,
            velocity_horizon: Duration::from_secs(1),
            short_animation: Duration::from_millis(200),
        }
    }
}

impl TouchMetrics {
    /// Reject metrics that cannot classify anything.
    pub fn validate(&self) -> Result<(), SwipeError> {
        let finite = [
            self.slop,
            self.paging_slop,
            self.min_fling_velocity,
            self.max_fling_velocity,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0);
        if !finite {
            return Err(SwipeError::InvalidMetrics {
                reason: "thresholds must be finite and non-negative",
            });
        }
        if self.min_fling_velocity > self.max_fling_velocity {
            return Err(SwipeError::InvalidMetrics {
                reason: "min fling velocity exceeds max fling velocity",
            });
        }
        if self.velocity_horizon.is_zero() {
            return Err(SwipeError::InvalidMetrics {
                reason: "velocity horizon must be non-zero",
            });
        }
        Ok(())
    }

    /// Whether a displacement is far enough to be intentional.
    #[inline]
    #[must_use]
    pub fn exceeds_slop(&self, displacement: f32) -> bool {
        displacement.abs() > self.slop
    }

    /// Whether absolute velocities describe a decisive horizontal fling.
    #[inline]
    #[must_use]
    pub fn is_fling(&self, vx_abs: f32, vy_abs: f32) -> bool {
        self.min_fling_velocity <= vx_abs && vx_abs <= self.max_fling_velocity && vy_abs < vx_abs
    }
}

/// One pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    x: f32,
    y: f32,
    time: Instant,
}

/// Accumulates pointer samples for a single touch session.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    samples: Vec<Sample>,
    horizon: Duration,
}

impl VelocityTracker {
    /// Create a tracker with the given trailing window.
    #[must_use]
    pub fn new(horizon: Duration) -> Self {
        Self {
            samples: Vec::with_capacity(16),
            horizon,
        }
    }

    /// Record a sample. Samples older than the horizon are dropped.
    pub fn add(&mut self, x: f32, y: f32, time: Instant) {
        self.samples.push(Sample { x, y, time });
        let horizon = self.horizon;
        // Keep the first in-horizon sample so the window edge stays anchored.
        let keep_from = self
            .samples
            .iter()
            .position(|s| time.saturating_duration_since(s.time) <= horizon)
            .unwrap_or(self.samples.len() - 1);
        if keep_from > 0 {
            self.samples.drain(..keep_from);
        }
    }

    /// Number of samples currently inside the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Signed `(vx, vy)` in pixels per second.
    #[must_use]
    pub fn velocity(&self) -> (f32, f32) {
        let (Some(first), Some(last)) = (self.samples.first(), self.samples.last()) else {
            return (0.0, 0.0);
        };
        let dt = last.time.saturating_duration_since(first.time).as_secs_f32();
        if self.samples.len() < 2 || dt <= 0.0 {
            return (0.0, 0.0);
        }
        ((last.x - first.x) / dt, (last.y - first.y) / dt)
    }

    /// Drop every sample.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
