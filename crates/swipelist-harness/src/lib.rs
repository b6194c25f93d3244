#![forbid(unsafe_code)]

//! Deterministic collaborators for exercising `swipelist-core`.
//!
//! - [`FakeList`]: fixed-geometry list with predictable view ids.
//! - [`RecordingAnimator`]: records every request and advances only on demand.
//! - [`RecordingListener`]: records every callback.
//! - [`Rig`]: a controller wired to all three plus a virtual clock.

pub mod animator;
pub mod list;
pub mod listener;
pub mod logging;
pub mod rig;

pub use animator::{RecordingAnimator, Started, ViewProps, ease_out};
pub use list::{BACK, FRONT, FakeList};
pub use listener::{Notification, RecordingListener};
pub use logging::init_test_logging;
pub use rig::{Controller, Rig, ROW_HEIGHT, START_X, STEP, WIDTH, test_config, test_metrics};
