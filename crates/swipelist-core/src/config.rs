#![forbid(unsafe_code)]

//! Swipe configuration surface.
//!
//! [`SwipeConfig`] is applied once when the controller is built and can be
//! changed afterwards through the controller's setters. With the `config`
//! feature it can also be loaded from TOML or JSON:
//!
//! ```toml
//! mode = "left-only"
//! action_left = "dismiss"
//! offset_left = 48.0
//! animation_time_ms = 250
//!
//! [surfaces]
//! front = 1
//! back = 2
//! ```
//!
//! # Defaults
//!
//! Both directions reveal, offsets are zero, the animation duration falls
//! back to the device short-animation time, long press opens a row and list
//! movement closes open rows.

use std::time::Duration;

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::error::SwipeError;

// ---------------------------------------------------------------------------
// Modes and actions
// ---------------------------------------------------------------------------

/// Which drag directions may open a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "kebab-case"))]
pub enum SwipeMode {
    /// Swiping is disabled; every drag is suppressed.
    None,
    /// Rows open in either direction.
    #[default]
    Both,
    /// Rows open only by dragging left.
    LeftOnly,
    /// Rows open only by dragging right.
    RightOnly,
}

/// What a committed swipe does to its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "kebab-case"))]
pub enum SwipeAction {
    /// Slide the front surface aside to expose the back surface.
    #[default]
    Reveal,
    /// Slide the row out, fade it and collapse it out of the list.
    Dismiss,
    /// Toggle the row's checked flag and spring back.
    Check,
    /// No action selected (no swipe committed yet).
    None,
}

// ---------------------------------------------------------------------------
// Surfaces
// ---------------------------------------------------------------------------

/// Identifier the host uses to find a surface inside a row view.
///
/// Zero is reserved to mean "not configured".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(transparent))]
pub struct SurfaceId(pub u32);

impl SurfaceId {
    /// Whether the identifier was configured.
    #[inline]
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 != 0
    }
}

/// Identifiers of the swipeable front surface and the revealed back surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
pub struct SurfaceIds {
    pub front: SurfaceId,
    pub back: SurfaceId,
}

impl SurfaceIds {
    #[must_use]
    pub const fn new(front: u32, back: u32) -> Self {
        Self {
            front: SurfaceId(front),
            back: SurfaceId(back),
        }
    }

    /// Both surfaces must be configured before a controller can exist.
    pub fn validate(&self) -> Result<(), SwipeError> {
        if !self.front.is_set() {
            return Err(SwipeError::MissingSurface { which: "front" });
        }
        if !self.back.is_set() {
            return Err(SwipeError::MissingSurface { which: "back" });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SwipeConfig
// ---------------------------------------------------------------------------

/// Per-list swipe behavior.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct SwipeConfig {
    /// Directions that may open a row.
    pub mode: SwipeMode,
    /// Action for a leftward swipe on a closed row.
    pub action_left: SwipeAction,
    /// Action for a rightward swipe on a closed row.
    pub action_right: SwipeAction,
    /// How much of the row stays visible when it is open to the left.
    pub offset_left: f32,
    /// How much of the row stays visible when it is open to the right.
    pub offset_right: f32,
    /// Settle duration; `None` uses the device short-animation time.
    #[cfg_attr(
        feature = "config",
        serde(rename = "animation_time_ms", with = "duration_ms")
    )]
    pub animation_time: Option<Duration>,
    /// Long press on a closed row opens it.
    pub open_on_long_press: bool,
    /// Start of a touch scroll closes every visible open row.
    pub close_all_on_list_move: bool,
    /// Surface identifiers (both required).
    pub surfaces: SurfaceIds,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            mode: SwipeMode::Both,
            action_left: SwipeAction::Reveal,
            action_right: SwipeAction::Reveal,
            offset_left: 0.0,
            offset_right: 0.0,
            animation_time: None,
            open_on_long_press: true,
            close_all_on_list_move: true,
            surfaces: SurfaceIds::default(),
        }
    }
}

impl SwipeConfig {
    /// Default configuration with the given surface identifiers.
    #[must_use]
    pub fn with_surfaces(front: u32, back: u32) -> Self {
        Self {
            surfaces: SurfaceIds::new(front, back),
            ..Self::default()
        }
    }

    /// Configured action for a swipe in the given direction.
    #[inline]
    #[must_use]
    pub fn action_for(&self, toward_right: bool) -> SwipeAction {
        if toward_right {
            self.action_right
        } else {
            self.action_left
        }
    }

    /// Resolve the settle duration against the device default.
    ///
    /// A zero duration counts as unset.
    #[must_use]
    pub fn resolved_animation_time(&self, short_animation: Duration) -> Duration {
        match self.animation_time {
            Some(d) if !d.is_zero() => d,
            _ => short_animation,
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}

/// Errors from loading a [`SwipeConfig`].
#[cfg(feature = "config")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read swipe config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid swipe config TOML: {0}")]
    Toml(#[source] toml::de::Error),
    #[error("invalid swipe config JSON: {0}")]
    Json(#[source] serde_json::Error),
}

#[cfg(feature = "config")]
mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => s.serialize_some(&(d.as_millis() as u64)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(d)?.map(Duration::from_millis))
    }
}
