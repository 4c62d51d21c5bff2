use alloc::string::String;

use crate::{ScrollBehavior, ScrollToOptions};

pub const DEFAULT_CONTROL_ID: &str = "scroll-top";
pub const DEFAULT_ACTIVE_CLASS: &str = "active";
pub const DEFAULT_THRESHOLD: f64 = 100.0;

/// Configuration for [`crate::ScrollTopControl`].
///
/// With `feature = "serde"`, missing fields fall back to their defaults when deserializing, so
/// a partial config such as `{ "threshold": 300 }` is valid. Offsets are normalized the same way
/// the builder normalizes them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollTopOptions {
    /// Identifier of the control element, resolved once at startup.
    pub control_id: String,
    /// Class toggled on the control while it is active.
    pub active_class: String,
    /// The control is active iff the scroll offset is strictly greater than this.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_offset"))]
    pub threshold: f64,
    /// Offset the viewport scrolls to on activation.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_offset"))]
    pub target_top: f64,
    pub behavior: ScrollBehavior,
}

impl Default for ScrollTopOptions {
    fn default() -> Self {
        Self {
            control_id: String::from(DEFAULT_CONTROL_ID),
            active_class: String::from(DEFAULT_ACTIVE_CLASS),
            threshold: DEFAULT_THRESHOLD,
            target_top: 0.0,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

impl ScrollTopOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_control_id(mut self, control_id: impl Into<String>) -> Self {
        self.control_id = control_id.into();
        self
    }

    pub fn with_active_class(mut self, active_class: impl Into<String>) -> Self {
        self.active_class = active_class.into();
        self
    }

    /// Sets the activation threshold. Negative and NaN values are normalized to `0.0`.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = normalize_offset(threshold);
        self
    }

    /// Sets the offset scrolled to on activation. Negative and NaN values are normalized to `0.0`.
    pub fn with_target_top(mut self, target_top: f64) -> Self {
        self.target_top = normalize_offset(target_top);
        self
    }

    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// The command issued to the viewport on activation.
    pub fn scroll_command(&self) -> ScrollToOptions {
        ScrollToOptions {
            top: self.target_top,
            behavior: self.behavior,
        }
    }
}

fn normalize_offset(v: f64) -> f64 {
    // `NaN > 0.0` is false, so NaN lands on 0.0 as well.
    if v > 0.0 { v } else { 0.0 }
}

#[cfg(feature = "serde")]
fn deserialize_offset<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    <f64 as serde::Deserialize>::deserialize(deserializer).map(normalize_offset)
}
