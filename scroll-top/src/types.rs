/// Page-level notifications the control listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageEvent {
    /// The page finished loading (DOM `load` on the window).
    Load,
    /// The document scrolled (DOM `scroll`).
    Scroll,
}

impl PageEvent {
    /// The DOM event name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Scroll => "scroll",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
    Auto,
}

impl ScrollBehavior {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
            Self::Instant => "instant",
            Self::Auto => "auto",
        }
    }

    pub fn is_animated(self) -> bool {
        matches!(self, Self::Smooth)
    }
}

/// A scroll command handed to the [`crate::Viewport`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToOptions {
    /// Target vertical offset, in the host's scroll units.
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// The visual state of the control.
///
/// This is a projection of the scroll offset; the authoritative copy lives on the element
/// itself (as a class marker), never inside the control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    Active,
    Inactive,
}

impl Visibility {
    /// `Active` iff `offset` is strictly greater than `threshold`.
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}
