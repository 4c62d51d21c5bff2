//! A headless "scroll to top" control.
//!
//! The control becomes active once the page is scrolled past a threshold and, when activated,
//! smoothly scrolls the page back to its origin.
//!
//! This crate is host-agnostic. A host (browser DOM, simulated page, GUI toolkit) is expected to
//! provide:
//! - element lookup and page-level event registration ([`Document`])
//! - a clickable control whose class list carries the active marker ([`ControlElement`])
//! - the current scroll offset and a scroll-to command ([`Viewport`])
//!
//! For a DOM backend and an in-memory simulated page, see the `scroll-top-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod control;
mod host;
mod options;
mod types;

#[cfg(test)]
mod tests;

pub use control::{ScrollTopControl, install};
pub use host::{
    ActivationEvent, ActivationHandler, ControlElement, Document, PageEventHandler, Viewport,
};
pub use options::{DEFAULT_ACTIVE_CLASS, DEFAULT_CONTROL_ID, DEFAULT_THRESHOLD, ScrollTopOptions};
pub use types::{PageEvent, ScrollBehavior, ScrollToOptions, Visibility};
