//! Host adapters for the `scroll-top` crate.
//!
//! The `scroll-top` crate is host-agnostic and only defines the control and the capabilities it
//! needs. This crate provides hosts that implement those capabilities:
//!
//! - [`sim`]: an in-memory page with an explicit clock, for tests and native demos
//! - `web` (feature `web`, `wasm32` only): the live browser DOM via `web-sys`
//! - [`Tween`]/[`Easing`]: the interpolation used for simulated smooth scrolling
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod sim;
mod tween;

#[cfg(feature = "web")]
mod error;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;


#[cfg(feature = "web")]
pub use error::WebError;
pub use tween::{Easing, Tween};
