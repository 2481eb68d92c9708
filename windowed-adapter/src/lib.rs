//! Host-integration utilities for the `windowed` crate.
//!
//! The `windowed` crate is UI-agnostic and works entirely in canonical
//! offsets. This crate provides the small, framework-neutral pieces a real
//! scroll container needs on top of that:
//!
//! - Controllers that forward raw scroll events, pump the is-scrolling
//!   debounce, and hand the host the pending programmatic offset it must
//!   write back to its viewport (`update_was_requested` semantics)
//! - Conversion of canonical offsets back into each platform's
//!   right-to-left scroll convention
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod physical;

#[cfg(test)]
mod tests;

pub use controller::{GridController, GridScrollTarget, ListController};
pub use physical::physical_inline_offset;
