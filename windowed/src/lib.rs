//! A headless windowing engine for very large lists and grids.
//!
//! Rendering a million-row collection is cheap when only the handful of rows
//! intersecting the viewport actually exist. This crate owns the arithmetic
//! that makes that work: mapping a scroll offset to a visible index range
//! (plus a direction-aware overscan margin), solving scroll-to-item
//! alignment, tracking per-axis scroll state with a debounced is-scrolling
//! flag, and memoizing per-item placement.
//!
//! It is UI-agnostic and does no measurement of its own. A host layer is
//! expected to provide:
//! - viewport extents (width/height)
//! - raw scroll events (offset + scrollable/visible extents)
//! - item counts and size policies (fixed scalar or per-index function)
//!
//! and to render exactly the indices in [`ListWindow::window`] /
//! [`GridWindow::window`], placed with `style_for`. For host-integration
//! helpers (event plumbing, write-back of programmatic offsets), see the
//! `windowed-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod axis;
mod cache;
mod config;
mod grid;
mod list;
mod policy;
mod scroll;
mod types;

#[cfg(test)]
mod tests;

pub use config::{
    GridItemsRenderedCallback, GridOptions, GridScrollChangedCallback, ItemsRenderedCallback,
    ListOptions, ScrollChangedCallback,
};
pub use grid::GridWindow;
pub use list::ListWindow;
pub use policy::{DEFAULT_ESTIMATED_ITEM_SIZE, SizeFn, SizePolicy, VariableSize};
pub use scroll::{IS_SCROLLING_RESET_DELAY_MS, ScrollState, canonical_offset, clamp_offset};
pub use types::{
    Align, Direction, Extent, GridScrollChanged, GridScrollEvent, GridWindowRange, ItemStyle,
    Layout, RtlOffsetMode, ScrollChanged, ScrollDirection, ScrollEvent, WindowRange,
};
