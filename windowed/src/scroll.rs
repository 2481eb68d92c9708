use crate::{RtlOffsetMode, ScrollDirection};

/// Default debounce delay before the is-scrolling flag is cleared, in ms.
pub const IS_SCROLLING_RESET_DELAY_MS: u64 = 150;

/// Per-axis scroll state.
///
/// Mutated only by user-driven scroll events or programmatic scroll requests;
/// `update_was_requested` records which of the two produced the current
/// offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: u64,
    pub direction: ScrollDirection,
    pub is_scrolling: bool,
    pub update_was_requested: bool,
}

impl ScrollState {
    pub(crate) fn new(initial_offset: u64) -> Self {
        Self {
            offset: initial_offset,
            direction: ScrollDirection::Forward,
            is_scrolling: false,
            update_was_requested: false,
        }
    }

    /// Direction of a move from the current offset to `offset`; unchanged
    /// when the delta is zero.
    pub(crate) fn direction_to(&self, offset: u64) -> ScrollDirection {
        use core::cmp::Ordering;
        match offset.cmp(&self.offset) {
            Ordering::Greater => ScrollDirection::Forward,
            Ordering::Less => ScrollDirection::Backward,
            Ordering::Equal => self.direction,
        }
    }
}

/// Clamps a raw offset into `[0, content_extent - viewport_extent]`.
///
/// Platforms with elastic overscroll report offsets past both ends; those are
/// absorbed here rather than propagated into range math.
pub fn clamp_offset(raw: i64, content_extent: u64, viewport_extent: u32) -> u64 {
    let max = content_extent.saturating_sub(viewport_extent as u64);
    if raw <= 0 { 0 } else { (raw as u64).min(max) }
}

/// Canonicalizes a raw horizontal offset reported under a right-to-left
/// layout into a non-negative offset measured from the content start.
pub fn canonical_offset(
    raw: i64,
    mode: RtlOffsetMode,
    content_extent: u64,
    viewport_extent: u32,
) -> u64 {
    let logical = match mode {
        RtlOffsetMode::Negative => -(raw as i128),
        RtlOffsetMode::PositiveAscending => raw as i128,
        RtlOffsetMode::PositiveDescending => {
            content_extent as i128 - viewport_extent as i128 - raw as i128
        }
    };
    let max = content_extent.saturating_sub(viewport_extent as u64);
    logical.clamp(0, max as i128) as u64
}

/// The single live deadline for clearing the is-scrolling flag.
///
/// Time is injected: arming replaces any previous deadline (the
/// cancel-then-rearm of a timer, collapsed into one value write), and
/// dropping the owner cancels implicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Debounce {
    deadline_ms: Option<u64>,
}

impl Debounce {
    pub(crate) fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(delay_ms));
    }

    /// Consumes the deadline when it has passed.
    pub(crate) fn fire(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
