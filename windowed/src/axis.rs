use core::cmp;

use crate::scroll::{Debounce, ScrollState};
use crate::{Align, ScrollDirection, SizePolicy, WindowRange};

/// One scroll axis: item count + size policy + viewport extent + scroll
/// state.
///
/// A list owns one of these; a grid owns two (rows and columns). Everything
/// here is policy-parameterized, which is what lets the list and grid
/// surfaces share their windowing math.
#[derive(Clone, Debug)]
pub(crate) struct AxisEngine {
    count: usize,
    policy: SizePolicy,
    viewport: u32,
    overscan: usize,
    state: ScrollState,
    debounce: Debounce,
    delay_ms: u64,
}

impl AxisEngine {
    pub(crate) fn new(
        count: usize,
        policy: SizePolicy,
        viewport: u32,
        overscan: usize,
        initial_offset: u64,
        delay_ms: u64,
    ) -> Self {
        Self {
            count,
            policy,
            viewport,
            overscan,
            state: ScrollState::new(initial_offset),
            debounce: Debounce::default(),
            delay_ms,
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn policy(&self) -> &SizePolicy {
        &self.policy
    }

    pub(crate) fn viewport(&self) -> u32 {
        self.viewport
    }

    pub(crate) fn overscan(&self) -> usize {
        self.overscan
    }

    pub(crate) fn state(&self) -> &ScrollState {
        &self.state
    }

    pub(crate) fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    pub(crate) fn set_policy(&mut self, policy: SizePolicy) {
        self.policy = policy;
    }

    pub(crate) fn set_viewport(&mut self, viewport: u32) {
        self.viewport = viewport;
    }

    pub(crate) fn set_overscan(&mut self, overscan: usize) {
        self.overscan = overscan;
    }

    pub(crate) fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    pub(crate) fn total_size(&self) -> u64 {
        self.policy.total_size(self.count)
    }

    pub(crate) fn item_offset(&self, index: usize) -> u64 {
        self.policy.offset_of(index, self.count)
    }

    pub(crate) fn item_size(&self, index: usize) -> u32 {
        self.policy.size_of(index, self.count)
    }

    /// First and last (inclusive) indices intersecting
    /// `[scroll_offset, scroll_offset + viewport)`. `(0, 0)` when the axis is
    /// empty.
    pub(crate) fn visible_range(&self, scroll_offset: u64) -> (usize, usize) {
        if self.count == 0 {
            return (0, 0);
        }
        let start = self.policy.index_for_offset(scroll_offset, self.count);
        let stop = self.stop_index_for(start, scroll_offset);
        (start, stop)
    }

    fn stop_index_for(&self, start: usize, scroll_offset: u64) -> usize {
        let last = self.count - 1;
        match &self.policy {
            SizePolicy::Fixed(size) => {
                if *size == 0 {
                    return last;
                }
                let item_offset = start as u64 * *size as u64;
                let span = (self.viewport as u64 + scroll_offset).saturating_sub(item_offset);
                let visible_count = span.div_ceil(*size as u64) as usize;
                cmp::min(last, start + visible_count.saturating_sub(1))
            }
            SizePolicy::Variable(_) => {
                let max_offset = scroll_offset.saturating_add(self.viewport as u64);
                let mut offset = self
                    .item_offset(start)
                    .saturating_add(self.item_size(start) as u64);
                let mut stop = start;
                while stop < last && offset < max_offset {
                    stop += 1;
                    offset = offset.saturating_add(self.item_size(stop) as u64);
                }
                stop
            }
        }
    }

    /// The overscanned render window at the current scroll state.
    ///
    /// A margin of one item always survives opposite the direction of travel
    /// so keyboard focus can step one element past the visible edge; the full
    /// overscan is only paid in the direction of travel.
    pub(crate) fn window(&self) -> WindowRange {
        if self.count == 0 {
            return WindowRange::default();
        }
        let (start, stop) = self.visible_range(self.state.offset);

        let idle = !self.state.is_scrolling;
        let backward = if idle || self.state.direction == ScrollDirection::Backward {
            cmp::max(1, self.overscan)
        } else {
            1
        };
        let forward = if idle || self.state.direction == ScrollDirection::Forward {
            cmp::max(1, self.overscan)
        } else {
            1
        };

        WindowRange {
            overscan_start: start.saturating_sub(backward),
            overscan_stop: cmp::min(self.count - 1, stop.saturating_add(forward)),
            visible_start: start,
            visible_stop: stop,
        }
    }

    /// Offset that satisfies `align` for the item at `index`.
    ///
    /// Pure: never touches scroll state. `scrollbar` is the thickness stolen
    /// from the viewport by a cross-axis scrollbar, charged against
    /// `End`-style targets so the item still ends up fully visible.
    /// `index` must already be clamped to `[0, count)`.
    pub(crate) fn offset_for_alignment(
        &self,
        index: usize,
        align: Align,
        current_offset: u64,
        scrollbar: u32,
    ) -> u64 {
        let view = self.viewport as u64;
        let item_offset = self.item_offset(index);
        let item_size = self.item_size(index) as u64;
        let last_item_offset = self.total_size().saturating_sub(view);
        let max_offset = cmp::min(last_item_offset, item_offset);
        let min_offset = item_offset
            .saturating_add(item_size)
            .saturating_add(scrollbar as u64)
            .saturating_sub(view);

        let align = match align {
            // A moderate jump scrolls minimally, a large jump centers the
            // target: degrade based on whether the current offset lies within
            // one viewport of the target band.
            Align::Smart => {
                if current_offset.saturating_add(view) >= min_offset
                    && current_offset <= max_offset.saturating_add(view)
                {
                    Align::Auto
                } else {
                    Align::Center
                }
            }
            other => other,
        };

        match align {
            Align::Start => max_offset,
            Align::End => min_offset,
            Align::Center => {
                // The midpoint of [min, max] doesn't hold near the edges:
                // snap rather than request an offset that would leave blank
                // leading/trailing space around a centered item.
                let middle = min_offset.saturating_add(max_offset).saturating_add(1) / 2;
                if middle < view.div_ceil(2) {
                    0
                } else if middle > last_item_offset.saturating_add(view / 2) {
                    last_item_offset
                } else {
                    middle
                }
            }
            Align::Auto | Align::Smart => {
                if current_offset >= min_offset && current_offset <= max_offset {
                    current_offset
                } else if current_offset < min_offset {
                    min_offset
                } else {
                    max_offset
                }
            }
        }
    }

    /// Applies a canonicalized user-driven offset. Returns whether state
    /// changed.
    pub(crate) fn apply_user_offset(&mut self, offset: u64, now_ms: u64) -> bool {
        if offset == self.state.offset {
            return false;
        }
        self.state.direction = self.state.direction_to(offset);
        self.state.offset = offset;
        self.state.is_scrolling = true;
        self.state.update_was_requested = false;
        self.debounce.arm(now_ms, self.delay_ms);
        true
    }

    /// Applies a programmatic offset. Returns whether state changed.
    ///
    /// Does not force the is-scrolling flag: a programmatic jump is not user
    /// scrolling, but it still re-arms the debounce so a pending reset keeps
    /// counting from the most recent update.
    pub(crate) fn apply_requested_offset(&mut self, offset: u64, now_ms: u64) -> bool {
        if offset == self.state.offset {
            return false;
        }
        self.state.direction = self.state.direction_to(offset);
        self.state.offset = offset;
        self.state.update_was_requested = true;
        self.debounce.arm(now_ms, self.delay_ms);
        true
    }

    /// Debounce pump; returns `true` when the is-scrolling flag was cleared
    /// (the caller drops its layout cache in response).
    pub(crate) fn tick(&mut self, now_ms: u64) -> bool {
        if !self.debounce.fire(now_ms) {
            return false;
        }
        self.state.is_scrolling = false;
        true
    }
}
