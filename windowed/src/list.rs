use core::cell::{Cell, RefCell};
use core::fmt;

use crate::axis::AxisEngine;
use crate::cache::LayoutCache;
use crate::config::{ItemsRenderedCallback, ScrollChangedCallback};
use crate::policy::PolicyFingerprint;
use crate::scroll::{ScrollState, canonical_offset, clamp_offset};
use crate::{
    Align, Direction, Extent, ItemStyle, Layout, ListOptions, RtlOffsetMode, ScrollChanged,
    ScrollDirection, ScrollEvent, SizePolicy, WindowRange,
};

type ListStamp = (PolicyFingerprint, Layout, Direction);

/// A windowing engine for one-dimensional collections.
///
/// This type is headless: it never creates or measures UI nodes. The host
/// feeds it viewport geometry and raw scroll events, renders exactly the
/// indices in [`ListWindow::window`], and places each one with
/// [`ListWindow::style_for`]. Programmatic scrolling goes through
/// [`ListWindow::scroll_to`] / [`ListWindow::scroll_to_item`]; the resulting
/// notification carries `update_was_requested = true` so the host knows to
/// write the offset back to its real scroll container.
#[derive(Clone)]
pub struct ListWindow {
    axis: AxisEngine,
    layout: Layout,
    direction: Direction,
    rtl_offset_mode: RtlOffsetMode,
    scrollbar_size: u32,
    on_items_rendered: Option<ItemsRenderedCallback>,
    on_scroll_changed: Option<ScrollChangedCallback>,
    cache: RefCell<LayoutCache<usize, ListStamp>>,
    last_items_rendered: Cell<Option<WindowRange>>,
    last_scroll_changed: Cell<Option<ScrollChanged>>,
}

impl ListWindow {
    pub fn new(options: ListOptions) -> Self {
        wdebug!(
            count = options.count,
            overscan = options.overscan,
            viewport = options.viewport,
            "ListWindow::new"
        );
        let list = Self {
            axis: AxisEngine::new(
                options.count,
                options.item_size,
                options.viewport,
                options.overscan,
                options.initial_offset,
                options.is_scrolling_reset_delay_ms,
            ),
            layout: options.layout,
            direction: options.direction,
            rtl_offset_mode: options.rtl_offset_mode,
            scrollbar_size: options.scrollbar_size,
            on_items_rendered: options.on_items_rendered,
            on_scroll_changed: options.on_scroll_changed,
            cache: RefCell::new(LayoutCache::new()),
            last_items_rendered: Cell::new(None),
            last_scroll_changed: Cell::new(None),
        };
        list.notify();
        list
    }

    pub fn count(&self) -> usize {
        self.axis.count()
    }

    pub fn viewport(&self) -> u32 {
        self.axis.viewport()
    }

    pub fn overscan(&self) -> usize {
        self.axis.overscan()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn rtl_offset_mode(&self) -> RtlOffsetMode {
        self.rtl_offset_mode
    }

    pub fn item_size_policy(&self) -> &SizePolicy {
        self.axis.policy()
    }

    /// Total extent of the content along the scrolled axis (the host sizes
    /// its inner spacer element with this).
    pub fn total_size(&self) -> u64 {
        self.axis.total_size()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.axis.state().offset
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.axis.state().direction
    }

    pub fn is_scrolling(&self) -> bool {
        self.axis.state().is_scrolling
    }

    pub fn scroll_state(&self) -> ScrollState {
        *self.axis.state()
    }

    /// The render window at the current scroll state.
    pub fn window(&self) -> WindowRange {
        self.axis.window()
    }

    /// First and last (inclusive) fully-or-partially visible indices, no
    /// overscan.
    pub fn visible_range(&self) -> (usize, usize) {
        self.axis.visible_range(self.axis.state().offset)
    }

    /// Placement for the item at `index`, memoized until a size policy,
    /// layout, or direction change shifts offsets.
    ///
    /// Panics when `index` is outside `[0, count)`.
    pub fn style_for(&self, index: usize) -> ItemStyle {
        let stamp = (self.axis.policy().fingerprint(), self.layout, self.direction);
        self.cache.borrow_mut().style_for(stamp, index, || {
            let offset = self.axis.item_offset(index);
            let size = self.axis.item_size(index);
            let horizontal = self.layout.is_horizontal();
            let inline_offset = if horizontal { offset } else { 0 };
            ItemStyle {
                left: (self.direction == Direction::Ltr).then_some(inline_offset),
                right: (self.direction == Direction::Rtl).then_some(inline_offset),
                top: if horizontal { 0 } else { offset },
                width: if horizontal {
                    Extent::Px(size)
                } else {
                    Extent::Fill
                },
                height: if horizontal {
                    Extent::Fill
                } else {
                    Extent::Px(size)
                },
            }
        })
    }

    /// Applies a raw user-driven scroll event.
    ///
    /// Horizontal right-to-left lists canonicalize the platform's offset
    /// convention first; every event clamps elastic overscroll. An event
    /// that resolves to the current offset is a no-op.
    pub fn on_scroll(&mut self, event: ScrollEvent, now_ms: u64) {
        wtrace!(offset = event.offset, now_ms, "ListWindow::on_scroll");
        let canonical = if self.layout.is_horizontal() && self.direction == Direction::Rtl {
            canonical_offset(
                event.offset,
                self.rtl_offset_mode,
                event.content_extent,
                event.viewport_extent,
            )
        } else {
            clamp_offset(event.offset, event.content_extent, event.viewport_extent)
        };
        if self.axis.apply_user_offset(canonical, now_ms) {
            self.notify();
        }
    }

    /// Programmatically scrolls to `offset`.
    ///
    /// No upper clamp: the caller may not know the content size yet, and the
    /// host's scroll container clamps on write-back anyway.
    pub fn scroll_to(&mut self, offset: u64, now_ms: u64) {
        wtrace!(offset, now_ms, "ListWindow::scroll_to");
        if self.axis.apply_requested_offset(offset, now_ms) {
            self.notify();
        }
    }

    /// Programmatically scrolls so the item at `index` satisfies `align`.
    ///
    /// Out-of-range indices are clamped; a no-op on empty lists. Returns the
    /// offset that was applied.
    pub fn scroll_to_item(&mut self, index: usize, align: Align, now_ms: u64) -> u64 {
        if self.axis.count() == 0 {
            return self.axis.state().offset;
        }
        let index = index.min(self.axis.count() - 1);
        let target = self.axis.offset_for_alignment(
            index,
            align,
            self.axis.state().offset,
            self.scrollbar_size,
        );
        wtrace!(index, ?align, offset = target, "ListWindow::scroll_to_item");
        self.scroll_to(target, now_ms);
        target
    }

    /// Debounce pump. Call once per frame (or timer tick) with the current
    /// time; returns `true` when the is-scrolling flag was cleared.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.axis.tick(now_ms) {
            return false;
        }
        wtrace!(now_ms, "ListWindow::tick is_scrolling reset");
        self.cache.borrow_mut().clear();
        self.notify();
        true
    }

    pub fn set_count(&mut self, count: usize) {
        if self.axis.count() == count {
            return;
        }
        self.axis.set_count(count);
        self.notify();
    }

    pub fn set_item_size(&mut self, item_size: SizePolicy) {
        self.axis.set_policy(item_size);
        self.notify();
    }

    pub fn set_viewport(&mut self, viewport: u32) {
        if self.axis.viewport() == viewport {
            return;
        }
        self.axis.set_viewport(viewport);
        self.notify();
    }

    pub fn set_layout(&mut self, layout: Layout) {
        if self.layout == layout {
            return;
        }
        self.layout = layout;
        self.notify();
    }

    pub fn set_direction(&mut self, direction: Direction) {
        if self.direction == direction {
            return;
        }
        self.direction = direction;
        self.notify();
    }

    pub fn set_rtl_offset_mode(&mut self, rtl_offset_mode: RtlOffsetMode) {
        self.rtl_offset_mode = rtl_offset_mode;
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        if self.axis.overscan() == overscan {
            return;
        }
        self.axis.set_overscan(overscan);
        self.notify();
    }

    pub fn set_scrollbar_size(&mut self, scrollbar_size: u32) {
        self.scrollbar_size = scrollbar_size;
    }

    pub fn set_is_scrolling_reset_delay_ms(&mut self, delay_ms: u64) {
        self.axis.set_delay_ms(delay_ms);
    }

    /// Invalidates a variable size policy at and after `index` and drops the
    /// cached styles. Call after the size function's answers changed.
    pub fn reset_after_index(&mut self, index: usize) {
        wdebug!(index, "ListWindow::reset_after_index");
        self.axis.policy().reset_from(index);
        self.cache.borrow_mut().clear();
        self.notify();
    }

    pub fn set_on_items_rendered(
        &mut self,
        on_items_rendered: Option<impl Fn(WindowRange) + Send + Sync + 'static>,
    ) {
        self.on_items_rendered = on_items_rendered.map(|f| alloc::sync::Arc::new(f) as _);
        self.notify();
    }

    pub fn set_on_scroll_changed(
        &mut self,
        on_scroll_changed: Option<impl Fn(ScrollChanged) + Send + Sync + 'static>,
    ) {
        self.on_scroll_changed = on_scroll_changed.map(|f| alloc::sync::Arc::new(f) as _);
        self.notify();
    }

    /// Fires the host notifications for the current state, skipping payloads
    /// identical to the previously fired ones.
    fn notify(&self) {
        if let Some(cb) = &self.on_items_rendered {
            if self.axis.count() > 0 {
                let window = self.axis.window();
                if self.last_items_rendered.get() != Some(window) {
                    self.last_items_rendered.set(Some(window));
                    cb(window);
                }
            }
        }
        if let Some(cb) = &self.on_scroll_changed {
            let state = self.axis.state();
            let payload = ScrollChanged {
                offset: state.offset,
                direction: state.direction,
                update_was_requested: state.update_was_requested,
            };
            if self.last_scroll_changed.get() != Some(payload) {
                self.last_scroll_changed.set(Some(payload));
                cb(payload);
            }
        }
    }
}

impl fmt::Debug for ListWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListWindow")
            .field("count", &self.axis.count())
            .field("item_size", self.axis.policy())
            .field("layout", &self.layout)
            .field("direction", &self.direction)
            .field("viewport", &self.axis.viewport())
            .field("overscan", &self.axis.overscan())
            .field("scroll", self.axis.state())
            .finish_non_exhaustive()
    }
}
