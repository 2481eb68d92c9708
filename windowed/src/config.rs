use alloc::sync::Arc;
use core::fmt;

use crate::scroll::IS_SCROLLING_RESET_DELAY_MS;
use crate::{
    Direction, GridScrollChanged, GridWindowRange, Layout, RtlOffsetMode, ScrollChanged,
    SizePolicy, WindowRange,
};

/// Fired after a change batch with the new render window. De-duplicated:
/// identical consecutive payloads fire only once.
pub type ItemsRenderedCallback = Arc<dyn Fn(WindowRange) + Send + Sync>;

/// Fired after a change batch with the new scroll state. De-duplicated like
/// [`ItemsRenderedCallback`].
pub type ScrollChangedCallback = Arc<dyn Fn(ScrollChanged) + Send + Sync>;

pub type GridItemsRenderedCallback = Arc<dyn Fn(GridWindowRange) + Send + Sync>;

pub type GridScrollChangedCallback = Arc<dyn Fn(GridScrollChanged) + Send + Sync>;

/// Configuration for [`crate::ListWindow`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
#[derive(Clone)]
pub struct ListOptions {
    pub count: usize,
    pub item_size: SizePolicy,
    /// Which axis scrolls. The cross axis is filled, not windowed.
    pub layout: Layout,
    pub direction: Direction,
    /// Only consulted for horizontal right-to-left lists.
    pub rtl_offset_mode: RtlOffsetMode,
    pub overscan: usize,
    /// Main-axis viewport extent.
    pub viewport: u32,
    pub initial_offset: u64,
    pub is_scrolling_reset_delay_ms: u64,
    /// Cross-axis scrollbar thickness, charged when solving `End`-style
    /// alignments. Hosts set 0 when no cross scrollbar is present.
    pub scrollbar_size: u32,
    pub on_items_rendered: Option<ItemsRenderedCallback>,
    pub on_scroll_changed: Option<ScrollChangedCallback>,
}

impl ListOptions {
    pub fn new(count: usize, item_size: SizePolicy) -> Self {
        Self {
            count,
            item_size,
            layout: Layout::Vertical,
            direction: Direction::Ltr,
            rtl_offset_mode: RtlOffsetMode::Negative,
            overscan: 2,
            viewport: 0,
            initial_offset: 0,
            is_scrolling_reset_delay_ms: IS_SCROLLING_RESET_DELAY_MS,
            scrollbar_size: 0,
            on_items_rendered: None,
            on_scroll_changed: None,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_rtl_offset_mode(mut self, rtl_offset_mode: RtlOffsetMode) -> Self {
        self.rtl_offset_mode = rtl_offset_mode;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_viewport(mut self, viewport: u32) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: u64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_scrollbar_size(mut self, scrollbar_size: u32) -> Self {
        self.scrollbar_size = scrollbar_size;
        self
    }

    pub fn with_on_items_rendered(
        mut self,
        on_items_rendered: Option<impl Fn(WindowRange) + Send + Sync + 'static>,
    ) -> Self {
        self.on_items_rendered = on_items_rendered.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll_changed(
        mut self,
        on_scroll_changed: Option<impl Fn(ScrollChanged) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll_changed = on_scroll_changed.map(|f| Arc::new(f) as _);
        self
    }
}

impl fmt::Debug for ListOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListOptions")
            .field("count", &self.count)
            .field("item_size", &self.item_size)
            .field("layout", &self.layout)
            .field("direction", &self.direction)
            .field("rtl_offset_mode", &self.rtl_offset_mode)
            .field("overscan", &self.overscan)
            .field("viewport", &self.viewport)
            .field("initial_offset", &self.initial_offset)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .field("scrollbar_size", &self.scrollbar_size)
            .finish_non_exhaustive()
    }
}

/// Configuration for [`crate::GridWindow`].
///
/// Rows and columns are independent axes with their own counts, policies,
/// and overscan; they share the reading direction and debounce delay.
#[derive(Clone)]
pub struct GridOptions {
    pub row_count: usize,
    pub column_count: usize,
    pub row_height: SizePolicy,
    pub column_width: SizePolicy,
    pub direction: Direction,
    pub rtl_offset_mode: RtlOffsetMode,
    pub overscan_row_count: usize,
    pub overscan_column_count: usize,
    pub width: u32,
    pub height: u32,
    pub initial_scroll_left: u64,
    pub initial_scroll_top: u64,
    pub is_scrolling_reset_delay_ms: u64,
    /// Scrollbar thickness; charged per axis only when the perpendicular
    /// axis actually overflows.
    pub scrollbar_size: u32,
    pub on_items_rendered: Option<GridItemsRenderedCallback>,
    pub on_scroll_changed: Option<GridScrollChangedCallback>,
}

impl GridOptions {
    pub fn new(
        row_count: usize,
        column_count: usize,
        row_height: SizePolicy,
        column_width: SizePolicy,
    ) -> Self {
        Self {
            row_count,
            column_count,
            row_height,
            column_width,
            direction: Direction::Ltr,
            rtl_offset_mode: RtlOffsetMode::Negative,
            overscan_row_count: 2,
            overscan_column_count: 2,
            width: 0,
            height: 0,
            initial_scroll_left: 0,
            initial_scroll_top: 0,
            is_scrolling_reset_delay_ms: IS_SCROLLING_RESET_DELAY_MS,
            scrollbar_size: 0,
            on_items_rendered: None,
            on_scroll_changed: None,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_rtl_offset_mode(mut self, rtl_offset_mode: RtlOffsetMode) -> Self {
        self.rtl_offset_mode = rtl_offset_mode;
        self
    }

    pub fn with_overscan(mut self, rows: usize, columns: usize) -> Self {
        self.overscan_row_count = rows;
        self.overscan_column_count = columns;
        self
    }

    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_initial_scroll(mut self, scroll_left: u64, scroll_top: u64) -> Self {
        self.initial_scroll_left = scroll_left;
        self.initial_scroll_top = scroll_top;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_scrollbar_size(mut self, scrollbar_size: u32) -> Self {
        self.scrollbar_size = scrollbar_size;
        self
    }

    pub fn with_on_items_rendered(
        mut self,
        on_items_rendered: Option<impl Fn(GridWindowRange) + Send + Sync + 'static>,
    ) -> Self {
        self.on_items_rendered = on_items_rendered.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll_changed(
        mut self,
        on_scroll_changed: Option<impl Fn(GridScrollChanged) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll_changed = on_scroll_changed.map(|f| Arc::new(f) as _);
        self
    }
}

impl fmt::Debug for GridOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridOptions")
            .field("row_count", &self.row_count)
            .field("column_count", &self.column_count)
            .field("row_height", &self.row_height)
            .field("column_width", &self.column_width)
            .field("direction", &self.direction)
            .field("rtl_offset_mode", &self.rtl_offset_mode)
            .field("overscan_row_count", &self.overscan_row_count)
            .field("overscan_column_count", &self.overscan_column_count)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("initial_scroll_left", &self.initial_scroll_left)
            .field("initial_scroll_top", &self.initial_scroll_top)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .field("scrollbar_size", &self.scrollbar_size)
            .finish_non_exhaustive()
    }
}
