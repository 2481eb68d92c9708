use core::cell::{Cell, RefCell};
use core::fmt;

use crate::axis::AxisEngine;
use crate::cache::LayoutCache;
use crate::config::{GridItemsRenderedCallback, GridScrollChangedCallback};
use crate::policy::PolicyFingerprint;
use crate::scroll::{canonical_offset, clamp_offset};
use crate::{
    Align, Direction, Extent, GridOptions, GridScrollChanged, GridScrollEvent, GridWindowRange,
    ItemStyle, RtlOffsetMode, ScrollDirection, SizePolicy,
};

type GridStamp = (PolicyFingerprint, PolicyFingerprint, Direction);

/// A windowing engine for two-dimensional collections.
///
/// Rows and columns are fully independent axes, each with its own count,
/// size policy, overscan, and scroll state, composed over the same per-axis
/// machinery as [`crate::ListWindow`]. One raw scroll event updates both
/// axes at once; only the horizontal offset is subject to right-to-left
/// normalization.
#[derive(Clone)]
pub struct GridWindow {
    rows: AxisEngine,
    columns: AxisEngine,
    direction: Direction,
    rtl_offset_mode: RtlOffsetMode,
    scrollbar_size: u32,
    /// Whether the most recent state-changing update was programmatic.
    update_was_requested: bool,
    on_items_rendered: Option<GridItemsRenderedCallback>,
    on_scroll_changed: Option<GridScrollChangedCallback>,
    cache: RefCell<LayoutCache<(usize, usize), GridStamp>>,
    last_items_rendered: Cell<Option<GridWindowRange>>,
    last_scroll_changed: Cell<Option<GridScrollChanged>>,
}

impl GridWindow {
    pub fn new(options: GridOptions) -> Self {
        wdebug!(
            row_count = options.row_count,
            column_count = options.column_count,
            width = options.width,
            height = options.height,
            "GridWindow::new"
        );
        let grid = Self {
            rows: AxisEngine::new(
                options.row_count,
                options.row_height,
                options.height,
                options.overscan_row_count,
                options.initial_scroll_top,
                options.is_scrolling_reset_delay_ms,
            ),
            columns: AxisEngine::new(
                options.column_count,
                options.column_width,
                options.width,
                options.overscan_column_count,
                options.initial_scroll_left,
                options.is_scrolling_reset_delay_ms,
            ),
            direction: options.direction,
            rtl_offset_mode: options.rtl_offset_mode,
            scrollbar_size: options.scrollbar_size,
            update_was_requested: false,
            on_items_rendered: options.on_items_rendered,
            on_scroll_changed: options.on_scroll_changed,
            cache: RefCell::new(LayoutCache::new()),
            last_items_rendered: Cell::new(None),
            last_scroll_changed: Cell::new(None),
        };
        grid.notify();
        grid
    }

    pub fn row_count(&self) -> usize {
        self.rows.count()
    }

    pub fn column_count(&self) -> usize {
        self.columns.count()
    }

    pub fn width(&self) -> u32 {
        self.columns.viewport()
    }

    pub fn height(&self) -> u32 {
        self.rows.viewport()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn rtl_offset_mode(&self) -> RtlOffsetMode {
        self.rtl_offset_mode
    }

    pub fn row_height_policy(&self) -> &SizePolicy {
        self.rows.policy()
    }

    pub fn column_width_policy(&self) -> &SizePolicy {
        self.columns.policy()
    }

    pub fn total_width(&self) -> u64 {
        self.columns.total_size()
    }

    pub fn total_height(&self) -> u64 {
        self.rows.total_size()
    }

    pub fn scroll_left(&self) -> u64 {
        self.columns.state().offset
    }

    pub fn scroll_top(&self) -> u64 {
        self.rows.state().offset
    }

    pub fn horizontal_direction(&self) -> ScrollDirection {
        self.columns.state().direction
    }

    pub fn vertical_direction(&self) -> ScrollDirection {
        self.rows.state().direction
    }

    pub fn is_scrolling(&self) -> bool {
        self.rows.state().is_scrolling || self.columns.state().is_scrolling
    }

    pub fn update_was_requested(&self) -> bool {
        self.update_was_requested
    }

    /// The render window at the current scroll state, both axes. Every field
    /// is zero when either axis is empty.
    pub fn window(&self) -> GridWindowRange {
        if self.rows.count() == 0 || self.columns.count() == 0 {
            return GridWindowRange::default();
        }
        GridWindowRange {
            rows: self.rows.window(),
            columns: self.columns.window(),
        }
    }

    /// Placement for the cell at `(row, column)`, memoized until a size
    /// policy or direction change shifts offsets.
    ///
    /// Panics when either index is out of bounds.
    pub fn style_for(&self, row: usize, column: usize) -> ItemStyle {
        let stamp = (
            self.rows.policy().fingerprint(),
            self.columns.policy().fingerprint(),
            self.direction,
        );
        self.cache.borrow_mut().style_for(stamp, (row, column), || {
            let inline_offset = self.columns.item_offset(column);
            ItemStyle {
                left: (self.direction == Direction::Ltr).then_some(inline_offset),
                right: (self.direction == Direction::Rtl).then_some(inline_offset),
                top: self.rows.item_offset(row),
                width: Extent::Px(self.columns.item_size(column)),
                height: Extent::Px(self.rows.item_size(row)),
            }
        })
    }

    /// Applies a raw user-driven scroll event carrying both axes.
    ///
    /// Each axis is updated independently; an axis whose canonical offset is
    /// unchanged keeps its state untouched.
    pub fn on_scroll(&mut self, event: GridScrollEvent, now_ms: u64) {
        wtrace!(
            scroll_left = event.scroll_left,
            scroll_top = event.scroll_top,
            now_ms,
            "GridWindow::on_scroll"
        );
        let left = if self.direction == Direction::Rtl {
            canonical_offset(
                event.scroll_left,
                self.rtl_offset_mode,
                event.scroll_width,
                event.client_width,
            )
        } else {
            clamp_offset(event.scroll_left, event.scroll_width, event.client_width)
        };
        let top = clamp_offset(event.scroll_top, event.scroll_height, event.client_height);

        let column_changed = self.columns.apply_user_offset(left, now_ms);
        let row_changed = self.rows.apply_user_offset(top, now_ms);
        if column_changed || row_changed {
            self.update_was_requested = false;
            self.notify();
        }
    }

    /// Programmatically scrolls either or both axes; `None` keeps an axis at
    /// its current offset. No upper clamp (see [`crate::ListWindow::scroll_to`]).
    pub fn scroll_to(&mut self, scroll_left: Option<u64>, scroll_top: Option<u64>, now_ms: u64) {
        wtrace!(?scroll_left, ?scroll_top, now_ms, "GridWindow::scroll_to");
        let mut changed = false;
        if let Some(left) = scroll_left {
            changed |= self.columns.apply_requested_offset(left, now_ms);
        }
        if let Some(top) = scroll_top {
            changed |= self.rows.apply_requested_offset(top, now_ms);
        }
        if changed {
            self.update_was_requested = true;
            self.notify();
        }
    }

    /// Programmatically scrolls so the cell at `(row, column)` satisfies
    /// `align`; `None` leaves that axis alone. Indices are clamped; an axis
    /// with no items is left alone. Returns the applied `(left, top)`.
    ///
    /// The configured scrollbar thickness is charged per axis only when the
    /// perpendicular axis overflows and therefore actually shows a
    /// scrollbar.
    pub fn scroll_to_item(
        &mut self,
        row: Option<usize>,
        column: Option<usize>,
        align: Align,
        now_ms: u64,
    ) -> (u64, u64) {
        let horizontal_scrollbar = if self.total_width() > self.columns.viewport() as u64 {
            self.scrollbar_size
        } else {
            0
        };
        let vertical_scrollbar = if self.total_height() > self.rows.viewport() as u64 {
            self.scrollbar_size
        } else {
            0
        };

        let left = column.filter(|_| self.columns.count() > 0).map(|column| {
            let column = column.min(self.columns.count() - 1);
            self.columns.offset_for_alignment(
                column,
                align,
                self.columns.state().offset,
                vertical_scrollbar,
            )
        });
        let top = row.filter(|_| self.rows.count() > 0).map(|row| {
            let row = row.min(self.rows.count() - 1);
            self.rows
                .offset_for_alignment(row, align, self.rows.state().offset, horizontal_scrollbar)
        });

        self.scroll_to(left, top, now_ms);
        (
            left.unwrap_or_else(|| self.columns.state().offset),
            top.unwrap_or_else(|| self.rows.state().offset),
        )
    }

    /// Debounce pump for both axes; returns `true` when either is-scrolling
    /// flag was cleared.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let rows = self.rows.tick(now_ms);
        let columns = self.columns.tick(now_ms);
        if !(rows || columns) {
            return false;
        }
        wtrace!(now_ms, "GridWindow::tick is_scrolling reset");
        self.cache.borrow_mut().clear();
        self.notify();
        true
    }

    pub fn set_row_count(&mut self, row_count: usize) {
        if self.rows.count() == row_count {
            return;
        }
        self.rows.set_count(row_count);
        self.notify();
    }

    pub fn set_column_count(&mut self, column_count: usize) {
        if self.columns.count() == column_count {
            return;
        }
        self.columns.set_count(column_count);
        self.notify();
    }

    pub fn set_row_height(&mut self, row_height: SizePolicy) {
        self.rows.set_policy(row_height);
        self.notify();
    }

    pub fn set_column_width(&mut self, column_width: SizePolicy) {
        self.columns.set_policy(column_width);
        self.notify();
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if self.columns.viewport() == width && self.rows.viewport() == height {
            return;
        }
        self.columns.set_viewport(width);
        self.rows.set_viewport(height);
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

    pub fn set_overscan(&mut self, rows: usize, columns: usize) {
        if self.rows.overscan() == rows && self.columns.overscan() == columns {
            return;
        }
        self.rows.set_overscan(rows);
        self.columns.set_overscan(columns);
        self.notify();
    }

    pub fn set_scrollbar_size(&mut self, scrollbar_size: u32) {
        self.scrollbar_size = scrollbar_size;
    }

    pub fn set_is_scrolling_reset_delay_ms(&mut self, delay_ms: u64) {
        self.rows.set_delay_ms(delay_ms);
        self.columns.set_delay_ms(delay_ms);
    }

    /// Invalidates a variable row policy at and after `row` and drops the
    /// cached styles.
    pub fn reset_after_row_index(&mut self, row: usize) {
        self.reset_after_indices(Some(row), None);
    }

    /// Invalidates a variable column policy at and after `column` and drops
    /// the cached styles.
    pub fn reset_after_column_index(&mut self, column: usize) {
        self.reset_after_indices(None, Some(column));
    }

    pub fn reset_after_indices(&mut self, row: Option<usize>, column: Option<usize>) {
        wdebug!(?row, ?column, "GridWindow::reset_after_indices");
        if let Some(row) = row {
            self.rows.policy().reset_from(row);
        }
        if let Some(column) = column {
            self.columns.policy().reset_from(column);
        }
        self.cache.borrow_mut().clear();
        self.notify();
    }

    pub fn set_on_items_rendered(
        &mut self,
        on_items_rendered: Option<impl Fn(GridWindowRange) + Send + Sync + 'static>,
    ) {
        self.on_items_rendered = on_items_rendered.map(|f| alloc::sync::Arc::new(f) as _);
        self.notify();
    }

    pub fn set_on_scroll_changed(
        &mut self,
        on_scroll_changed: Option<impl Fn(GridScrollChanged) + Send + Sync + 'static>,
    ) {
        self.on_scroll_changed = on_scroll_changed.map(|f| alloc::sync::Arc::new(f) as _);
        self.notify();
    }

    fn notify(&self) {
        if let Some(cb) = &self.on_items_rendered {
            if self.rows.count() > 0 && self.columns.count() > 0 {
                let window = GridWindowRange {
                    rows: self.rows.window(),
                    columns: self.columns.window(),
                };
                if self.last_items_rendered.get() != Some(window) {
                    self.last_items_rendered.set(Some(window));
                    cb(window);
                }
            }
        }
        if let Some(cb) = &self.on_scroll_changed {
            let payload = GridScrollChanged {
                scroll_left: self.columns.state().offset,
                scroll_top: self.rows.state().offset,
                horizontal_direction: self.columns.state().direction,
                vertical_direction: self.rows.state().direction,
                update_was_requested: self.update_was_requested,
            };
            if self.last_scroll_changed.get() != Some(payload) {
                self.last_scroll_changed.set(Some(payload));
                cb(payload);
            }
        }
    }
}

impl fmt::Debug for GridWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridWindow")
            .field("row_count", &self.rows.count())
            .field("column_count", &self.columns.count())
            .field("row_height", self.rows.policy())
            .field("column_width", self.columns.policy())
            .field("direction", &self.direction)
            .field("width", &self.columns.viewport())
            .field("height", &self.rows.viewport())
            .field("scroll_left", &self.columns.state().offset)
            .field("scroll_top", &self.rows.state().offset)
            .finish_non_exhaustive()
    }
}
