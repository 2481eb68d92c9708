use windowed::{
    Align, Direction, GridOptions, GridScrollEvent, GridWindow, ListOptions, ListWindow,
    ScrollEvent,
};

use crate::physical_inline_offset;

/// A framework-neutral driver for a [`ListWindow`].
///
/// Adapters feed it raw UI events and call [`ListController::tick`] each
/// frame (or timer tick). Programmatic scrolls leave a **pending** physical
/// offset behind: the host drains it with
/// [`ListController::take_pending_offset`] and writes it to the real scroll
/// container. User-driven events never produce a pending offset, since the
/// container already moved.
#[derive(Clone, Debug)]
pub struct ListController {
    list: ListWindow,
    pending: Option<u64>,
}

impl ListController {
    pub fn new(options: ListOptions) -> Self {
        // An initial offset behaves like a programmatic scroll: the host
        // applies it to the container on mount.
        let pending = (options.initial_offset > 0).then_some(options.initial_offset);
        Self {
            list: ListWindow::new(options),
            pending,
        }
    }

    pub fn from_list(list: ListWindow) -> Self {
        Self {
            list,
            pending: None,
        }
    }

    pub fn list(&self) -> &ListWindow {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListWindow {
        &mut self.list
    }

    pub fn into_list(self) -> ListWindow {
        self.list
    }

    /// Forwards a raw user-driven scroll event. A stale pending offset is
    /// dropped: the user moved the container past it.
    pub fn on_scroll_event(&mut self, event: ScrollEvent, now_ms: u64) {
        let before = self.list.scroll_offset();
        self.list.on_scroll(event, now_ms);
        if self.list.scroll_offset() != before {
            self.pending = None;
        }
    }

    pub fn scroll_to(&mut self, offset: u64, now_ms: u64) {
        let before = self.list.scroll_offset();
        self.list.scroll_to(offset, now_ms);
        if self.list.scroll_offset() != before {
            self.pending = Some(self.list.scroll_offset());
        }
    }

    /// Returns the applied canonical offset.
    pub fn scroll_to_item(&mut self, index: usize, align: Align, now_ms: u64) -> u64 {
        let before = self.list.scroll_offset();
        let applied = self.list.scroll_to_item(index, align, now_ms);
        if self.list.scroll_offset() != before {
            self.pending = Some(self.list.scroll_offset());
        }
        applied
    }

    /// Debounce pump; returns `true` when the is-scrolling flag was cleared.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.list.tick(now_ms)
    }

    /// The physical offset the host must write to its scroll container, if a
    /// programmatic scroll is waiting to be applied.
    pub fn take_pending_offset(&mut self) -> Option<i64> {
        let canonical = self.pending.take()?;
        Some(self.to_physical(canonical))
    }

    fn to_physical(&self, canonical: u64) -> i64 {
        if self.list.layout().is_horizontal() && self.list.direction() == Direction::Rtl {
            physical_inline_offset(
                canonical,
                self.list.rtl_offset_mode(),
                self.list.total_size(),
                self.list.viewport(),
            )
        } else {
            canonical as i64
        }
    }
}

/// Offsets a host must write back to its grid scroll container.
///
/// `scroll_left` is already converted to the platform's right-to-left
/// convention (it may be negative); `scroll_top` has no convention to
/// convert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridScrollTarget {
    pub scroll_left: i64,
    pub scroll_top: u64,
}

/// A framework-neutral driver for a [`GridWindow`]; see [`ListController`].
#[derive(Clone, Debug)]
pub struct GridController {
    grid: GridWindow,
    pending: Option<(u64, u64)>,
}

impl GridController {
    pub fn new(options: GridOptions) -> Self {
        let pending = (options.initial_scroll_left > 0 || options.initial_scroll_top > 0)
            .then_some((options.initial_scroll_left, options.initial_scroll_top));
        Self {
            grid: GridWindow::new(options),
            pending,
        }
    }

    pub fn from_grid(grid: GridWindow) -> Self {
        Self {
            grid,
            pending: None,
        }
    }

    pub fn grid(&self) -> &GridWindow {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut GridWindow {
        &mut self.grid
    }

    pub fn into_grid(self) -> GridWindow {
        self.grid
    }

    pub fn on_scroll_event(&mut self, event: GridScrollEvent, now_ms: u64) {
        let before = (self.grid.scroll_left(), self.grid.scroll_top());
        self.grid.on_scroll(event, now_ms);
        if (self.grid.scroll_left(), self.grid.scroll_top()) != before {
            self.pending = None;
        }
    }

    pub fn scroll_to(&mut self, scroll_left: Option<u64>, scroll_top: Option<u64>, now_ms: u64) {
        let before = (self.grid.scroll_left(), self.grid.scroll_top());
        self.grid.scroll_to(scroll_left, scroll_top, now_ms);
        let after = (self.grid.scroll_left(), self.grid.scroll_top());
        if after != before {
            self.pending = Some(after);
        }
    }

    /// Returns the applied canonical `(left, top)`.
    pub fn scroll_to_item(
        &mut self,
        row: Option<usize>,
        column: Option<usize>,
        align: Align,
        now_ms: u64,
    ) -> (u64, u64) {
        let before = (self.grid.scroll_left(), self.grid.scroll_top());
        let applied = self.grid.scroll_to_item(row, column, align, now_ms);
        let after = (self.grid.scroll_left(), self.grid.scroll_top());
        if after != before {
            self.pending = Some(after);
        }
        applied
    }

    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.grid.tick(now_ms)
    }

    pub fn take_pending_scroll(&mut self) -> Option<GridScrollTarget> {
        let (left, top) = self.pending.take()?;
        let scroll_left = if self.grid.direction() == Direction::Rtl {
            physical_inline_offset(
                left,
                self.grid.rtl_offset_mode(),
                self.grid.total_width(),
                self.grid.width(),
            )
        } else {
            left as i64
        };
        Some(GridScrollTarget {
            scroll_left,
            scroll_top: top,
        })
    }
}
