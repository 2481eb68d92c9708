/// Where a target item should land within the viewport after a programmatic
/// scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    /// Scroll just far enough that the item becomes fully visible; no-op when
    /// it already is.
    Auto,
    /// `Auto` for short jumps (within one viewport of the target band),
    /// `Center` for long ones.
    Smart,
    Center,
    Start,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// The scrolled axis of a list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layout {
    #[default]
    Vertical,
    Horizontal,
}

impl Layout {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

/// Reading direction of the host layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// How the platform reports horizontal scroll offsets under right-to-left
/// layouts.
///
/// The CSSOM standard says `scrollLeft` is negative for RTL content, but not all
/// platforms agree: some report positive offsets measured from the left edge
/// and some report positive offsets descending from the scrollable width.
/// Hosts detect their platform's convention once and configure it here; the
/// engine canonicalizes every raw offset to non-negative-from-start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RtlOffsetMode {
    #[default]
    Negative,
    PositiveAscending,
    PositiveDescending,
}

/// The index window a host should instantiate, both with and without the
/// overscan margin.
///
/// All indices are inclusive and clamped to `[0, count - 1]`; every field is
/// zero when the collection is empty. The visible band is always a subset of
/// the overscan band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    pub overscan_start: usize,
    pub overscan_stop: usize,
    pub visible_start: usize,
    pub visible_stop: usize,
}

impl WindowRange {
    /// Iterates the overscanned index window (the set of items to render).
    pub fn iter(&self) -> core::ops::RangeInclusive<usize> {
        self.overscan_start..=self.overscan_stop
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.overscan_start && index <= self.overscan_stop
    }
}

/// Row and column windows of a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridWindowRange {
    pub rows: WindowRange,
    pub columns: WindowRange,
}

/// Extent of an item along one dimension of its style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extent {
    Px(u32),
    /// Fill the cross axis of the scroll container.
    Fill,
}

/// Absolute placement for one item, in logical left/right terms.
///
/// Exactly one of `left`/`right` is set: the inline offset anchors to the
/// left edge for left-to-right layouts and to the right edge for
/// right-to-left layouts, so hosts can apply the style without re-deriving
/// direction themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStyle {
    pub left: Option<u64>,
    pub right: Option<u64>,
    pub top: u64,
    pub width: Extent,
    pub height: Extent,
}

/// Payload of the "scroll changed" notification of a list.
///
/// `update_was_requested` distinguishes programmatic scrolls from user-driven
/// ones: only requested updates need to be written back to the real viewport
/// by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollChanged {
    pub offset: u64,
    pub direction: ScrollDirection,
    pub update_was_requested: bool,
}

/// Payload of the "scroll changed" notification of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridScrollChanged {
    pub scroll_left: u64,
    pub scroll_top: u64,
    pub horizontal_direction: ScrollDirection,
    pub vertical_direction: ScrollDirection,
    pub update_was_requested: bool,
}

/// A raw scroll event from the host's scroll container, one axis.
///
/// `offset` is reported verbatim (it may be negative under right-to-left
/// conventions); `content_extent`/`viewport_extent` are the scrollable and
/// visible extents along the same axis, used for normalization and for
/// clamping elastic overscroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    pub offset: i64,
    pub content_extent: u64,
    pub viewport_extent: u32,
}

/// A raw scroll event from a grid's scroll container, both axes at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridScrollEvent {
    pub scroll_left: i64,
    pub scroll_top: i64,
    pub scroll_width: u64,
    pub scroll_height: u64,
    pub client_width: u32,
    pub client_height: u32,
}
