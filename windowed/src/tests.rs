use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

fn fixed_list(count: usize, size: u32, viewport: u32) -> ListWindow {
    ListWindow::new(ListOptions::new(count, SizePolicy::fixed(size)).with_viewport(viewport))
}

fn sizes_policy(sizes: &[u32]) -> SizePolicy {
    let sizes = sizes.to_vec();
    SizePolicy::variable(move |i| sizes[i])
}

fn naive_offset_of(sizes: &[u32], index: usize) -> u64 {
    sizes[..index].iter().map(|&s| s as u64).sum()
}

fn naive_index_for_offset(sizes: &[u32], offset: u64) -> usize {
    let mut acc = 0u64;
    let mut index = 0;
    for (i, &size) in sizes.iter().enumerate() {
        if acc <= offset {
            index = i;
        } else {
            break;
        }
        acc += size as u64;
    }
    index
}

fn naive_visible_range(sizes: &[u32], scroll_offset: u64, viewport: u32) -> (usize, usize) {
    let count = sizes.len();
    let start = naive_index_for_offset(sizes, scroll_offset).min(count - 1);
    let max_offset = scroll_offset + viewport as u64;
    let mut offset = naive_offset_of(sizes, start) + sizes[start] as u64;
    let mut stop = start;
    while stop < count - 1 && offset < max_offset {
        stop += 1;
        offset += sizes[stop] as u64;
    }
    (start, stop)
}

#[test]
fn fixed_list_initial_window() {
    let list = fixed_list(1000, 35, 150);
    assert_eq!(list.total_size(), 35_000);

    let w = list.window();
    assert_eq!(w.visible_start, 0);
    assert_eq!(w.visible_stop, 4); // 150 / 35 covers indices 0..=4
    assert_eq!(w.overscan_start, 0);
    assert_eq!(w.overscan_stop, 6); // idle: full overscan (2) both ways
}

#[test]
fn empty_list_window_is_zero() {
    let list = fixed_list(0, 35, 150);
    assert_eq!(list.window(), WindowRange::default());
    assert_eq!(list.total_size(), 0);
}

#[test]
fn visible_range_tracks_scroll_offset() {
    let mut list = fixed_list(100, 10, 50);
    list.on_scroll(
        ScrollEvent {
            offset: 300,
            content_extent: 1000,
            viewport_extent: 50,
        },
        0,
    );
    assert_eq!(list.scroll_offset(), 300);
    assert_eq!(list.visible_range(), (30, 34));
}

#[test]
fn overscan_is_direction_aware() {
    let mut list = ListWindow::new(
        ListOptions::new(100, SizePolicy::fixed(10))
            .with_viewport(50)
            .with_overscan(3),
    );

    // Scrolling forward: one item behind, full overscan ahead.
    list.on_scroll(
        ScrollEvent {
            offset: 300,
            content_extent: 1000,
            viewport_extent: 50,
        },
        0,
    );
    let w = list.window();
    assert!(list.is_scrolling());
    assert_eq!((w.visible_start, w.visible_stop), (30, 34));
    assert_eq!((w.overscan_start, w.overscan_stop), (29, 37));

    // Scrolling backward: mirrored.
    list.on_scroll(
        ScrollEvent {
            offset: 250,
            content_extent: 1000,
            viewport_extent: 50,
        },
        10,
    );
    let w = list.window();
    assert_eq!(list.scroll_direction(), ScrollDirection::Backward);
    assert_eq!((w.visible_start, w.visible_stop), (25, 29));
    assert_eq!((w.overscan_start, w.overscan_stop), (22, 30));

    // Idle: full overscan both ways.
    assert!(list.tick(10 + 150));
    assert!(!list.is_scrolling());
    let w = list.window();
    assert_eq!((w.overscan_start, w.overscan_stop), (22, 32));
}

#[test]
fn window_clamps_to_item_bounds() {
    let mut list = ListWindow::new(
        ListOptions::new(10, SizePolicy::fixed(10))
            .with_viewport(50)
            .with_overscan(4),
    );
    let w = list.window();
    assert_eq!(w.overscan_start, 0);

    list.scroll_to(10_000, 0);
    let w = list.window();
    assert_eq!(w.visible_start, 9);
    assert_eq!(w.overscan_stop, 9);
}

#[test]
fn scroll_to_item_auto_brings_item_into_view() {
    let mut list = fixed_list(1000, 35, 150);
    let offset = list.scroll_to_item(200, Align::Auto, 0);

    // Item 200 occupies [7000, 7035); the viewport is [offset, offset + 150).
    assert_eq!(offset, 6885);
    assert!(7000 >= offset && 7035 <= offset + 150);
    let (start, stop) = list.visible_range();
    assert!(start <= 200 && 200 <= stop);
}

#[test]
fn scroll_to_item_clamps_index_and_ignores_empty() {
    let mut list = fixed_list(10, 10, 50);
    let offset = list.scroll_to_item(1_000_000, Align::Start, 0);
    assert_eq!(offset, 50); // last item offset 90, clamped to total - viewport

    let mut empty = fixed_list(0, 10, 50);
    assert_eq!(empty.scroll_to_item(3, Align::Start, 0), 0);
    assert_eq!(empty.scroll_offset(), 0);
}

#[test]
fn alignment_start_end_bounds() {
    let mut rng = Lcg::new(7);
    let mut list = fixed_list(500, 20, 130);
    let max_scroll = list.total_size() - 130;
    for _ in 0..200 {
        let index = rng.gen_range_usize(0, 500);
        let start = list.scroll_to_item(index, Align::Start, 0);
        assert!(start <= index as u64 * 20);
        assert!(start <= max_scroll);

        let end = list.scroll_to_item(index, Align::End, 0);
        assert!(end + 130 >= index as u64 * 20 + 20);
        assert!(end <= max_scroll);
    }
}

#[test]
fn alignment_center_snaps_near_edges() {
    let mut list = fixed_list(1000, 10, 100);
    let last_item_offset = 10_000 - 100;

    assert_eq!(list.scroll_to_item(2, Align::Center, 0), 0);

    // Near the far edge the max bound is already clamped to the last
    // scrollable offset, so the midpoint stays within it.
    let offset = list.scroll_to_item(998, Align::Center, 0);
    assert_eq!(offset, 9895); // min 9890, max clamped to 9900
    assert!(offset <= last_item_offset);

    // Away from the edges: the rounded midpoint of [min, max].
    let offset = list.scroll_to_item(50, Align::Center, 0);
    assert_eq!(offset, 455); // min 410, max 500
}

#[test]
fn alignment_auto_is_noop_when_visible() {
    let mut list = fixed_list(1000, 10, 100);
    list.scroll_to(450, 0);
    assert_eq!(list.scroll_to_item(46, Align::Auto, 10), 450);
    assert_eq!(list.scroll_offset(), 450);
}

#[test]
fn alignment_smart_degrades_by_distance() {
    let mut list = fixed_list(1000, 10, 100);
    // Index 50: min 410, max 500.
    list.scroll_to(600, 0);
    assert_eq!(list.scroll_to_item(50, Align::Smart, 10), 500); // within one viewport: auto
    list.scroll_to(601 + 100, 20);
    assert_eq!(list.scroll_to_item(50, Align::Smart, 30), 455); // beyond: center
}

#[test]
fn alignment_end_charges_scrollbar() {
    let mut list = ListWindow::new(
        ListOptions::new(100, SizePolicy::fixed(10))
            .with_viewport(50)
            .with_scrollbar_size(7),
    );
    assert_eq!(list.scroll_to_item(50, Align::End, 0), 467); // 500 + 10 + 7 - 50
}

#[test]
fn scroll_to_is_idempotent_and_does_not_renotify() {
    let notifications = Arc::new(AtomicUsize::new(0));
    let n = Arc::clone(&notifications);
    let mut list = ListWindow::new(
        ListOptions::new(100, SizePolicy::fixed(10))
            .with_viewport(50)
            .with_on_scroll_changed(Some(move |_: ScrollChanged| {
                n.fetch_add(1, Ordering::SeqCst);
            })),
    );
    let baseline = notifications.load(Ordering::SeqCst);

    list.scroll_to(100, 0);
    assert_eq!(notifications.load(Ordering::SeqCst), baseline + 1);

    let state = list.scroll_state();
    list.scroll_to(100, 50);
    assert_eq!(notifications.load(Ordering::SeqCst), baseline + 1);
    assert_eq!(list.scroll_state(), state);
}

#[test]
fn scroll_changed_payload_reports_request_origin() {
    let payloads = Arc::new(Mutex::new(Vec::new()));
    let p = Arc::clone(&payloads);
    let mut list = ListWindow::new(
        ListOptions::new(100, SizePolicy::fixed(10))
            .with_viewport(50)
            .with_on_scroll_changed(Some(move |change: ScrollChanged| {
                p.lock().unwrap().push(change);
            })),
    );

    list.scroll_to(200, 0);
    list.on_scroll(
        ScrollEvent {
            offset: 150,
            content_extent: 1000,
            viewport_extent: 50,
        },
        10,
    );

    let payloads = payloads.lock().unwrap();
    assert_eq!(
        payloads.as_slice(),
        &[
            ScrollChanged {
                offset: 0,
                direction: ScrollDirection::Forward,
                update_was_requested: false,
            },
            ScrollChanged {
                offset: 200,
                direction: ScrollDirection::Forward,
                update_was_requested: true,
            },
            ScrollChanged {
                offset: 150,
                direction: ScrollDirection::Backward,
                update_was_requested: false,
            },
        ]
    );
}

#[test]
fn items_rendered_dedups_identical_windows() {
    let rendered = Arc::new(AtomicUsize::new(0));
    let r = Arc::clone(&rendered);
    let mut list = ListWindow::new(
        ListOptions::new(1000, SizePolicy::fixed(35))
            .with_viewport(150)
            .with_on_items_rendered(Some(move |_: WindowRange| {
                r.fetch_add(1, Ordering::SeqCst);
            })),
    );
    assert_eq!(rendered.load(Ordering::SeqCst), 1);

    // A one-pixel programmatic nudge keeps the same index window.
    list.scroll_to(1, 0);
    assert_eq!(rendered.load(Ordering::SeqCst), 1);

    list.scroll_to(3500, 10);
    assert_eq!(rendered.load(Ordering::SeqCst), 2);
}

#[test]
fn scroll_event_idempotence_after_clamping() {
    let fired = Arc::new(AtomicUsize::new(0));
    let f = Arc::clone(&fired);
    let mut list = ListWindow::new(
        ListOptions::new(100, SizePolicy::fixed(10))
            .with_viewport(50)
            .with_initial_offset(950)
            .with_on_scroll_changed(Some(move |_: ScrollChanged| {
                f.fetch_add(1, Ordering::SeqCst);
            })),
    );
    let baseline = fired.load(Ordering::SeqCst);

    // Elastic overscroll clamps back to the current offset: a no-op.
    list.on_scroll(
        ScrollEvent {
            offset: 1200,
            content_extent: 1000,
            viewport_extent: 50,
        },
        0,
    );
    assert_eq!(list.scroll_offset(), 950);
    assert!(!list.is_scrolling());
    assert_eq!(fired.load(Ordering::SeqCst), baseline);
}

#[test]
fn is_scrolling_resets_once_after_quiet_period() {
    let mut list = fixed_list(1000, 10, 100);
    let mut resets = 0;

    for i in 0..10u64 {
        list.on_scroll(
            ScrollEvent {
                offset: (i as i64 + 1) * 7,
                content_extent: 10_000,
                viewport_extent: 100,
            },
            i * 10,
        );
        assert!(list.is_scrolling());
    }

    // The earliest deadline (event 0 + 150) has been superseded.
    for now in [150, 200, 239] {
        if list.tick(now) {
            resets += 1;
        }
        assert!(list.is_scrolling());
    }

    // Last event was at 90; its deadline is 240.
    for now in [240, 241, 500] {
        if list.tick(now) {
            resets += 1;
        }
        assert!(!list.is_scrolling());
    }
    assert_eq!(resets, 1);
}

#[test]
fn rtl_offset_normalization() {
    assert_eq!(
        canonical_offset(4700, RtlOffsetMode::PositiveDescending, 5000, 300),
        0
    );
    assert_eq!(
        canonical_offset(4400, RtlOffsetMode::PositiveDescending, 5000, 300),
        300
    );
    assert_eq!(canonical_offset(-250, RtlOffsetMode::Negative, 5000, 300), 250);
    assert_eq!(
        canonical_offset(250, RtlOffsetMode::PositiveAscending, 5000, 300),
        250
    );
    // Out-of-band values clamp into [0, content - viewport].
    assert_eq!(canonical_offset(-10, RtlOffsetMode::PositiveAscending, 5000, 300), 0);
    assert_eq!(
        canonical_offset(-6000, RtlOffsetMode::Negative, 5000, 300),
        4700
    );
    assert_eq!(clamp_offset(-10, 1000, 100), 0);
    assert_eq!(clamp_offset(5000, 1000, 100), 900);
}

#[test]
fn rtl_list_canonicalizes_scroll_events() {
    let mut list = ListWindow::new(
        ListOptions::new(50, SizePolicy::fixed(100))
            .with_layout(Layout::Horizontal)
            .with_direction(Direction::Rtl)
            .with_rtl_offset_mode(RtlOffsetMode::PositiveDescending)
            .with_viewport(300),
    );
    list.on_scroll(
        ScrollEvent {
            offset: 4400,
            content_extent: 5000,
            viewport_extent: 300,
        },
        0,
    );
    assert_eq!(list.scroll_offset(), 300);
    assert_eq!(list.visible_range(), (3, 5));
}

#[test]
fn list_styles_follow_layout_and_direction() {
    let list = fixed_list(100, 35, 150);
    let style = list.style_for(3);
    assert_eq!(style.top, 105);
    assert_eq!(style.left, Some(0));
    assert_eq!(style.right, None);
    assert_eq!(style.width, Extent::Fill);
    assert_eq!(style.height, Extent::Px(35));

    let horizontal = ListWindow::new(
        ListOptions::new(100, SizePolicy::fixed(35))
            .with_layout(Layout::Horizontal)
            .with_viewport(150),
    );
    let style = horizontal.style_for(3);
    assert_eq!(style.top, 0);
    assert_eq!(style.left, Some(105));
    assert_eq!(style.width, Extent::Px(35));
    assert_eq!(style.height, Extent::Fill);

    let rtl = ListWindow::new(
        ListOptions::new(100, SizePolicy::fixed(35))
            .with_layout(Layout::Horizontal)
            .with_direction(Direction::Rtl)
            .with_viewport(150),
    );
    let style = rtl.style_for(3);
    assert_eq!(style.left, None);
    assert_eq!(style.right, Some(105));
}

#[test]
fn style_cache_drops_when_sizing_inputs_change() {
    let mut list = fixed_list(100, 35, 150);
    assert_eq!(list.style_for(3).top, 105);
    list.set_item_size(SizePolicy::fixed(40));
    assert_eq!(list.style_for(3).top, 120);

    list.set_direction(Direction::Rtl);
    assert_eq!(list.style_for(3).right, Some(0)); // vertical: inline offset 0
}

#[test]
fn variable_policy_matches_naive_reference() {
    let mut rng = Lcg::new(42);
    for _ in 0..20 {
        let count = rng.gen_range_usize(1, 200);
        let sizes: Vec<u32> = (0..count).map(|_| rng.gen_range_u32(1, 60)).collect();
        let policy = sizes_policy(&sizes);
        let total: u64 = sizes.iter().map(|&s| s as u64).sum();

        for i in 0..count {
            assert_eq!(policy.offset_of(i, count), naive_offset_of(&sizes, i));
        }
        assert_eq!(policy.total_size(count), total);

        for _ in 0..50 {
            let offset = rng.gen_range_u64(0, total + 100);
            assert_eq!(
                policy.index_for_offset(offset, count),
                naive_index_for_offset(&sizes, offset).min(count - 1),
                "offset={offset} sizes={sizes:?}"
            );
        }
    }
}

#[test]
fn variable_offsets_are_monotonic() {
    let mut rng = Lcg::new(3);
    let count = 300;
    let sizes: Vec<u32> = (0..count).map(|_| rng.gen_range_u32(0, 40)).collect();
    let policy = sizes_policy(&sizes);
    for i in 0..count - 1 {
        assert!(policy.offset_of(i, count) <= policy.offset_of(i + 1, count));
    }
}

#[test]
fn variable_visible_range_matches_naive_reference() {
    let mut rng = Lcg::new(9);
    let count = 400;
    let sizes: Vec<u32> = (0..count).map(|_| rng.gen_range_u32(1, 50)).collect();
    let total: u64 = sizes.iter().map(|&s| s as u64).sum();

    let mut list = ListWindow::new(
        ListOptions::new(count, sizes_policy(&sizes)).with_viewport(120),
    );
    for _ in 0..100 {
        let offset = rng.gen_range_u64(0, total);
        list.scroll_to(offset, 0);
        assert_eq!(
            list.visible_range(),
            naive_visible_range(&sizes, offset, 120)
        );

        let w = list.window();
        assert!(w.overscan_start <= w.visible_start);
        assert!(w.visible_start <= w.visible_stop);
        assert!(w.visible_stop <= w.overscan_stop);
        assert!(w.overscan_stop < count);
    }
}

#[test]
fn scroll_to_item_start_round_trips_into_visible_range() {
    let mut rng = Lcg::new(11);
    let count = 250;
    let sizes: Vec<u32> = (0..count).map(|_| rng.gen_range_u32(1, 80)).collect();
    let mut list = ListWindow::new(
        ListOptions::new(count, sizes_policy(&sizes)).with_viewport(100),
    );
    for _ in 0..100 {
        let index = rng.gen_range_usize(0, count);
        list.scroll_to_item(index, Align::Start, 0);
        let (start, stop) = list.visible_range();
        assert!(start <= index && index <= stop, "index={index}");
    }
}

#[test]
fn variable_total_size_prices_unresolved_tail() {
    let policy = SizePolicy::variable_with_estimate(|i| ((i % 5) as u32 + 1) * 10, 25);
    assert_eq!(policy.total_size(100), 2500);

    // Resolving the first ten spans replaces their share of the estimate.
    assert_eq!(policy.offset_of(9, 100), 250);
    assert_eq!(policy.total_size(100), 300 + 90 * 25);
}

#[test]
fn reset_after_index_revalidates_sizes_and_styles() {
    let scale = Arc::new(AtomicU32::new(1));
    let s = Arc::clone(&scale);
    let mut list = ListWindow::new(
        ListOptions::new(100, SizePolicy::variable(move |_| s.load(Ordering::SeqCst) * 10))
            .with_viewport(50),
    );
    assert_eq!(list.style_for(5).top, 50);

    scale.store(3, Ordering::SeqCst);
    // Cached spans and styles still reflect the old sizes until reset.
    assert_eq!(list.style_for(5).top, 50);

    list.reset_after_index(0);
    assert_eq!(list.style_for(5).top, 150);

    // Resolving the tail settles the estimated total on the exact sizes.
    assert_eq!(list.item_size_policy().offset_of(99, 100), 2970);
    assert_eq!(list.total_size(), 3000);
}

#[test]
fn tick_clears_style_cache_with_fresh_offsets() {
    let sizes = Arc::new(AtomicU32::new(10));
    let s = Arc::clone(&sizes);
    let mut list = ListWindow::new(
        ListOptions::new(20, SizePolicy::variable(move |_| s.load(Ordering::SeqCst)))
            .with_viewport(50),
    );
    assert_eq!(list.style_for(4).top, 40);

    list.on_scroll(
        ScrollEvent {
            offset: 30,
            content_extent: 200,
            viewport_extent: 50,
        },
        0,
    );
    list.reset_after_index(0);
    assert!(list.tick(150));
    assert_eq!(list.style_for(4).top, 40);
}

#[test]
fn grid_scroll_to_item_start_lands_on_cell_origin() {
    let mut grid = GridWindow::new(
        GridOptions::new(
            1000,
            1000,
            SizePolicy::fixed(35),
            SizePolicy::fixed(100),
        )
        .with_viewport(300, 150),
    );
    let (left, top) = grid.scroll_to_item(Some(100), Some(50), Align::Start, 0);
    assert_eq!((left, top), (5000, 3500));
    assert_eq!(grid.scroll_left(), 5000);
    assert_eq!(grid.scroll_top(), 3500);
    assert!(grid.update_was_requested());

    // Targets near the far edge clamp against the scrollable extent.
    let (left, top) = grid.scroll_to_item(Some(999), Some(999), Align::Start, 10);
    assert_eq!(left, 100 * 1000 - 300);
    assert_eq!(top, 35 * 1000 - 150);
}

#[test]
fn grid_scroll_to_partial_axes() {
    let mut grid = GridWindow::new(
        GridOptions::new(100, 100, SizePolicy::fixed(10), SizePolicy::fixed(10))
            .with_viewport(50, 50),
    );
    grid.scroll_to(None, Some(100), 0);
    assert_eq!(grid.scroll_left(), 0);
    assert_eq!(grid.scroll_top(), 100);

    grid.scroll_to_item(None, Some(30), Align::Start, 10);
    assert_eq!(grid.scroll_left(), 300);
    assert_eq!(grid.scroll_top(), 100);
}

#[test]
fn grid_window_covers_both_axes() {
    let mut grid = GridWindow::new(
        GridOptions::new(1000, 1000, SizePolicy::fixed(35), SizePolicy::fixed(100))
            .with_viewport(300, 150),
    );
    let w = grid.window();
    assert_eq!((w.rows.visible_start, w.rows.visible_stop), (0, 4));
    assert_eq!((w.columns.visible_start, w.columns.visible_stop), (0, 2));

    grid.on_scroll(
        GridScrollEvent {
            scroll_left: 1050,
            scroll_top: 700,
            scroll_width: 100_000,
            scroll_height: 35_000,
            client_width: 300,
            client_height: 150,
        },
        0,
    );
    assert_eq!(grid.horizontal_direction(), ScrollDirection::Forward);
    assert_eq!(grid.vertical_direction(), ScrollDirection::Forward);
    let w = grid.window();
    assert_eq!((w.rows.visible_start, w.rows.visible_stop), (20, 24));
    assert_eq!((w.columns.visible_start, w.columns.visible_stop), (10, 13));
}

#[test]
fn grid_with_empty_axis_windows_nothing() {
    let grid = GridWindow::new(
        GridOptions::new(1000, 0, SizePolicy::fixed(35), SizePolicy::fixed(100))
            .with_viewport(300, 150),
    );
    assert_eq!(grid.window(), GridWindowRange::default());
}

#[test]
fn grid_charges_scrollbar_only_on_overflowing_axes() {
    // Columns fit in the viewport: no horizontal scrollbar, so row targets
    // are uncharged.
    let mut narrow = GridWindow::new(
        GridOptions::new(100, 3, SizePolicy::fixed(10), SizePolicy::fixed(10))
            .with_viewport(300, 50)
            .with_scrollbar_size(17),
    );
    let (_, top) = narrow.scroll_to_item(Some(99), None, Align::End, 0);
    assert_eq!(top, 950);

    let mut wide = GridWindow::new(
        GridOptions::new(100, 100, SizePolicy::fixed(10), SizePolicy::fixed(10))
            .with_viewport(300, 50)
            .with_scrollbar_size(17),
    );
    let (_, top) = wide.scroll_to_item(Some(99), None, Align::End, 0);
    assert_eq!(top, 967);
}

#[test]
fn grid_styles_key_cells_by_row_and_column() {
    let grid = GridWindow::new(
        GridOptions::new(100, 100, SizePolicy::fixed(35), SizePolicy::fixed(100))
            .with_viewport(300, 150),
    );
    let style = grid.style_for(2, 3);
    assert_eq!(style.top, 70);
    assert_eq!(style.left, Some(300));
    assert_eq!(style.right, None);
    assert_eq!(style.width, Extent::Px(100));
    assert_eq!(style.height, Extent::Px(35));

    let rtl = GridWindow::new(
        GridOptions::new(100, 100, SizePolicy::fixed(35), SizePolicy::fixed(100))
            .with_direction(Direction::Rtl)
            .with_viewport(300, 150),
    );
    let style = rtl.style_for(2, 3);
    assert_eq!(style.left, None);
    assert_eq!(style.right, Some(300));
}

#[test]
fn grid_scroll_event_with_no_delta_is_ignored() {
    let fired = Arc::new(AtomicUsize::new(0));
    let f = Arc::clone(&fired);
    let mut grid = GridWindow::new(
        GridOptions::new(100, 100, SizePolicy::fixed(10), SizePolicy::fixed(10))
            .with_viewport(50, 50)
            .with_on_scroll_changed(Some(move |_: GridScrollChanged| {
                f.fetch_add(1, Ordering::SeqCst);
            })),
    );
    let baseline = fired.load(Ordering::SeqCst);
    grid.on_scroll(
        GridScrollEvent {
            scroll_left: 0,
            scroll_top: 0,
            scroll_width: 1000,
            scroll_height: 1000,
            client_width: 50,
            client_height: 50,
        },
        0,
    );
    assert_eq!(fired.load(Ordering::SeqCst), baseline);
    assert!(!grid.is_scrolling());
}

#[test]
fn grid_debounce_is_per_axis() {
    let mut grid = GridWindow::new(
        GridOptions::new(100, 100, SizePolicy::fixed(10), SizePolicy::fixed(10))
            .with_viewport(50, 50),
    );
    grid.on_scroll(
        GridScrollEvent {
            scroll_left: 100,
            scroll_top: 0,
            scroll_width: 1000,
            scroll_height: 1000,
            client_width: 50,
            client_height: 50,
        },
        0,
    );
    assert!(grid.is_scrolling());
    assert!(grid.tick(150));
    assert!(!grid.is_scrolling());
    assert!(!grid.tick(300));
}

#[test]
fn rerendering_is_idempotent() {
    let mut list = fixed_list(1000, 35, 150);
    list.scroll_to(4321, 0);
    assert_eq!(list.window(), list.window());
    assert_eq!(list.style_for(123), list.style_for(123));
    assert_eq!(list.visible_range(), list.visible_range());
}

#[test]
#[should_panic(expected = "out of bounds")]
fn style_for_out_of_domain_index_is_a_contract_violation() {
    let list = fixed_list(10, 10, 50);
    let _ = list.style_for(10);
}
