use crate::*;

use windowed::{
    Align, Direction, GridOptions, Layout, ListOptions, RtlOffsetMode, ScrollEvent, SizePolicy,
    canonical_offset,
};

#[test]
fn physical_offset_round_trips_through_canonicalization() {
    for mode in [
        RtlOffsetMode::Negative,
        RtlOffsetMode::PositiveAscending,
        RtlOffsetMode::PositiveDescending,
    ] {
        for canonical in [0u64, 1, 300, 4700] {
            let physical = physical_inline_offset(canonical, mode, 5000, 300);
            assert_eq!(
                canonical_offset(physical, mode, 5000, 300),
                canonical,
                "mode={mode:?} canonical={canonical}"
            );
        }
    }
}

#[test]
fn list_controller_exposes_pending_programmatic_offsets() {
    let mut c = ListController::new(
        ListOptions::new(1000, SizePolicy::fixed(35)).with_viewport(150),
    );
    assert_eq!(c.take_pending_offset(), None);

    c.scroll_to_item(200, Align::Start, 0);
    assert_eq!(c.take_pending_offset(), Some(7000));
    assert_eq!(c.take_pending_offset(), None);

    // A user-driven event supersedes an unapplied programmatic offset.
    c.scroll_to(100, 10);
    c.on_scroll_event(
        ScrollEvent {
            offset: 135,
            content_extent: 35_000,
            viewport_extent: 150,
        },
        20,
    );
    assert_eq!(c.take_pending_offset(), None);
}

#[test]
fn list_controller_applies_initial_offset_on_mount() {
    let mut c = ListController::new(
        ListOptions::new(100, SizePolicy::fixed(10))
            .with_viewport(50)
            .with_initial_offset(400),
    );
    assert_eq!(c.take_pending_offset(), Some(400));
}

#[test]
fn rtl_pending_offset_uses_platform_convention() {
    let mut c = ListController::new(
        ListOptions::new(50, SizePolicy::fixed(100))
            .with_layout(Layout::Horizontal)
            .with_direction(Direction::Rtl)
            .with_rtl_offset_mode(RtlOffsetMode::PositiveDescending)
            .with_viewport(300),
    );
    c.scroll_to(300, 0);
    // content 5000, viewport 300: canonical 300 → physical 4400.
    assert_eq!(c.take_pending_offset(), Some(4400));
}

#[test]
fn list_controller_ticks_the_debounce() {
    let mut c = ListController::new(
        ListOptions::new(100, SizePolicy::fixed(10)).with_viewport(50),
    );
    c.on_scroll_event(
        ScrollEvent {
            offset: 70,
            content_extent: 1000,
            viewport_extent: 50,
        },
        0,
    );
    assert!(c.list().is_scrolling());
    assert!(!c.tick(100));
    assert!(c.tick(150));
    assert!(!c.list().is_scrolling());
}

#[test]
fn grid_controller_exposes_pending_scroll_targets() {
    let mut c = GridController::new(
        GridOptions::new(1000, 1000, SizePolicy::fixed(35), SizePolicy::fixed(100))
            .with_viewport(300, 150),
    );
    assert_eq!(c.take_pending_scroll(), None);

    c.scroll_to_item(Some(100), Some(50), Align::Start, 0);
    assert_eq!(
        c.take_pending_scroll(),
        Some(GridScrollTarget {
            scroll_left: 5000,
            scroll_top: 3500,
        })
    );

    c.scroll_to(None, Some(4000), 10);
    assert_eq!(
        c.take_pending_scroll(),
        Some(GridScrollTarget {
            scroll_left: 5000,
            scroll_top: 4000,
        })
    );
}
