// Example: driving a ListController the way a UI adapter would: raw scroll
// events in, pending programmatic offsets out, debounce ticked per frame.
use windowed::{Align, ListOptions, ScrollEvent, SizePolicy};
use windowed_adapter::ListController;

fn main() {
    let mut controller = ListController::new(
        ListOptions::new(10_000, SizePolicy::fixed(24)).with_viewport(480),
    );

    // Simulated wheel events, 16 ms apart.
    for frame in 0..10u64 {
        let now_ms = frame * 16;
        controller.on_scroll_event(
            ScrollEvent {
                offset: (frame as i64 + 1) * 120,
                content_extent: controller.list().total_size(),
                viewport_extent: 480,
            },
            now_ms,
        );
        controller.tick(now_ms);
    }
    println!(
        "after wheel: offset={} is_scrolling={}",
        controller.list().scroll_offset(),
        controller.list().is_scrolling()
    );

    // Quiet period: the is-scrolling flag debounces off.
    controller.tick(10 * 16 + 150);
    println!("after quiet period: is_scrolling={}", controller.list().is_scrolling());

    // A programmatic jump leaves an offset for the host to apply.
    controller.scroll_to_item(5000, Align::Center, 400);
    if let Some(offset) = controller.take_pending_offset() {
        println!("host writes scroll offset {offset}");
    }
    println!("window={:?}", controller.list().window());
}
