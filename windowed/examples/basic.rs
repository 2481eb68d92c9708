// Example: minimal list windowing and scroll-to-item.
use windowed::{Align, ListOptions, ListWindow, SizePolicy};

fn main() {
    let mut list = ListWindow::new(
        ListOptions::new(1_000_000, SizePolicy::fixed(35)).with_viewport(600),
    );

    println!("total_size={}", list.total_size());
    let w = list.window();
    println!("window={w:?}");
    for index in w.iter().take(3) {
        println!("item {index}: {:?}", list.style_for(index));
    }

    let offset = list.scroll_to_item(999_999, Align::End, 0);
    println!("after scroll_to_item: offset={offset} window={:?}", list.window());
}
