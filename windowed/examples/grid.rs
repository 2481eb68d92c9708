// Example: grid windowing with independent row/column axes.
use windowed::{Align, GridOptions, GridWindow, SizePolicy};

fn main() {
    let mut grid = GridWindow::new(
        GridOptions::new(
            1000,
            1000,
            SizePolicy::fixed(35),
            SizePolicy::variable(|column| 80 + (column % 7) as u32 * 10),
        )
        .with_viewport(900, 600),
    );

    println!("extent={}x{}", grid.total_width(), grid.total_height());

    let (left, top) = grid.scroll_to_item(Some(100), Some(50), Align::Start, 0);
    println!("scrolled to left={left} top={top}");

    let w = grid.window();
    println!(
        "rows {}..={}, columns {}..={}",
        w.rows.overscan_start, w.rows.overscan_stop, w.columns.overscan_start, w.columns.overscan_stop
    );
    println!("first cell style: {:?}", grid.style_for(w.rows.overscan_start, w.columns.overscan_start));
}
