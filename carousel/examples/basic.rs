use carousel::{Carousel, CarouselOptions};

fn main() {
    // A 6-card track: 300px cards with a 24px gap, in an 800px viewport.
    let mut c = Carousel::new(
        CarouselOptions::new(6)
            .with_card_width(300)
            .with_gap(24)
            .with_initial_viewport(800),
    );

    println!("track={} max_scroll={}", c.total_size(), c.max_scroll_offset());

    // Simulate the embedder reporting scroll events, then a settle tick.
    for (offset, now_ms) in [(120u64, 0u64), (260, 16), (410, 32)] {
        c.apply_scroll_offset_event_clamped(offset, now_ms);
        println!(
            "t={now_ms} off={} nearest={} edges={:?}",
            c.scroll_offset(),
            c.nearest_index(c.scroll_offset()),
            c.edges()
        );
    }

    if c.update_scrolling(100) {
        c.refresh_from_scroll_position();
    }
    println!(
        "settled: index={} centered_at={:?}",
        c.current_index(),
        c.center_offset(c.current_index())
    );
}
