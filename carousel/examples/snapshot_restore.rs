use carousel::{Carousel, CarouselOptions};

fn main() {
    // Example: capture state on one frame, restore it on a fresh engine.
    //
    // An adapter would do this to survive a re-mount of the scroll container
    // (e.g. a resize that rebuilds the track) without losing the user's place.
    let mut c = Carousel::new(
        CarouselOptions::new(8)
            .with_card_width(340)
            .with_initial_viewport(1024),
    );
    c.apply_scroll_offset_event_clamped(900, 0);
    c.refresh_from_scroll_position();

    let snap = c.snapshot();
    println!("captured: {snap:?}");

    let mut fresh = Carousel::new(CarouselOptions::new(8).with_card_width(340));
    fresh.restore_snapshot(snap, 16);
    println!(
        "restored: index={} off={} scrolling={}",
        fresh.current_index(),
        fresh.scroll_offset(),
        fresh.is_scrolling()
    );
}
