use carousel::CarouselOptions;
use carousel_adapter::Controller;

fn main() {
    // Example: a pointer flick over a 10-card track, driven headlessly.
    //
    // An adapter would:
    // - forward pointer-down/move/up events to drag_start/drag_move/drag_end
    // - call tick(now_ms) in a frame loop / timer
    // - apply the returned offset to the real scroll container (if any)
    // - render buttons/dots from edges() and current_index()
    let mut c = Controller::new(
        CarouselOptions::new(10)
            .with_card_width(300)
            .with_gap(24)
            .with_initial_viewport(800)
            .with_initial_offset(1_000),
    );

    c.drag_start(400.0, 0);
    c.drag_move(430.0, 8);
    c.drag_move(470.0, 16);
    println!(
        "dragging: off={} index={}",
        c.carousel().scroll_offset(),
        c.current_index()
    );

    // Release mid-swipe: the velocity decides between glide and snap.
    c.drag_end(16);

    let mut now_ms = 16u64;
    loop {
        now_ms += 16;
        c.tick(now_ms);
        if now_ms % 160 == 0 {
            println!(
                "t={now_ms} off={} index={} animating={}",
                c.carousel().scroll_offset(),
                c.current_index(),
                c.is_animating()
            );
        }
        if now_ms > 16 + 900 && !c.is_animating() {
            break;
        }
    }

    println!(
        "settled: off={} index={} edges={:?}",
        c.carousel().scroll_offset(),
        c.current_index(),
        c.edges()
    );
}
