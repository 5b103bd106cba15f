use carousel_adapter::{
    CountUp, ScopedSubscriptions, Theme, ThemeState, UiState, hero_gradient_opacity, is_scrolled,
};

fn main() {
    // Example: the page-level state around the carousel.

    // Theme: the stored preference wins over the system preference.
    let mut theme = ThemeState::new(None, Theme::Dark);
    println!("resolved={:?}", theme.resolved());
    let chosen = theme.toggle();
    println!("after toggle: resolved={chosen:?} stored={:?}", theme.stored());

    // Shared UI flags with auditable subscriptions.
    let mut ui = UiState::new(chosen);
    let mut scope = ScopedSubscriptions::new();
    scope.subscribe(&mut ui, |ui| {
        println!(
            "ui changed: theme={:?} scrolled={} menu={}",
            ui.theme(),
            ui.is_scrolled(),
            ui.is_menu_open()
        );
    });

    for scroll_y in [0u64, 15, 120, 400] {
        ui.set_scrolled(is_scrolled(scroll_y));
        println!("y={scroll_y} gradient={:.2}", hero_gradient_opacity(scroll_y));
    }

    // A stat counter ticking up over 1.5s.
    let counter = CountUp::new(42, 0);
    for now_ms in [0u64, 250, 500, 1_000, 1_500] {
        println!("t={now_ms} count={}", counter.sample(now_ms));
    }

    scope.release(&mut ui);
    println!("listeners after teardown: {}", ui.listener_count());
}
