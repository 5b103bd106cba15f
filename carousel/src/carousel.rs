use alloc::sync::Arc;
use core::cell::Cell;
use core::cmp;

use crate::{Card, CarouselOptions, CarouselSnapshot, Edges, ScrollDirection, ScrollState};

/// A headless carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by providing viewport width and scroll offsets.
/// - Navigation workflows (tween scrolling, drag/momentum, pagination) live in
///   the `carousel-adapter` crate.
///
/// The engine owns the authoritative `current_index` plus the geometry needed
/// to map between indices and scroll offsets. Cards are uniform-width slots;
/// `offset → index` is a round-to-nearest over the card stride (width + gap).
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    viewport_size: u32,
    scroll_offset: u64,
    current_index: usize,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    last_scroll_event_ms: Option<u64>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Carousel {
    /// Creates a new carousel from options.
    ///
    /// `options.initial_viewport` and `options.initial_offset` are applied
    /// immediately, and `current_index` starts at the card nearest the
    /// initial offset.
    pub fn new(options: CarouselOptions) -> Self {
        cdebug!(
            count = options.count,
            gap = options.gap,
            card_width = options.card_width,
            "Carousel::new"
        );
        let mut c = Self {
            viewport_size: options.initial_viewport,
            scroll_offset: options.initial_offset,
            current_index: 0,
            is_scrolling: false,
            scroll_direction: None,
            last_scroll_event_ms: None,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        c.current_index = c.nearest_index(c.scroll_offset);
        c
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn is_empty(&self) -> bool {
        self.options.count == 0
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Carousel, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_scrolling);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended for adapters: on a typical frame you might update the
    /// viewport, the scroll offset, and the scrolling flag together. Without
    /// batching, each setter may trigger `on_change`, which can be expensive
    /// if the callback drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    // ---- geometry -------------------------------------------------------

    /// The effective card width: the measured width, or the fallback when no
    /// card has been laid out yet (keeps the stride non-zero).
    pub fn card_width(&self) -> u32 {
        self.options
            .card_width
            .filter(|&w| w > 0)
            .unwrap_or(crate::DEFAULT_CARD_WIDTH)
    }

    pub fn gap(&self) -> u32 {
        self.options.gap
    }

    /// Distance between the starts of two neighboring cards.
    pub fn stride(&self) -> u64 {
        self.card_width() as u64 + self.options.gap as u64
    }

    /// Records the measured card width (e.g. after layout or resize).
    pub fn measure_card_width(&mut self, width: u32) {
        if self.options.card_width == Some(width) {
            return;
        }
        ctrace!(width, "measure_card_width");
        self.options.card_width = Some(width);
        self.notify();
    }

    pub fn set_gap(&mut self, gap: u32) {
        if self.options.gap == gap {
            return;
        }
        self.options.gap = gap;
        self.notify();
    }

    pub fn card(&self, index: usize) -> Option<Card> {
        (index < self.options.count).then(|| Card {
            index,
            start: index as u64 * self.stride(),
            size: self.card_width(),
        })
    }

    /// Total track width: all cards plus the gaps between them.
    pub fn total_size(&self) -> u64 {
        let count = self.options.count as u64;
        if count == 0 {
            return 0;
        }
        count * self.card_width() as u64 + (count - 1) * self.options.gap as u64
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_size().saturating_sub(self.viewport_size as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// The scroll offset that centers `index` in the viewport, floored at 0.
    ///
    /// Callers clamp the result to `max_scroll_offset` before applying it; the
    /// settle-time reconciliation corrects for whatever clamping the real
    /// scroll container performed.
    pub fn center_offset(&self, index: usize) -> Option<u64> {
        let card = self.card(index)?;
        Some(card.center().saturating_sub(self.viewport_size as u64 / 2))
    }

    /// Maps a scroll offset to the nearest card index (round half up, clamped).
    pub fn nearest_index(&self, offset: u64) -> usize {
        if self.options.count == 0 {
            return 0;
        }
        let stride = self.stride();
        let index = (offset.saturating_add(stride / 2) / stride) as usize;
        cmp::min(index, self.options.count - 1)
    }

    // ---- viewport & scroll ----------------------------------------------

    pub fn viewport_size(&self) -> u32 {
        self.viewport_size
    }

    pub fn set_viewport_size(&mut self, size: u32) {
        if self.viewport_size == size {
            return;
        }
        self.viewport_size = size;
        self.notify();
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        let prev = self.scroll_offset;
        self.scroll_offset = offset;
        self.scroll_direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.notify();
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    /// Applies a scroll offset update from your UI layer (e.g. wheel/drag),
    /// and marks the carousel as scrolling.
    pub fn apply_scroll_offset_event(&mut self, offset: u64, now_ms: u64) {
        ctrace!(offset, now_ms, "apply_scroll_offset_event");
        self.batch_update(|c| {
            c.set_scroll_offset(offset);
            c.notify_scroll_event(now_ms);
        });
    }

    /// Same as `apply_scroll_offset_event`, but clamps the offset.
    pub fn apply_scroll_offset_event_clamped(&mut self, offset: u64, now_ms: u64) {
        ctrace!(offset, now_ms, "apply_scroll_offset_event_clamped");
        self.batch_update(|c| {
            c.set_scroll_offset_clamped(offset);
            c.notify_scroll_event(now_ms);
        });
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.scroll_direction = None;
            self.last_scroll_event_ms = None;
        }
        self.notify();
    }

    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Runs the is-scrolling debounce.
    ///
    /// Returns `true` exactly when scrolling settles on this call (the quiet
    /// period since the last scroll event elapsed) — the adapter's cue to
    /// reconcile index and edge state from the final scroll position.
    pub fn update_scrolling(&mut self, now_ms: u64) -> bool {
        if !self.is_scrolling {
            return false;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return false;
        };
        if now_ms.saturating_sub(last) >= self.options.is_scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
            return true;
        }
        false
    }

    // ---- index & edges --------------------------------------------------

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Sets the authoritative index directly.
    ///
    /// Used by navigation to update optimistically before the scroll settles;
    /// `refresh_from_scroll_position` re-derives it from the real offset.
    pub fn set_current_index(&mut self, index: usize) {
        if self.current_index == index {
            return;
        }
        self.current_index = index;
        self.notify();
    }

    /// Whether further scrolling is possible in each direction.
    ///
    /// Derived from the current offset; always fresh, nothing cached.
    pub fn edges(&self) -> Edges {
        let threshold = self.options.edge_threshold as u64;
        Edges {
            can_scroll_left: self.scroll_offset > threshold,
            can_scroll_right: self.scroll_offset.saturating_add(threshold)
                < self.max_scroll_offset(),
        }
    }

    /// Re-derives `current_index` from the actual scroll position.
    ///
    /// Called by adapters on scroll settle and after drags/animations; calling
    /// it twice with no scroll change in between is a no-op the second time.
    pub fn refresh_from_scroll_position(&mut self) {
        if self.options.count == 0 {
            return;
        }
        let index = self.nearest_index(self.scroll_offset);
        ctrace!(
            offset = self.scroll_offset,
            index,
            "refresh_from_scroll_position"
        );
        self.set_current_index(index);
    }

    // ---- snapshots ------------------------------------------------------

    /// Returns a lightweight snapshot of the current scroll state.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            is_scrolling: self.is_scrolling,
        }
    }

    /// Returns a combined snapshot of viewport + scroll + index state.
    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            viewport: self.viewport_size,
            scroll: self.scroll_state(),
            current_index: self.current_index,
        }
    }

    /// Restores state from a previously captured snapshot.
    ///
    /// When `snapshot.scroll.is_scrolling` is `true`, this updates the internal
    /// scrolling timers as if a scroll event happened at `now_ms`.
    pub fn restore_snapshot(&mut self, snapshot: CarouselSnapshot, now_ms: u64) {
        self.batch_update(|c| {
            c.set_viewport_size(snapshot.viewport);
            c.set_scroll_offset_clamped(snapshot.scroll.offset);
            if snapshot.scroll.is_scrolling {
                c.notify_scroll_event(now_ms);
            } else {
                c.set_is_scrolling(false);
            }
            c.set_current_index(snapshot.current_index);
        });
    }
}
