use alloc::sync::Arc;

use crate::carousel::Carousel;

/// A callback fired when a carousel state update occurs.
///
/// The second argument is `is_scrolling`.
pub type OnChangeCallback = Arc<dyn Fn(&Carousel, bool) + Send + Sync>;

/// Fallback card width used until a card has been measured.
///
/// Keeps offset → index math well-defined (no zero stride) before layout.
pub const DEFAULT_CARD_WIDTH: u32 = 340;

/// Space between neighboring cards.
pub const DEFAULT_GAP: u32 = 24;

/// Scroll-offset slack below which an edge counts as reached.
///
/// Absorbs sub-pixel scroll positions reported by real scroll containers.
pub const DEFAULT_EDGE_THRESHOLD: u32 = 10;

/// Quiet period after the last scroll event before scrolling counts as settled.
pub const DEFAULT_SCROLL_SETTLE_MS: u64 = 50;

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the change callback is stored in an `Arc` so adapters can
/// tweak a field and rebuild without reallocating closures.
#[derive(Clone)]
pub struct CarouselOptions {
    /// Number of cards. Fixed for the lifetime of the carousel; the track is
    /// laid out once and cards are identified by position.
    pub count: usize,

    /// Measured card width in the scroll axis.
    ///
    /// `None` (or a zero measurement) falls back to [`DEFAULT_CARD_WIDTH`].
    pub card_width: Option<u32>,

    /// Space between cards.
    pub gap: u32,

    /// Initial viewport width.
    pub initial_viewport: u32,

    /// Initial scroll offset.
    pub initial_offset: u64,

    /// Edge slack for [`crate::Edges`] computation.
    pub edge_threshold: u32,

    /// Debounce window for resetting `is_scrolling` after the last scroll event.
    pub is_scrolling_reset_delay_ms: u64,

    /// Optional callback fired when the carousel's internal state changes.
    ///
    /// The `is_scrolling` argument indicates whether a scroll is in progress.
    pub on_change: Option<OnChangeCallback>,
}

impl CarouselOptions {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            card_width: None,
            gap: DEFAULT_GAP,
            initial_viewport: 0,
            initial_offset: 0,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
            is_scrolling_reset_delay_ms: DEFAULT_SCROLL_SETTLE_MS,
            on_change: None,
        }
    }

    pub fn with_card_width(mut self, card_width: u32) -> Self {
        self.card_width = Some(card_width);
        self
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_initial_viewport(mut self, initial_viewport: u32) -> Self {
        self.initial_viewport = initial_viewport;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: u64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_edge_threshold(mut self, edge_threshold: u32) -> Self {
        self.edge_threshold = edge_threshold;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("card_width", &self.card_width)
            .field("gap", &self.gap)
            .field("initial_viewport", &self.initial_viewport)
            .field("initial_offset", &self.initial_offset)
            .field("edge_threshold", &self.edge_threshold)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .finish_non_exhaustive()
    }
}
