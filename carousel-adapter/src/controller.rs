use core::mem;

use carousel::{Carousel, CarouselOptions, Edges};

use crate::drag::{self, DragRelease, DragSession};
use crate::{Easing, Tween};

/// Fixed wait after issuing a centering scroll before trusting the resulting
/// position for state reconciliation.
pub const NAV_SETTLE_MS: u64 = 400;

/// Delay after construction before the swipe hint may play.
pub const HINT_DELAY_MS: u64 = 2_000;

/// How long the swipe hint plays.
pub const HINT_DURATION_MS: u64 = 1_000;

/// Keyboard keys the carousel region responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    /// A centering scroll is in flight; reconcile at the deadline.
    Navigating { settle_at_ms: u64 },
    /// Pointer drag in progress.
    Dragging(DragSession),
    /// Momentum glide after a flick; snap to the nearest card at the deadline.
    Momentum { snap_at_ms: u64 },
}

/// A framework-neutral controller that wraps a `carousel::Carousel` and owns
/// the navigation and drag workflows.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_size` / `on_scroll` when UI events occur
/// - `drag_start` / `drag_move` / `drag_end` from pointer/touch events
/// - `tick(now_ms)` each frame/timer tick
///
/// The returned offset from `tick()` (and the instant offsets applied during
/// drags) should be written to the real scroll container, keeping the engine
/// state and the UI in sync.
///
/// Navigation and dragging are mutually exclusive by construction: a drag
/// cannot start while a centering scroll is in flight, and navigation calls
/// are dropped (not queued) while animating or dragging.
#[derive(Clone, Debug)]
pub struct Controller {
    core: Carousel,
    tween: Option<Tween>,
    phase: Phase,
    easing: Easing,
}

impl Controller {
    pub fn new(options: CarouselOptions) -> Self {
        Self::from_carousel(Carousel::new(options))
    }

    pub fn from_carousel(core: Carousel) -> Self {
        Self {
            core,
            tween: None,
            phase: Phase::Idle,
            easing: Easing::SmoothStep,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.core
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.core
    }

    pub fn into_carousel(self) -> Carousel {
        self.core
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Whether a programmatic centering scroll is in flight.
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Navigating { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    pub fn current_index(&self) -> usize {
        self.core.current_index()
    }

    pub fn edges(&self) -> Edges {
        self.core.edges()
    }

    pub fn on_viewport_size(&mut self, width: u32) {
        self.core.set_viewport_size(width);
    }

    /// Call this when the UI reports an external scroll offset change (e.g.
    /// wheel or trackpad).
    ///
    /// This kills any active tween — direct scrolling overrides a glide — but
    /// pending settle/snap deadlines still fire and reconcile.
    pub fn on_scroll(&mut self, scroll_offset: u64, now_ms: u64) {
        self.tween = None;
        self.core.apply_scroll_offset_event(scroll_offset, now_ms);
    }

    // ---- navigation -----------------------------------------------------

    /// Navigates to `index`, centering its card in the viewport.
    ///
    /// Dropped (not queued) while animating or dragging. Callers are
    /// responsible for supplying an in-range index (`prev`/`next`, snap logic,
    /// and pagination always do); out-of-range indices no-op in release
    /// builds.
    ///
    /// The current index and pagination update immediately (optimistically);
    /// after [`NAV_SETTLE_MS`] the state is re-derived from the actual scroll
    /// position, correcting for any clamping the scroll performed.
    pub fn go_to(&mut self, index: usize, now_ms: u64) {
        if self.is_animating() || self.is_dragging() {
            return;
        }
        debug_assert!(
            self.core.is_empty() || index < self.core.count(),
            "go_to out of range (index={index}, count={})",
            self.core.count()
        );
        let Some(target) = self.core.center_offset(index) else {
            return;
        };
        let target = self.core.clamp_scroll_offset(target);
        let from = self.core.scroll_offset();
        self.tween = Some(Tween::new(from, target, now_ms, NAV_SETTLE_MS, self.easing));
        self.phase = Phase::Navigating {
            settle_at_ms: now_ms + NAV_SETTLE_MS,
        };
        self.core.set_current_index(index);
    }

    /// No-op while animating or at the first card.
    pub fn prev(&mut self, now_ms: u64) {
        if self.is_animating() || self.core.current_index() == 0 {
            return;
        }
        self.go_to(self.core.current_index() - 1, now_ms);
    }

    /// No-op while animating or at the last card.
    pub fn next(&mut self, now_ms: u64) {
        let count = self.core.count();
        if self.is_animating() || count == 0 || self.core.current_index() + 1 >= count {
            return;
        }
        self.go_to(self.core.current_index() + 1, now_ms);
    }

    pub fn on_key(&mut self, key: NavKey, now_ms: u64) {
        match key {
            NavKey::Left => self.prev(now_ms),
            NavKey::Right => self.next(now_ms),
        }
    }

    // ---- dragging -------------------------------------------------------

    /// Starts a pointer drag. Returns `false` when rejected.
    ///
    /// Rejected while a centering scroll is in flight (drag and animated
    /// navigation never overlap). A drag that begins during a momentum glide
    /// is allowed and takes the glide over.
    pub fn drag_start(&mut self, x: f32, now_ms: u64) -> bool {
        if self.is_animating() {
            return false;
        }
        self.tween = None;
        self.phase = Phase::Dragging(DragSession::begin(x, self.core.scroll_offset(), now_ms));
        true
    }

    /// Feeds a pointer-move sample, tracking the pointer with an instant
    /// scroll (no tween, no lag).
    pub fn drag_move(&mut self, x: f32, now_ms: u64) {
        let dragged = {
            let Phase::Dragging(session) = &mut self.phase else {
                return;
            };
            session.sample(x, now_ms);
            session.dragged_offset()
        };
        let offset = if dragged <= 0 { 0 } else { dragged as u64 };
        let offset = self.core.clamp_scroll_offset(offset);
        self.core.apply_scroll_offset_event(offset, now_ms);
    }

    /// Ends the drag: a flick glides on with momentum before snapping, a slow
    /// release snaps straight to the nearest card.
    pub fn drag_end(&mut self, now_ms: u64) {
        let session = match mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Dragging(session) => session,
            other => {
                self.phase = other;
                return;
            }
        };

        match session.release() {
            DragRelease::Flick { velocity } => {
                let from = self.core.scroll_offset();
                let target =
                    drag::momentum_target(from, velocity, self.core.max_scroll_offset());
                self.tween = Some(Tween::new(
                    from,
                    target,
                    now_ms,
                    drag::MOMENTUM_GLIDE_MS,
                    self.easing,
                ));
                self.phase = Phase::Momentum {
                    snap_at_ms: now_ms + drag::MOMENTUM_GLIDE_MS,
                };
            }
            DragRelease::Settle => {
                let index = self.core.nearest_index(self.core.scroll_offset());
                self.go_to(index, now_ms);
            }
        }
    }

    // ---- frame loop -----------------------------------------------------

    /// Advances the controller.
    ///
    /// - Samples the active tween (if any) into the engine and returns the new
    ///   offset for the embedder to apply.
    /// - Fires the momentum → snap transition and the settle reconciliation
    ///   when their deadlines pass.
    /// - Runs the scroll-settle debounce, re-deriving index and edge state
    ///   once scrolling goes quiet. While a centering scroll is in flight the
    ///   optimistic index holds; reconciliation happens once at the settle
    ///   deadline.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let mut applied = None;
        if let Some(tween) = self.tween {
            let off = tween.sample(now_ms);
            self.core.apply_scroll_offset_event_clamped(off, now_ms);
            if tween.is_done(now_ms) {
                self.tween = None;
                self.core.set_is_scrolling(false);
            }
            applied = Some(self.core.scroll_offset());
        }

        match self.phase {
            Phase::Momentum { snap_at_ms } if now_ms >= snap_at_ms => {
                self.phase = Phase::Idle;
                self.tween = None;
                let index = self.core.nearest_index(self.core.scroll_offset());
                self.go_to(index, now_ms);
            }
            Phase::Navigating { settle_at_ms } if now_ms >= settle_at_ms => {
                self.phase = Phase::Idle;
                self.tween = None;
                self.core.batch_update(|c| {
                    c.set_is_scrolling(false);
                    c.refresh_from_scroll_position();
                });
            }
            _ => {}
        }

        if !self.is_animating() && self.core.update_scrolling(now_ms) {
            self.core.refresh_from_scroll_position();
        }

        applied
    }
}

/// One-shot swipe affordance hint.
///
/// Plays [`HINT_DELAY_MS`] after construction for [`HINT_DURATION_MS`], and
/// only if the track is still at its start and the user has not asked for
/// reduced motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwipeHint {
    created_ms: u64,
}

impl SwipeHint {
    pub fn new(now_ms: u64) -> Self {
        Self { created_ms: now_ms }
    }

    pub fn active(&self, now_ms: u64, scroll_offset: u64, reduced_motion: bool) -> bool {
        if reduced_motion || scroll_offset != 0 {
            return false;
        }
        let since = now_ms.saturating_sub(self.created_ms);
        (HINT_DELAY_MS..HINT_DELAY_MS + HINT_DURATION_MS).contains(&since)
    }
}
