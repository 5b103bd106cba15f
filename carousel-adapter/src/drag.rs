//! Pointer-drag tracking with flick detection.
//!
//! A [`DragSession`] is created on pointer-down, fed one sample per move
//! event, and consumed on release. Velocity is the slope of the last sample
//! pair (px/ms), deliberately not averaged: fingers decelerate monotonically
//! toward release, so the final slope is the best predictor of flick
//! direction and strength.

/// Multiplier applied to pointer travel while dragging.
///
/// Values above 1.0 give a faster-than-finger feel on wide tracks.
pub const DRAG_SPEED_MULTIPLIER: f32 = 1.5;

/// Release speed (px/ms) above which a drag counts as a flick.
///
/// Separates a deliberate flick from a slow drag-and-release; below this the
/// track snaps straight to the nearest card.
pub const FLICK_VELOCITY: f32 = 0.5;

/// Milliseconds of continued travel projected per px/ms of release velocity.
pub const MOMENTUM_GAIN: f32 = 200.0;

/// How long the momentum glide runs before snapping to the nearest card.
pub const MOMENTUM_GLIDE_MS: u64 = 300;

/// An ephemeral pointer-drag session.
///
/// Exists only between drag-start and release; never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    start_x: f32,
    base_offset: u64,
    last_x: f32,
    last_sample_ms: u64,
    velocity: f32,
}

impl DragSession {
    /// Starts a session at pointer position `x`, with the scroll offset at
    /// drag-start as the baseline.
    pub fn begin(x: f32, base_offset: u64, now_ms: u64) -> Self {
        Self {
            start_x: x,
            base_offset,
            last_x: x,
            last_sample_ms: now_ms,
            velocity: 0.0,
        }
    }

    /// Feeds a pointer-move sample.
    ///
    /// Zero-dt samples keep the previous velocity (duplicate events from the
    /// same frame carry no slope information).
    pub fn sample(&mut self, x: f32, now_ms: u64) {
        let dt = now_ms.saturating_sub(self.last_sample_ms);
        if dt > 0 {
            self.velocity = (x - self.last_x) / dt as f32;
        }
        self.last_x = x;
        self.last_sample_ms = now_ms;
    }

    /// Velocity of the last sample pair, px/ms. Positive means the pointer
    /// moves toward larger x (the track scrolls backward).
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// The scroll offset tracking the pointer, before clamping to the track.
    ///
    /// Pointer travel is amplified by [`DRAG_SPEED_MULTIPLIER`] and applied
    /// against the baseline; may be negative when dragging past the start.
    pub fn dragged_offset(&self) -> i64 {
        let walk = (self.last_x - self.start_x) * DRAG_SPEED_MULTIPLIER;
        self.base_offset as i64 - walk as i64
    }

    /// Consumes the session, classifying the release.
    pub fn release(self) -> DragRelease {
        if self.velocity > FLICK_VELOCITY || self.velocity < -FLICK_VELOCITY {
            DragRelease::Flick {
                velocity: self.velocity,
            }
        } else {
            DragRelease::Settle
        }
    }
}

/// Outcome of a drag release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragRelease {
    /// Fast release: glide on with momentum before snapping.
    Flick { velocity: f32 },
    /// Slow release: snap straight to the nearest card.
    Settle,
}

/// Projects the momentum glide target from the release velocity.
///
/// The projected travel is `velocity * MOMENTUM_GAIN`, applied in the drag
/// direction and clamped into `[0, max_scroll]` so an energetic flick never
/// overshoots the track.
pub fn momentum_target(offset: u64, velocity: f32, max_scroll: u64) -> u64 {
    let travel = (velocity * MOMENTUM_GAIN) as i64;
    let target = (offset as i64).saturating_sub(travel);
    if target <= 0 {
        0
    } else {
        (target as u64).min(max_scroll)
    }
}
