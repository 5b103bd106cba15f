//! Decorative interaction math: card tilt, hover scales, reveal stagger, and
//! the hero gradient fade.
//!
//! All of it is pure; the embedder turns the numbers into transforms/styles.
//! Callers should skip tilt and hint effects entirely when the user asks for
//! reduced motion.

/// Divisor converting pointer distance from the card center into tilt degrees.
const TILT_DIVISOR: f32 = 20.0;

/// Vertical lift of a hovered, tilting card (logical px).
pub const HOVER_LIFT: f32 = 8.0;

/// Hover scale for tech tags.
pub const TAG_HOVER_SCALE: f32 = 1.05;

/// Hover scale for skill icons.
pub const ICON_HOVER_SCALE: f32 = 1.15;

/// Per-item delay for staggered reveal groups.
pub const STAGGER_STEP_MS: u64 = 100;

/// Base delay before the hero reveal sequence starts.
pub const HERO_BASE_DELAY_MS: u64 = 200;

/// Scroll depth over which the hero gradient fades out completely.
const HERO_GRADIENT_FADE_PX: f32 = 500.0;

/// Tilt of a hovered card, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

/// Pointer-position tilt for a card of `width` × `height` with the pointer at
/// `(x, y)` in card-local coordinates.
///
/// Rotation grows with distance from the card center; a pointer below center
/// tips the card toward the viewer, a pointer left of center turns it right.
pub fn tilt(width: f32, height: f32, x: f32, y: f32) -> Tilt {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    Tilt {
        rotate_x: (y - center_y) / TILT_DIVISOR,
        rotate_y: (center_x - x) / TILT_DIVISOR,
    }
}

/// Reveal delay for the `index`-th item of a staggered group.
pub fn stagger_delay_ms(index: usize) -> u64 {
    index as u64 * STAGGER_STEP_MS
}

/// Reveal delay for the `index`-th hero element.
pub fn hero_delay_ms(index: usize) -> u64 {
    HERO_BASE_DELAY_MS + stagger_delay_ms(index)
}

/// Hero gradient opacity, fading from 1 to 0 over the first 500px of scroll.
pub fn hero_gradient_opacity(scroll_y: u64) -> f32 {
    (1.0 - scroll_y as f32 / HERO_GRADIENT_FADE_PX).max(0.0)
}
