//! A headless card-carousel engine.
//!
//! For adapter-level utilities (drag/momentum tracking, tween scrolling, pagination),
//! see the `carousel-adapter` crate.
//!
//! This crate owns the state a snap-to-card carousel needs to answer at interactive
//! frame rates: card geometry (uniform width + gap), the authoritative current index,
//! scroll offset and max-scroll clamping, offset → nearest-card math, and boundary
//! (edge) flags for navigation affordances.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - viewport size (width of the scrollable area)
//! - scroll offset updates with timestamps
//! - the measured card width once layout has happened
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod options;
mod state;
mod types;


pub use carousel::Carousel;
pub use options::{
    CarouselOptions, DEFAULT_CARD_WIDTH, DEFAULT_EDGE_THRESHOLD, DEFAULT_GAP,
    DEFAULT_SCROLL_SETTLE_MS, OnChangeCallback,
};
pub use state::{CarouselSnapshot, ScrollState};
pub use types::{Card, Edges, ScrollDirection};
