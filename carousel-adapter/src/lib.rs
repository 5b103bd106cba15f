//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the core math and state.
//! This crate provides the framework-neutral pieces an embedding layer needs
//! to turn it into a finished page component:
//!
//! - A navigation controller (tween scrolling, settle/reconcile, keyboard)
//! - Drag/momentum tracking with snap-to-card
//! - Pagination dot projection
//! - The surrounding page-interaction state: theme, nav highlight, counters,
//!   tilt math, form validation, and shared UI flags with auditable
//!   subscriptions
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui
//! bindings): the embedder wires real pointer/scroll/keyboard events in and
//! applies the offsets and flags that come back out.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod counter;
mod drag;
mod form;
mod interactions;
mod navigation;
mod pagination;
mod theme;
mod tween;
mod ui_state;

#[cfg(test)]
mod tests;

pub use controller::{
    Controller, HINT_DELAY_MS, HINT_DURATION_MS, NAV_SETTLE_MS, NavKey, SwipeHint,
};
pub use counter::{COUNT_UP_MS, CountUp};
pub use drag::{
    DRAG_SPEED_MULTIPLIER, DragRelease, DragSession, FLICK_VELOCITY, MOMENTUM_GAIN,
    MOMENTUM_GLIDE_MS, momentum_target,
};
pub use form::{
    FieldKind, FieldStatus, FormState, MESSAGE_FADE_MS, MESSAGE_VISIBLE_MS, MessageKind,
    MessagePhase, StatusMessage, is_blank, is_valid_email, validate_field,
};
pub use interactions::{
    HERO_BASE_DELAY_MS, HOVER_LIFT, ICON_HOVER_SCALE, STAGGER_STEP_MS, TAG_HOVER_SCALE, Tilt,
    hero_delay_ms, hero_gradient_opacity, stagger_delay_ms, tilt,
};
pub use navigation::{
    ANCHOR_OFFSET, SCROLLED_THRESHOLD, Section, active_section, anchor_target, is_scrolled,
};
pub use pagination::{Dot, Pagination};
pub use theme::{Theme, ThemeState};
pub use tween::{Easing, Tween};
pub use ui_state::{ScopedSubscriptions, SubscriptionId, UiListener, UiState};
