//! Page navigation state: the navbar scroll affordance, anchor scroll
//! targets, and active-section resolution for nav-link highlighting.

/// Scroll depth past which the navbar renders its condensed treatment.
pub const SCROLLED_THRESHOLD: u64 = 20;

/// Fixed navbar height, subtracted from anchor scroll targets so a jumped-to
/// section is not hidden underneath it.
pub const ANCHOR_OFFSET: u64 = 60;

pub fn is_scrolled(scroll_y: u64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Scroll target for a smooth jump to a section.
pub fn anchor_target(section_start: u64) -> u64 {
    section_start.saturating_sub(ANCHOR_OFFSET)
}

/// A section's vertical extent on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    pub start: u64,
    pub end: u64,
}

/// Resolves which section the nav should highlight.
///
/// A section is a candidate while it intersects the probe band spanning
/// `[scroll_y + 20% viewport, scroll_y + 40% viewport)` — the upper-third
/// band a shrunken observer root would report on. When several sections
/// intersect (short sections near a boundary), the lowest one on the page
/// wins. Returns `None` when nothing intersects, e.g. above the first
/// section.
pub fn active_section(sections: &[Section], scroll_y: u64, viewport: u64) -> Option<usize> {
    let band_start = scroll_y.saturating_add(viewport / 5);
    let band_end = scroll_y.saturating_add(viewport * 2 / 5);

    let mut active = None;
    for (index, section) in sections.iter().enumerate() {
        if section.start < band_end && section.end > band_start {
            active = Some(index);
        }
    }
    active
}
