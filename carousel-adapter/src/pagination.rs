/// A pagination marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

impl Dot {
    /// 1-based position, for labels like "Go to project 3".
    pub fn ordinal(&self) -> usize {
        self.index + 1
    }
}

/// Stateless projection of (card count, current index) into pagination dots.
///
/// Exactly one dot is active: the one at the controller's current index.
/// `rebuild` regenerates the projection when the card count changes; `sync`
/// patches the active marker in place on index-only changes. A click on dot
/// `i` is wired by the embedder to `Controller::go_to(i)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    count: usize,
    active: usize,
}

impl Pagination {
    pub fn new(count: usize) -> Self {
        Self { count, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Regenerates the projection for a new card count, resetting the active
    /// marker to the first dot.
    pub fn rebuild(&mut self, count: usize) {
        self.count = count;
        self.active = 0;
    }

    /// Moves the active marker to `current_index`.
    pub fn sync(&mut self, current_index: usize) {
        self.active = current_index;
    }

    pub fn is_active(&self, index: usize) -> bool {
        index < self.count && index == self.active
    }

    /// Iterates the dots without allocating.
    pub fn for_each_dot(&self, mut f: impl FnMut(Dot)) {
        for index in 0..self.count {
            f(Dot {
                index,
                active: self.is_active(index),
            });
        }
    }
}
