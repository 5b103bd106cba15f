//! Light/dark theme state.
//!
//! Precedence: an explicitly stored preference always wins over the system
//! preference; the system preference only shows through (and keeps updating)
//! while nothing has been stored. The storage itself is the embedder's
//! concern — `Theme` round-trips through serde for it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    stored: Option<Theme>,
    system: Theme,
}

impl ThemeState {
    pub fn new(stored: Option<Theme>, system: Theme) -> Self {
        Self { stored, system }
    }

    /// The theme to render: stored preference, else system preference.
    pub fn resolved(&self) -> Theme {
        self.stored.unwrap_or(self.system)
    }

    pub fn stored(&self) -> Option<Theme> {
        self.stored
    }

    /// Flips the resolved theme and records the result as the stored
    /// preference. Returns the new theme (for the embedder to persist).
    pub fn toggle(&mut self) -> Theme {
        let next = self.resolved().toggled();
        self.stored = Some(next);
        next
    }

    /// Records an explicit choice.
    pub fn set(&mut self, theme: Theme) {
        self.stored = Some(theme);
    }

    /// The system preference changed. Only affects the resolved theme while
    /// no explicit choice has been stored.
    pub fn set_system(&mut self, system: Theme) {
        self.system = system;
    }
}
