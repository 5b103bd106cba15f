//! Shared page-level UI state.
//!
//! Components receive this object at construction instead of mutating
//! page-global style/class state directly: each visual flag has exactly one
//! owner and one typed setter, and listener registration is auditable —
//! every subscription has an id, and a component releases everything it
//! registered through one scoped teardown call.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::Theme;

/// A callback fired when any of the page-level flags changes.
pub type UiListener = Arc<dyn Fn(&UiState) + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

pub struct UiState {
    theme: Theme,
    scrolled: bool,
    menu_open: bool,
    listeners: Vec<(SubscriptionId, UiListener)>,
    next_id: u64,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            scrolled: false,
            menu_open: false,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme == theme {
            return;
        }
        self.theme = theme;
        self.notify();
    }

    pub fn set_scrolled(&mut self, scrolled: bool) {
        if self.scrolled == scrolled {
            return;
        }
        self.scrolled = scrolled;
        self.notify();
    }

    pub fn set_menu_open(&mut self, open: bool) {
        if self.menu_open == open {
            return;
        }
        self.menu_open = open;
        self.notify();
    }

    /// Flips the mobile menu and returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.set_menu_open(!self.menu_open);
        self.menu_open
    }

    /// Registers a change listener and returns its id.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&UiState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when the id was already released.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(self);
        }
    }
}

impl core::fmt::Debug for UiState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UiState")
            .field("theme", &self.theme)
            .field("scrolled", &self.scrolled)
            .field("menu_open", &self.menu_open)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Tracks the subscriptions a component registered so they can all be
/// released with a single teardown call when the component is disposed.
#[derive(Debug, Default)]
pub struct ScopedSubscriptions {
    ids: Vec<SubscriptionId>,
}

impl ScopedSubscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes on behalf of the owning component and tracks the id.
    pub fn subscribe(
        &mut self,
        ui: &mut UiState,
        listener: impl Fn(&UiState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = ui.subscribe(listener);
        self.ids.push(id);
        id
    }

    /// Tracks an id obtained elsewhere.
    pub fn track(&mut self, id: SubscriptionId) {
        self.ids.push(id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Releases every tracked subscription.
    pub fn release(&mut self, ui: &mut UiState) {
        for id in self.ids.drain(..) {
            ui.unsubscribe(id);
        }
    }
}
