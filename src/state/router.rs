//! Hash-based view routing with back/forward support.
//!
//! DESIGN
//! ======
//! The current page is an explicit `PageId` owned by `ViewRouter`, never read
//! back from DOM class markers. Which page and nav link carry `.active` is a
//! pure function of `RouterState`; the Leptos view renders it.
//!
//! History integration goes through the `History` trait so navigation and
//! back/forward behavior can be exercised against `MemoryHistory` in tests and
//! against the browser in the app.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use serde::{Deserialize, Serialize};

use crate::error::DomError;

/// Top-level page sections, in navigation order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageId {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Resume,
    Contact,
}

impl PageId {
    pub const ALL: [PageId; 6] = [
        PageId::Home,
        PageId::About,
        PageId::Experience,
        PageId::Projects,
        PageId::Resume,
        PageId::Contact,
    ];

    /// Identifier used for the section `id`, `data-page`, and URL fragment.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Experience => "experience",
            PageId::Projects => "projects",
            PageId::Resume => "resume",
            PageId::Contact => "contact",
        }
    }

    /// Nav link text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::About => "About",
            PageId::Experience => "Experience",
            PageId::Projects => "Projects",
            PageId::Resume => "Resume",
            PageId::Contact => "Contact",
        }
    }

    /// Parse a page identifier. Unknown ids yield `None`.
    #[must_use]
    pub fn parse(id: &str) -> Option<PageId> {
        Self::ALL.into_iter().find(|page| page.as_str() == id)
    }

    /// Resolve a URL fragment (`#projects`, `projects`, or empty) at startup.
    /// Empty and unknown fragments both resolve to `fallback`.
    #[must_use]
    pub fn from_fragment(fragment: &str, fallback: PageId) -> PageId {
        let id = fragment.trim().trim_start_matches('#');
        if id.is_empty() {
            return fallback;
        }
        Self::parse(id).unwrap_or_else(|| {
            log::debug!("unknown page fragment {id:?}, falling back to {}", fallback.as_str());
            fallback
        })
    }
}

/// State object pushed onto browser history for each navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub page: String,
}

impl HistoryEntry {
    #[must_use]
    pub fn for_page(page: PageId) -> Self {
        Self { page: page.as_str().to_owned() }
    }

    /// URL fragment paired with this entry.
    #[must_use]
    pub fn fragment(&self) -> String {
        format!("#{}", self.page)
    }

    pub fn to_json(&self) -> Result<String, DomError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, DomError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Browser-history seam used by `ViewRouter`.
pub trait History {
    /// Current URL fragment including the leading `#`, or empty.
    fn fragment(&self) -> String;
    /// Append a new entry (pushState).
    fn push(&mut self, entry: &HistoryEntry) -> Result<(), DomError>;
    /// Overwrite the current entry in place (replaceState).
    fn replace(&mut self, entry: &HistoryEntry) -> Result<(), DomError>;
}

/// Render-facing navigation state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouterState {
    pub current: PageId,
    /// Mobile nav menu expanded.
    pub menu_open: bool,
}

impl RouterState {
    /// Whether the page section and its nav link carry the active marker.
    #[must_use]
    pub fn is_active(&self, page: PageId) -> bool {
        self.current == page
    }

    /// Activate `page` and collapse the mobile menu.
    pub fn show(&mut self, page: PageId) {
        self.current = page;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

/// Result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// Page shown and a new history entry pushed.
    Pushed(PageId),
    /// Page shown from a restored history entry; nothing pushed.
    Restored(PageId),
    /// Request named no known page; state unchanged.
    Ignored,
}

impl NavOutcome {
    /// Page that became active, if any.
    #[must_use]
    pub fn page(self) -> Option<PageId> {
        match self {
            NavOutcome::Pushed(page) | NavOutcome::Restored(page) => Some(page),
            NavOutcome::Ignored => None,
        }
    }
}

/// Owns the current page and keeps it in sync with history.
#[derive(Clone, Debug)]
pub struct ViewRouter<H> {
    state: RouterState,
    history: H,
}

impl<H: History> ViewRouter<H> {
    /// Resolve the initial page from the URL fragment and stamp the current
    /// history entry with it so popping back here restores a page.
    pub fn start(mut history: H, default_page: PageId) -> Self {
        let page = PageId::from_fragment(&history.fragment(), default_page);
        if let Err(e) = history.replace(&HistoryEntry::for_page(page)) {
            log::warn!("failed to stamp initial history entry: {e}");
        }
        log::debug!("router started on {}", page.as_str());
        Self { state: RouterState { current: page, menu_open: false }, history }
    }

    #[must_use]
    pub fn state(&self) -> RouterState {
        self.state
    }

    #[must_use]
    pub fn current(&self) -> PageId {
        self.state.current
    }

    #[must_use]
    pub fn is_active(&self, page: PageId) -> bool {
        self.state.is_active(page)
    }

    #[must_use]
    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Link/button click: show the page and push a history entry.
    pub fn navigate(&mut self, id: &str) -> NavOutcome {
        let Some(page) = PageId::parse(id) else {
            log::debug!("ignoring navigation to unknown page {id:?}");
            return NavOutcome::Ignored;
        };
        self.state.show(page);
        if let Err(e) = self.history.push(&HistoryEntry::for_page(page)) {
            log::warn!("failed to push history entry for {}: {e}", page.as_str());
        }
        log::debug!("navigated to {}", page.as_str());
        NavOutcome::Pushed(page)
    }

    /// History pop (back/forward): show the restored page without pushing.
    pub fn restore(&mut self, entry: Option<&HistoryEntry>) -> NavOutcome {
        let Some(page) = entry.and_then(|e| PageId::parse(&e.page)) else {
            log::debug!("ignoring history pop without a known page: {entry:?}");
            return NavOutcome::Ignored;
        };
        self.state.show(page);
        log::debug!("restored {} from history", page.as_str());
        NavOutcome::Restored(page)
    }

    pub fn toggle_menu(&mut self) {
        self.state.toggle_menu();
    }
}
