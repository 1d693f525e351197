//! `History` backends: the browser's session history and an in-memory stack.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::error::DomError;
use crate::state::router::{History, HistoryEntry};

/// `window.history` + `window.location.hash`.
///
/// Holds no handles; each call looks the window up again, which keeps the
/// type `Send + Sync` for storage in a signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn fragment(&self) -> String {
        #[cfg(feature = "csr")]
        {
            match crate::util::dom::window().and_then(|w| Ok(w.location().hash()?)) {
                Ok(hash) => hash,
                Err(e) => {
                    log::debug!("could not read location hash: {e}");
                    String::new()
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            String::new()
        }
    }

    fn push(&mut self, entry: &HistoryEntry) -> Result<(), DomError> {
        #[cfg(feature = "csr")]
        {
            let state = js_sys::JSON::parse(&entry.to_json()?)?;
            crate::util::dom::window()?
                .history()?
                .push_state_with_url(&state, "", Some(&entry.fragment()))?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = entry;
            Ok(())
        }
    }

    fn replace(&mut self, entry: &HistoryEntry) -> Result<(), DomError> {
        #[cfg(feature = "csr")]
        {
            let state = js_sys::JSON::parse(&entry.to_json()?)?;
            crate::util::dom::window()?
                .history()?
                .replace_state_with_url(&state, "", Some(&entry.fragment()))?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = entry;
            Ok(())
        }
    }
}

/// Decode the `state` of a `popstate` event. Null/undefined/foreign state
/// decodes to `None`.
#[cfg(feature = "csr")]
pub fn entry_from_state(state: &wasm_bindgen::JsValue) -> Option<HistoryEntry> {
    if state.is_null() || state.is_undefined() {
        return None;
    }
    let raw = match js_sys::JSON::stringify(state) {
        Ok(raw) => String::from(raw),
        Err(e) => {
            log::debug!("unreadable history state: {:?}", e);
            return None;
        }
    };
    match HistoryEntry::from_json(&raw) {
        Ok(entry) => Some(entry),
        Err(e) => {
            log::debug!("foreign history state {raw}: {e}");
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Slot {
    fragment: String,
    state: Option<HistoryEntry>,
}

/// Session history kept in memory: an entry list with a cursor. Pushing
/// discards any forward entries, like a browser.
#[derive(Clone, Debug)]
pub struct MemoryHistory {
    entries: Vec<Slot>,
    cursor: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::with_fragment("")
    }
}

impl MemoryHistory {
    /// Fresh history whose only entry was loaded at `fragment` with no state.
    #[must_use]
    pub fn with_fragment(fragment: &str) -> Self {
        Self {
            entries: vec![Slot { fragment: fragment.to_owned(), state: None }],
            cursor: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// State of the entry under the cursor.
    #[must_use]
    pub fn current_state(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor).and_then(|slot| slot.state.as_ref())
    }

    /// Step back one entry. Returns `false` at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one entry. Returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

impl History for MemoryHistory {
    fn fragment(&self) -> String {
        self.entries.get(self.cursor).map(|slot| slot.fragment.clone()).unwrap_or_default()
    }

    fn push(&mut self, entry: &HistoryEntry) -> Result<(), DomError> {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(Slot { fragment: entry.fragment(), state: Some(entry.clone()) });
        self.cursor = self.entries.len() - 1;
        Ok(())
    }

    fn replace(&mut self, entry: &HistoryEntry) -> Result<(), DomError> {
        let slot = Slot { fragment: entry.fragment(), state: Some(entry.clone()) };
        match self.entries.get_mut(self.cursor) {
            Some(current) => *current = slot,
            None => self.entries.push(slot),
        }
        Ok(())
    }
}
