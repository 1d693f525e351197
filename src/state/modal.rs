//! Project detail modal state.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::catalog::{self, Project};

/// Closed, or open on one catalog index. Nothing survives a close.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    open: Option<usize>,
}

impl ModalState {
    /// Open on `index`. Out-of-range indices leave the state unchanged.
    pub fn open(&mut self, index: usize) -> Option<&'static Project> {
        let project = catalog::project(index);
        match project {
            Some(p) => {
                self.open = Some(index);
                log::debug!("project modal opened: {}", p.title);
            }
            None => log::debug!("no project at index {index}"),
        }
        project
    }

    pub fn close(&mut self) {
        if self.open.take().is_some() {
            log::debug!("project modal closed");
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.open
    }

    /// Record currently displayed, if open.
    #[must_use]
    pub fn project(&self) -> Option<&'static Project> {
        self.open.and_then(catalog::project)
    }
}
