//! Page sections, one per `PageId`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is always mounted; `PageSection` toggles `.active` from router
//! state so switching pages never re-renders content.

pub mod about;
pub mod contact;
pub mod experience;
pub mod home;
pub mod projects;
pub mod resume;
