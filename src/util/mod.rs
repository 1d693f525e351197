//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Browser calls compile only with the `csr` feature; without it each
//! helper degrades to a no-op so state logic tests run natively.

pub mod dom;
pub mod glass_balls;
pub mod history;
pub mod notice;
pub mod scroll_reveal;
