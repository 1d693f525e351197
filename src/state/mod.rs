//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module owns one piece of UI state as a plain struct with explicit
//! transitions. The app wraps them in `RwSignal`s and provides them through
//! Leptos context; the view layer is the only DOM sync step.

pub mod contact;
pub mod modal;
pub mod router;
