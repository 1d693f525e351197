//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and the project gallery while reading/writing
//! router, modal and contact state from Leptos context providers.

pub mod glass_balls;
pub mod nav_bar;
pub mod page_link;
pub mod page_section;
pub mod project_card;
pub mod project_modal;
