//! # portfolio
//!
//! Leptos + WASM single-page portfolio site: hero, project gallery with a
//! detail modal, contact form, and hash-based page navigation with
//! back/forward support.
//!
//! State machines (router, modal, contact draft) and generators (glass balls,
//! scroll reveal bookkeeping) are plain Rust and test natively. Everything
//! that touches the browser is compiled only with the `csr` feature.

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
pub fn start() {
    let config = config::SiteConfig::from_build_env();

    console_error_panic_hook::set_once();
    if let Some(level) = config.log_level.to_level() {
        if let Err(e) = console_log::init_with_level(level) {
            web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
        }
    }

    log::info!("mounting portfolio (default page: {})", config.default_page.as_str());
    leptos::mount::mount_to_body(move || {
        use leptos::prelude::*;

        use crate::app::App;
        view! { <App config=config/> }
    });
}
