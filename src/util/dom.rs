//! Small web-sys wrappers for the window, document, and body.

#[cfg(feature = "csr")]
use crate::error::DomError;

#[cfg(feature = "csr")]
pub fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

#[cfg(feature = "csr")]
pub fn document() -> Result<web_sys::Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

#[cfg(feature = "csr")]
pub fn body() -> Result<web_sys::HtmlElement, DomError> {
    document()?.body().ok_or_else(|| DomError::missing("body"))
}

/// Smooth-scroll the viewport back to the top.
pub fn scroll_to_top() {
    #[cfg(feature = "csr")]
    {
        match window() {
            Ok(window) => {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
            Err(e) => log::debug!("scroll to top skipped: {e}"),
        }
    }
}

/// Lock or restore page scroll via `body.style.overflow`.
pub fn set_scroll_locked(locked: bool) {
    #[cfg(feature = "csr")]
    {
        let result = body().and_then(|body| {
            let value = if locked { "hidden" } else { "" };
            body.style().set_property("overflow", value)?;
            Ok(())
        });
        if let Err(e) = result {
            log::debug!("scroll lock update skipped: {e}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}
