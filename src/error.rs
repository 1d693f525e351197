//! Error type for browser/DOM glue.
//!
//! Initializers that hit a missing element short-circuit with one of these
//! and the caller logs it; nothing here is ever surfaced to the visitor.

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("element not found: {selector}")]
    MissingElement { selector: String },
    #[error("javascript error: {0}")]
    Js(String),
    #[error("history state encoding failed: {0}")]
    HistoryState(#[from] serde_json::Error),
}

impl DomError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement { selector: selector.into() }
    }
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
