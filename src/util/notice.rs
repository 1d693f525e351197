//! Static acknowledgements shown to the visitor.

use crate::config::RESUME_ACKNOWLEDGEMENT;

/// Show `message` in a blocking browser alert.
pub fn notify(message: &str) {
    log::info!("notice: {message}");
    #[cfg(feature = "csr")]
    {
        let result = crate::util::dom::window().and_then(|w| Ok(w.alert_with_message(message)?));
        if let Err(e) = result {
            log::warn!("alert failed: {e}");
        }
    }
}

/// Resume download placeholder.
pub fn resume_requested() {
    notify(RESUME_ACKNOWLEDGEMENT);
}
