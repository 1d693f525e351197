//! Contact form draft. Submission is acknowledged locally; nothing is sent.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::config::CONTACT_ACKNOWLEDGEMENT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self == &Self::default()
    }

    /// Accept the draft: clear every field and return the acknowledgement.
    pub fn submit(&mut self) -> &'static str {
        log::debug!(
            "contact form submitted ({} chars of message)",
            self.message.chars().count()
        );
        *self = Self::default();
        CONTACT_ACKNOWLEDGEMENT
    }
}
