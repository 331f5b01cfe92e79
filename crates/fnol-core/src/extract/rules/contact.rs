//! Contact detail extraction.

use super::FieldExtractor;
use super::patterns::{EMAIL, PHONE};
use crate::models::claim::ContactDetails;

/// Scans the whole document for the first email-shaped and the first
/// phone-shaped token. No validation beyond shape.
pub struct ContactExtractor;

impl ContactExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ContactExtractor {
    type Output = ContactDetails;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let contacts = ContactDetails {
            email: EMAIL.find(text).map(|m| m.as_str().to_string()),
            phone: PHONE.find(text).map(|m| m.as_str().to_string()),
        };

        (!contacts.is_empty()).then_some(contacts)
    }
}

/// Extract contact details, empty when none are present.
pub fn extract_contact_details(text: &str) -> ContactDetails {
    ContactExtractor::new().extract(text).unwrap_or_default()
}
