//! Claim field extraction module.

pub mod rules;

use tracing::debug;

use crate::models::claim::ExtractedFields;

use rules::{
    AttachmentExtractor, ContactExtractor, DamageExtractor, FieldExtractor, TEXT_RULES,
};

/// Runs every field rule over a document and assembles the claim record.
///
/// Rules are independent of each other, so the order they run in does not
/// affect the result.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClaimExtractor;

impl ClaimExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract all fields from document text.
    pub fn extract(&self, text: &str) -> ExtractedFields {
        let mut fields = ExtractedFields::default();

        for rule in TEXT_RULES.iter() {
            let value = rule.extract(text);
            fields.set_text(rule.field, value);
        }

        fields.contact_details = ContactExtractor::new().extract(text).unwrap_or_default();
        fields.estimated_damage = DamageExtractor::new().extract(text);
        fields.initial_estimate = fields.estimated_damage;
        fields.attachments = AttachmentExtractor::new().extract(text).unwrap_or_default();

        debug!(
            "Extracted {} populated fields from {} characters",
            fields.populated_count(),
            text.len()
        );

        fields
    }
}
