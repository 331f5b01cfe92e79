//! Attachment inference from keyword mentions.

use super::FieldExtractor;
use crate::models::claim::Attachment;

/// Keyword (matched case-insensitively anywhere in the text) and the tag it implies.
const ATTACHMENT_KEYWORDS: [(&str, Attachment); 2] = [
    ("photo", Attachment::Photos),
    ("report", Attachment::Report),
];

/// Infers supporting attachments from keyword mentions.
pub struct AttachmentExtractor;

impl AttachmentExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AttachmentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AttachmentExtractor {
    type Output = Vec<Attachment>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let lowered = text.to_lowercase();
        let tags: Vec<Attachment> = ATTACHMENT_KEYWORDS
            .iter()
            .filter(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, tag)| *tag)
            .collect();

        (!tags.is_empty()).then_some(tags)
    }
}

/// Extract attachment tags, empty when no keyword is present.
pub fn extract_attachments(text: &str) -> Vec<Attachment> {
    AttachmentExtractor::new().extract(text).unwrap_or_default()
}
