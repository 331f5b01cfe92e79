//! Rule-based field extractors for claim documents.

pub mod amount;
pub mod attachments;
pub mod contact;
pub mod label;
pub mod patterns;

pub use amount::{extract_damage, parse_damage, DamageExtractor};
pub use attachments::{extract_attachments, AttachmentExtractor};
pub use contact::{extract_contact_details, ContactExtractor};
pub use label::{Casing, LabelExtractor, TEXT_RULES};
pub use patterns::*;

/// Trait for field extractors.
///
/// Extractors are pure: each scans the whole text on its own and a missing
/// match is reported as `None`, never as an error.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}
