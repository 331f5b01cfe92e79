//! Mandatory field checks.

use crate::models::claim::{ExtractedFields, Field};

/// Fields a notice must carry before it can be routed automatically, in the
/// order they are reported.
pub const MANDATORY_FIELDS: [Field; 13] = [
    Field::PolicyNumber,
    Field::PolicyholderName,
    Field::EffectiveDates,
    Field::IncidentDate,
    Field::IncidentTime,
    Field::IncidentLocation,
    Field::Description,
    Field::Claimant,
    Field::ContactDetails,
    Field::AssetType,
    Field::ClaimType,
    Field::Attachments,
    Field::InitialEstimate,
];

/// List the mandatory fields that are absent or empty.
///
/// The result follows [`MANDATORY_FIELDS`] order regardless of which fields
/// are missing.
pub fn find_missing(fields: &ExtractedFields) -> Vec<Field> {
    MANDATORY_FIELDS
        .iter()
        .copied()
        .filter(|field| fields.get(*field).is_empty())
        .collect()
}
