//! Claim intake record produced by field extraction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A semantic field of a First Notice of Loss document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    PolicyNumber,
    PolicyholderName,
    EffectiveDates,
    IncidentDate,
    IncidentTime,
    IncidentLocation,
    Description,
    Claimant,
    ContactDetails,
    AssetType,
    AssetId,
    EstimatedDamage,
    ClaimType,
    Attachments,
    InitialEstimate,
}

impl Field {
    /// Every field, in output order.
    pub const ALL: [Field; 15] = [
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
        Field::AssetId,
        Field::EstimatedDamage,
        Field::ClaimType,
        Field::Attachments,
        Field::InitialEstimate,
    ];

    /// Field name as it appears in the output record.
    pub fn name(&self) -> &'static str {
        match self {
            Field::PolicyNumber => "policyNumber",
            Field::PolicyholderName => "policyholderName",
            Field::EffectiveDates => "effectiveDates",
            Field::IncidentDate => "incidentDate",
            Field::IncidentTime => "incidentTime",
            Field::IncidentLocation => "incidentLocation",
            Field::Description => "description",
            Field::Claimant => "claimant",
            Field::ContactDetails => "contactDetails",
            Field::AssetType => "assetType",
            Field::AssetId => "assetId",
            Field::EstimatedDamage => "estimatedDamage",
            Field::ClaimType => "claimType",
            Field::Attachments => "attachments",
            Field::InitialEstimate => "initialEstimate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contact channels found anywhere in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactDetails {
    /// True when neither an email nor a phone number was found.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none()
    }
}

/// Supporting material mentioned in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attachment {
    Photos,
    Report,
}

impl Attachment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Attachment::Photos => "photos",
            Attachment::Report => "report",
        }
    }
}

/// Structured claim data extracted from one document.
///
/// Serializes with camelCase keys in [`Field::ALL`] order. Absent optional
/// values serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    pub policy_number: Option<String>,
    pub policyholder_name: Option<String>,
    pub effective_dates: Option<String>,
    pub incident_date: Option<String>,
    pub incident_time: Option<String>,
    pub incident_location: Option<String>,
    /// Empty when the document has no description line.
    pub description: String,
    pub claimant: Option<String>,
    pub contact_details: ContactDetails,
    pub asset_type: Option<String>,
    pub asset_id: Option<String>,
    pub estimated_damage: Option<f64>,
    /// Lower-cased on capture.
    pub claim_type: Option<String>,
    pub attachments: Vec<Attachment>,
    /// Mirrors `estimated_damage`.
    pub initial_estimate: Option<f64>,
}

/// Borrowed view of a single field value, independent of its shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Number(Option<f64>),
    Contacts(&'a ContactDetails),
    Tags(&'a [Attachment]),
}

impl FieldValue<'_> {
    /// `None`, the empty string, the empty sequence and the empty mapping all
    /// count as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_none_or(str::is_empty),
            FieldValue::Number(number) => number.is_none(),
            FieldValue::Contacts(contacts) => contacts.is_empty(),
            FieldValue::Tags(tags) => tags.is_empty(),
        }
    }
}

impl ExtractedFields {
    /// Look up a field by name.
    pub fn get(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::PolicyNumber => FieldValue::Text(self.policy_number.as_deref()),
            Field::PolicyholderName => FieldValue::Text(self.policyholder_name.as_deref()),
            Field::EffectiveDates => FieldValue::Text(self.effective_dates.as_deref()),
            Field::IncidentDate => FieldValue::Text(self.incident_date.as_deref()),
            Field::IncidentTime => FieldValue::Text(self.incident_time.as_deref()),
            Field::IncidentLocation => FieldValue::Text(self.incident_location.as_deref()),
            Field::Description => FieldValue::Text(Some(&self.description)),
            Field::Claimant => FieldValue::Text(self.claimant.as_deref()),
            Field::ContactDetails => FieldValue::Contacts(&self.contact_details),
            Field::AssetType => FieldValue::Text(self.asset_type.as_deref()),
            Field::AssetId => FieldValue::Text(self.asset_id.as_deref()),
            Field::EstimatedDamage => FieldValue::Number(self.estimated_damage),
            Field::ClaimType => FieldValue::Text(self.claim_type.as_deref()),
            Field::Attachments => FieldValue::Tags(&self.attachments),
            Field::InitialEstimate => FieldValue::Number(self.initial_estimate),
        }
    }

    /// Store the result of a label-anchored text rule.
    ///
    /// Returns `false` if `field` does not hold text.
    pub fn set_text(&mut self, field: Field, value: Option<String>) -> bool {
        let slot = match field {
            Field::PolicyNumber => &mut self.policy_number,
            Field::PolicyholderName => &mut self.policyholder_name,
            Field::EffectiveDates => &mut self.effective_dates,
            Field::IncidentDate => &mut self.incident_date,
            Field::IncidentTime => &mut self.incident_time,
            Field::IncidentLocation => &mut self.incident_location,
            Field::Claimant => &mut self.claimant,
            Field::AssetType => &mut self.asset_type,
            Field::AssetId => &mut self.asset_id,
            Field::ClaimType => &mut self.claim_type,
            Field::Description => {
                self.description = value.unwrap_or_default();
                return true;
            }
            Field::ContactDetails
            | Field::EstimatedDamage
            | Field::Attachments
            | Field::InitialEstimate => return false,
        };
        *slot = value;
        true
    }

    /// Number of fields holding a non-empty value.
    pub fn populated_count(&self) -> usize {
        Field::ALL
            .iter()
            .filter(|field| !self.get(**field).is_empty())
            .count()
    }
}

/// Format an amount the way it appears in reasoning text: integral values keep
/// one decimal digit (`10000.0`), very small or very large values switch to
/// exponent form (`1e-05`, `1.5e+16`), others print their shortest exact form.
pub fn format_amount(value: f64) -> String {
    if in_positional_range(value) && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        shortest_repr(value)
    }
}

/// Format a threshold for reasoning text: integral values print without a
/// fraction (`25000`).
pub fn format_threshold(value: f64) -> String {
    if in_positional_range(value) && value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        shortest_repr(value)
    }
}

fn in_positional_range(value: f64) -> bool {
    value == 0.0 || (value.is_finite() && (1e-4..1e16).contains(&value.abs()))
}

fn shortest_repr(value: f64) -> String {
    if !value.is_finite() || in_positional_range(value) {
        return format!("{}", value);
    }

    // `{:e}` gives `1e-5`; the exponent is written signed and two digits wide
    let sci = format!("{:e}", value);
    match sci.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => sci,
    }
}
