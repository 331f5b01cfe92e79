//! Label-anchored text fields and their registry.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::claim::Field;

use super::FieldExtractor;
use super::patterns::{
    ASSET_ID, ASSET_TYPE, CLAIMANT, CLAIM_TYPE, DESCRIPTION, EFFECTIVE_DATES, INCIDENT_DATE,
    INCIDENT_LOCATION, INCIDENT_TIME, POLICYHOLDER_NAME, POLICY_NUMBER,
};

/// Case handling applied to a captured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    /// Keep the document's casing.
    Preserve,
    /// Lower-case the capture.
    Lower,
}

/// Extracts the value that follows a literal label, e.g. `Claimant: Jane Doe`.
///
/// The first capture group of `pattern` is the value; it is trimmed of
/// surrounding whitespace.
#[derive(Debug, Clone, Copy)]
pub struct LabelExtractor {
    pub field: Field,
    pattern: &'static Regex,
    casing: Casing,
}

impl LabelExtractor {
    pub fn new(field: Field, pattern: &'static Regex) -> Self {
        Self {
            field,
            pattern,
            casing: Casing::Preserve,
        }
    }

    pub fn with_casing(mut self, casing: Casing) -> Self {
        self.casing = casing;
        self
    }
}

impl FieldExtractor for LabelExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = self.pattern.captures(text)?;
        let value = caps.get(1)?.as_str().trim();

        Some(match self.casing {
            Casing::Preserve => value.to_string(),
            Casing::Lower => value.to_lowercase(),
        })
    }
}

lazy_static! {
    /// Every label-anchored text field with its rule, in output order.
    pub static ref TEXT_RULES: Vec<LabelExtractor> = vec![
        LabelExtractor::new(Field::PolicyNumber, &POLICY_NUMBER),
        LabelExtractor::new(Field::PolicyholderName, &POLICYHOLDER_NAME),
        LabelExtractor::new(Field::EffectiveDates, &EFFECTIVE_DATES),
        LabelExtractor::new(Field::IncidentDate, &INCIDENT_DATE),
        LabelExtractor::new(Field::IncidentTime, &INCIDENT_TIME),
        LabelExtractor::new(Field::IncidentLocation, &INCIDENT_LOCATION),
        LabelExtractor::new(Field::Description, &DESCRIPTION),
        LabelExtractor::new(Field::Claimant, &CLAIMANT),
        LabelExtractor::new(Field::AssetType, &ASSET_TYPE),
        LabelExtractor::new(Field::AssetId, &ASSET_ID),
        LabelExtractor::new(Field::ClaimType, &CLAIM_TYPE).with_casing(Casing::Lower),
    ];
}

/// Look up the rule registered for a text field.
pub fn rule_for(field: Field) -> Option<&'static LabelExtractor> {
    TEXT_RULES.iter().find(|rule| rule.field == field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::claim::ExtractedFields;

    fn extract(field: Field, text: &str) -> Option<String> {
        rule_for(field).and_then(|rule| rule.extract(text))
    }

    #[test]
    fn test_every_rule_targets_a_text_field() {
        let mut fields = ExtractedFields::default();
        for rule in TEXT_RULES.iter() {
            assert!(fields.set_text(rule.field, None), "{} is not a text field", rule.field);
        }
    }

    #[test]
    fn test_policy_number() {
        assert_eq!(
            extract(Field::PolicyNumber, "Policy Number: POL123456"),
            Some("POL123456".to_string())
        );
        assert_eq!(
            extract(Field::PolicyNumber, "POLICY NUMBER  pol-77"),
            Some("pol".to_string())
        );
        assert_eq!(extract(Field::PolicyNumber, "Policy: 123"), None);
    }

    #[test]
    fn test_names_stop_at_non_letters() {
        assert_eq!(
            extract(Field::PolicyholderName, "Policyholder Name: John Smith, 42"),
            Some("John Smith".to_string())
        );
        assert_eq!(
            extract(Field::Claimant, "Claimant: Jane Doe (driver)"),
            Some("Jane Doe".to_string())
        );
    }

    #[test]
    fn test_name_without_letters_is_empty_not_absent() {
        assert_eq!(
            extract(Field::PolicyholderName, "Policyholder Name: 1234"),
            Some(String::new())
        );
    }

    #[test]
    fn test_rest_of_line_fields_are_trimmed() {
        let text = "Incident Date: 2024-03-15   \r\nIncident Time:  14:30 \nAsset ID: VIN-1HGCM82633A";
        assert_eq!(extract(Field::IncidentDate, text), Some("2024-03-15".to_string()));
        assert_eq!(extract(Field::IncidentTime, text), Some("14:30".to_string()));
        assert_eq!(extract(Field::AssetId, text), Some("VIN-1HGCM82633A".to_string()));
    }

    #[test]
    fn test_claim_type_is_lower_cased() {
        assert_eq!(
            extract(Field::ClaimType, "Claim Type: Injury claim"),
            Some("injury".to_string())
        );
    }

    #[test]
    fn test_first_match_wins() {
        let text = "Description: first\nDescription: second";
        assert_eq!(extract(Field::Description, text), Some("first".to_string()));
    }

    #[test]
    fn test_case_sensitive_labels_do_not_match_lowercase() {
        assert_eq!(extract(Field::Description, "description: dented bumper"), None);
        assert_eq!(extract(Field::AssetType, "asset type: car"), None);
    }
}
