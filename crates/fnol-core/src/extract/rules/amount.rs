//! Damage amount extraction.

use tracing::debug;

use super::FieldExtractor;
use super::patterns::ESTIMATED_DAMAGE;

/// Extracts the estimated damage figure labelled `Estimated Damage` or
/// `Initial Estimate`, whichever comes first.
pub struct DamageExtractor;

impl DamageExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DamageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DamageExtractor {
    type Output = f64;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = ESTIMATED_DAMAGE.captures(text)?;
        let token = &caps[2];
        let amount = parse_damage(token);

        if amount.is_none() {
            debug!("Ignoring malformed damage figure {:?}", token);
        }

        amount
    }
}

/// Extract the estimated damage from document text.
pub fn extract_damage(text: &str) -> Option<f64> {
    DamageExtractor::new().extract(text)
}

/// Parse a comma-grouped decimal such as `12,500.00`.
///
/// Thousands separators are dropped wherever they appear; anything that is
/// still not a single decimal number afterwards yields `None`.
pub fn parse_damage(token: &str) -> Option<f64> {
    let cleaned = token.replace(',', "");
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_damage() {
        assert_eq!(parse_damage("12,500.00"), Some(12500.0));
        assert_eq!(parse_damage("1,234,567.89"), Some(1234567.89));
        assert_eq!(parse_damage("800"), Some(800.0));
        assert_eq!(parse_damage("0.5"), Some(0.5));
    }

    #[test]
    fn test_malformed_damage_is_absent() {
        assert_eq!(parse_damage("12,00.00.00"), None);
        assert_eq!(parse_damage(","), None);
        assert_eq!(parse_damage("."), None);
    }

    #[test]
    fn test_extract_either_label() {
        assert_eq!(extract_damage("Estimated Damage: 18,000"), Some(18000.0));
        assert_eq!(extract_damage("Initial Estimate  $ 5"), None);
        assert_eq!(extract_damage("Initial Estimate: 42,000.50"), Some(42000.5));
    }

    #[test]
    fn test_first_label_in_document_order_wins() {
        let text = "Initial Estimate: 900\nEstimated Damage: 30,000";
        assert_eq!(extract_damage(text), Some(900.0));
    }

    #[test]
    fn test_malformed_token_does_not_fall_through() {
        let text = "Estimated Damage: 12,00.00.00\nInitial Estimate: 5000";
        assert_eq!(extract_damage(text), None);
    }

    #[test]
    fn test_label_is_case_sensitive() {
        assert_eq!(extract_damage("estimated damage: 100"), None);
    }
}
