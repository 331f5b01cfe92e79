//! Routing decision chain.

use tracing::debug;

use crate::models::claim::{format_amount, format_threshold, ExtractedFields, Field};
use crate::models::config::TriageConfig;
use crate::models::route::{Route, RoutingDecision, RoutingRule};

/// Evaluates the routing rules in a fixed order and stops at the first that
/// matches:
///
/// 1. missing mandatory fields: manual review
/// 2. damage below the fast-track threshold: fast-track
/// 3. specialist claim type: specialist queue
/// 4. fraud keyword in the description: investigation flag
/// 5. otherwise: manual review
#[derive(Debug, Clone, Default)]
pub struct RoutingEngine {
    config: TriageConfig,
}

impl RoutingEngine {
    /// Create an engine with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom thresholds.
    pub fn with_config(config: TriageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    /// Route a claim given its fields and the mandatory fields it lacks.
    pub fn decide(&self, fields: &ExtractedFields, missing: &[Field]) -> RoutingDecision {
        let decision = self.evaluate(fields, missing);
        debug!("Rule {:?} routed claim to {}", decision.rule(), decision.route());
        decision
    }

    fn evaluate(&self, fields: &ExtractedFields, missing: &[Field]) -> RoutingDecision {
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(Field::name).collect();
            return RoutingDecision::new(
                Route::ManualReview,
                RoutingRule::MissingFields,
                vec![format!("Missing mandatory fields: {}", names.join(", "))],
            );
        }

        if let Some(damage) = fields.estimated_damage {
            if damage < self.config.fast_track_threshold {
                return RoutingDecision::new(
                    Route::FastTrack,
                    RoutingRule::FastTrack,
                    vec![format!(
                        "Estimated damage {} < {} → Fast-track",
                        format_amount(damage),
                        format_threshold(self.config.fast_track_threshold)
                    )],
                );
            }
        }

        if fields.claim_type.as_deref() == Some(self.config.specialist_claim_type.as_str()) {
            return RoutingDecision::new(
                Route::SpecialistQueue,
                RoutingRule::Specialist,
                vec![format!("{} claim", capitalize(&self.config.specialist_claim_type))],
            );
        }

        if self.mentions_fraud(&fields.description) {
            return RoutingDecision::new(
                Route::InvestigationFlag,
                RoutingRule::FraudKeyword,
                vec!["Fraud keyword detected".to_string()],
            );
        }

        RoutingDecision::new(
            Route::ManualReview,
            RoutingRule::Default,
            vec!["Default: needs review".to_string()],
        )
    }

    fn mentions_fraud(&self, description: &str) -> bool {
        let keyword = self.config.fraud_keyword.to_lowercase();
        !keyword.is_empty() && description.to_lowercase().contains(&keyword)
    }
}

/// `injury` -> `Injury`
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
