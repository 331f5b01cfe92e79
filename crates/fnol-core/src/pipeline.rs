//! End-to-end triage: text to fields, missing list, route and reasoning.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::extract::ClaimExtractor;
use crate::models::claim::{ExtractedFields, Field};
use crate::models::config::TriageConfig;
use crate::models::route::{Route, RoutingDecision};
use crate::triage::{find_missing, RoutingEngine};

/// Separator used when joining reasoning messages for display.
pub const REASONING_SEPARATOR: &str = " | ";

/// Result of triaging one document.
///
/// Serializes to exactly four keys: `extractedFields`, `missingFields`,
/// `recommendedRoute` and `reasoning`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageReport {
    pub extracted_fields: ExtractedFields,
    pub missing_fields: Vec<Field>,
    pub recommended_route: Route,
    pub reasoning: String,
}

impl TriageReport {
    /// Assemble a report, joining the decision's reasoning for display.
    pub fn from_parts(
        extracted_fields: ExtractedFields,
        missing_fields: Vec<Field>,
        decision: &RoutingDecision,
    ) -> Self {
        Self {
            extracted_fields,
            missing_fields,
            recommended_route: decision.route(),
            reasoning: decision.reasoning().join(REASONING_SEPARATOR),
        }
    }
}

/// Composes extraction, missing-field detection and routing.
///
/// Holds no per-document state; one pipeline can triage any number of
/// documents, including from several threads.
#[derive(Debug, Clone, Default)]
pub struct TriagePipeline {
    extractor: ClaimExtractor,
    router: RoutingEngine,
}

impl TriagePipeline {
    /// Create a pipeline with the default routing thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set routing thresholds.
    pub fn with_triage_config(mut self, config: TriageConfig) -> Self {
        self.router = RoutingEngine::with_config(config);
        self
    }

    /// Extract fields and compute the full routing decision, keeping the
    /// decision's rule identity and individual reasoning messages.
    pub fn evaluate(&self, text: &str) -> (ExtractedFields, Vec<Field>, RoutingDecision) {
        let fields = self.extractor.extract(text);
        let missing = find_missing(&fields);
        let decision = self.router.decide(&fields, &missing);
        (fields, missing, decision)
    }

    /// Triage one document's text.
    pub fn process(&self, text: &str) -> TriageReport {
        let start = Instant::now();

        let (fields, missing, decision) = self.evaluate(text);

        info!(
            "Routed document to {} ({} missing fields) in {}us",
            decision.route(),
            missing.len(),
            start.elapsed().as_micros()
        );

        TriageReport::from_parts(fields, missing, &decision)
    }
}
