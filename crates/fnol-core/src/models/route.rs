//! Routing labels and decisions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Processing queue a claim is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    #[serde(rename = "Manual review")]
    ManualReview,
    #[serde(rename = "Fast-track")]
    FastTrack,
    #[serde(rename = "Specialist Queue")]
    SpecialistQueue,
    #[serde(rename = "Investigation Flag")]
    InvestigationFlag,
}

impl Route {
    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Route::ManualReview => "Manual review",
            Route::FastTrack => "Fast-track",
            Route::SpecialistQueue => "Specialist Queue",
            Route::InvestigationFlag => "Investigation Flag",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The rule of the routing chain that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingRule {
    /// One or more mandatory fields are empty.
    MissingFields,
    /// Estimated damage is below the fast-track threshold.
    FastTrack,
    /// Claim type calls for a specialist.
    Specialist,
    /// Description mentions the fraud keyword.
    FraudKeyword,
    /// No earlier rule matched.
    Default,
}

/// Outcome of the routing chain. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingDecision {
    route: Route,
    rule: RoutingRule,
    reasoning: Vec<String>,
}

impl RoutingDecision {
    pub(crate) fn new(route: Route, rule: RoutingRule, reasoning: Vec<String>) -> Self {
        Self {
            route,
            rule,
            reasoning,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn rule(&self) -> RoutingRule {
        self.rule
    }

    /// Justification messages in the order they were produced.
    pub fn reasoning(&self) -> &[String] {
        &self.reasoning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_serializes_as_label() {
        for route in [
            Route::ManualReview,
            Route::FastTrack,
            Route::SpecialistQueue,
            Route::InvestigationFlag,
        ] {
            assert_eq!(
                serde_json::to_string(&route).unwrap(),
                format!("\"{}\"", route.label())
            );
        }
    }
}
