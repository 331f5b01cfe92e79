//! Configuration structures for the triage pipeline.

use serde::{Deserialize, Serialize};

use crate::error::FnolError;

/// Main configuration for the fnol pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FnolConfig {
    /// Routing rule parameters.
    pub triage: TriageConfig,

    /// Text acquisition configuration.
    pub document: DocumentConfig,
}

/// Parameters of the routing chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Claims with estimated damage strictly below this value are fast-tracked.
    pub fast_track_threshold: f64,

    /// Claim type (lower case) sent to the specialist queue.
    pub specialist_claim_type: String,

    /// Keyword searched case-insensitively in the description.
    pub fraud_keyword: String,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            fast_track_threshold: 25000.0,
            specialist_claim_type: "injury".to_string(),
            fraud_keyword: "fraud".to_string(),
        }
    }
}

/// How documents are turned into text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Use the PDF text backend. When disabled non-text files yield empty text.
    pub pdf_enabled: bool,

    /// File extensions (case-insensitive, without dot) read verbatim as text.
    pub text_extensions: Vec<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            pdf_enabled: true,
            text_extensions: vec!["txt".to_string()],
        }
    }
}

impl FnolConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }

    /// Check values that deserialize fine but cannot drive the pipeline.
    pub fn validate(&self) -> crate::Result<()> {
        let threshold = self.triage.fast_track_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(FnolError::Config(format!(
                "triage.fast_track_threshold must be a non-negative number, got {}",
                threshold
            )));
        }

        if self.triage.specialist_claim_type.trim().is_empty() {
            return Err(FnolError::Config(
                "triage.specialist_claim_type must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
