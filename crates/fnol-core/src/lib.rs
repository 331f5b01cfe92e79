//! Core library for First Notice of Loss (FNOL) intake.
//!
//! This crate provides:
//! - Rule-based claim field extraction from plain text
//! - Mandatory-field detection
//! - Triage routing with a reasoning trail
//! - Document text acquisition (plain text and text-layer PDF)

pub mod document;
pub mod error;
pub mod extract;
pub mod models;
pub mod pipeline;
pub mod triage;

pub use document::{DocumentLoader, NoPdfText, PdfTextSource};
#[cfg(feature = "pdf")]
pub use document::PdfExtractor;
pub use error::{DocumentError, FnolError, Result};
pub use extract::ClaimExtractor;
pub use models::claim::{Attachment, ContactDetails, ExtractedFields, Field};
pub use models::config::FnolConfig;
pub use models::route::{Route, RoutingDecision, RoutingRule};
pub use pipeline::{TriagePipeline, TriageReport};
pub use triage::{find_missing, RoutingEngine, MANDATORY_FIELDS};
