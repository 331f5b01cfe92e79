//! Data models for claim intake and triage.

pub mod claim;
pub mod config;
pub mod route;

pub use claim::{Attachment, ContactDetails, ExtractedFields, Field, FieldValue};
pub use config::{DocumentConfig, FnolConfig, TriageConfig};
pub use route::{Route, RoutingDecision, RoutingRule};
