//! Missing-field detection and routing.

pub mod missing;
pub mod routing;

pub use missing::{find_missing, MANDATORY_FIELDS};
pub use routing::RoutingEngine;
