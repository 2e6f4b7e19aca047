//! Impact resolution stage.
//!
//! Matches each service's `"Schema.field"` dependencies against the change
//! list and keeps the services that are hit, in input order.

pub mod model;
pub mod resolver;

pub use model::{AffectedService, ImpactLevel};
pub use resolver::{parse_dependency, resolve, DependencyRef};
