//! Schevo Core - schema evolution impact analysis and deployment planning
//!
//! This crate provides the pipeline behind the `schevo` tool:
//! - Schema diffing with breaking/non-breaking classification
//! - Impact resolution against service schema-field dependencies
//! - Risk-scored deployment ordering and step-by-step plans
//! - Input document parsing, Markdown reports and plan export
//! - Structured errors and logging shared by every boundary operation
//!
//! The three stages are pure functions over in-memory data; only the input
//! and topology boundaries can fail.

pub use schevo_core_types as core_types;

pub mod deploy;
pub mod diff;
pub mod errors;
pub mod impact;
pub mod input;
pub mod logging_facility;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod sample;

// Re-export commonly used types
pub use deploy::{plan, DeploymentPlan, DeploymentPlanner, ServiceTopology};
pub use diff::{diff, format_change, summarize, ChangeSummary};
pub use errors::{ExError, ExErrorKind, Result, SchevoError};
pub use impact::{resolve, AffectedService};
pub use input::{parse_analysis_document, AnalysisInput};
pub use model::{Change, SchemaCollection, Service};
pub use pipeline::{analyze, export_plan, Analysis, PlanExport};
