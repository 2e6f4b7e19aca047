//! Schema diff stage.
//!
//! Compares two schema collections and produces a flat, ordered list of
//! typed [`Change`](crate::model::Change) records, each classified as
//! breaking or non-breaking.
//!
//! ## Entry point
//!
//! ```
//! use schevo_core::diff::{diff, summarize};
//! use schevo_core::model::{FieldDefinition, SchemaCollection, SchemaDefinition};
//!
//! let mut old = SchemaCollection::new();
//! old.insert(
//!     "UserSchema".to_string(),
//!     SchemaDefinition::object()
//!         .with_field("email", FieldDefinition::of_type("string"))
//!         .with_required("email"),
//! );
//! let mut new = SchemaCollection::new();
//! new.insert(
//!     "UserSchema".to_string(),
//!     SchemaDefinition::object()
//!         .with_field("emailAddress", FieldDefinition::of_type("string"))
//!         .with_required("emailAddress"),
//! );
//!
//! let changes = diff(&old, &new);
//! assert_eq!(summarize(&changes).breaking, 2);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical change lists.
//! - **Discovery order**: output follows input iteration order, never sorted.
//! - **Elementary records**: renames are a removal plus an addition.

pub mod engine;
pub mod summary;

pub use engine::diff;
pub use summary::{format_change, summarize, ChangeSummary};
