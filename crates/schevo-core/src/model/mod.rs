//! Input and change records shared by every pipeline stage.
//!
//! Schema collections and services are immutable inputs. [`Change`] is the
//! output of the differ and the input of the resolver.

pub mod change;
pub mod schema;
pub mod service;

pub use change::{Change, ChangeKind, Severity};
pub use schema::{FieldDefinition, SchemaCollection, SchemaDefinition};
pub use service::{Importance, Service};
