//! Core types shared across Schevo crates
//!
//! This crate provides foundational types used by the error and logging
//! facilities of `schevo-core` and by the CLI:
//!
//! - **Correlation types**: RequestId, RequestContext
//! - **Schema constants**: Canonical structured-logging field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId};
