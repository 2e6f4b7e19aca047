//! Bundled input documents.
//!
//! `sample_analysis.json` is a two-schema, eight-service commerce dataset
//! that exercises every stage. `format_example.json` is the smallest useful
//! document and doubles as documentation of the input format.

use crate::errors::Result;
use crate::input::{parse_analysis_document, AnalysisInput};

pub const SAMPLE_ANALYSIS_JSON: &str = include_str!("../data/sample_analysis.json");
pub const FORMAT_EXAMPLE_JSON: &str = include_str!("../data/format_example.json");

/// The bundled sample dataset.
///
/// # Errors
///
/// Only if the bundled document fails validation, which the test suite rules out.
pub fn sample_input() -> Result<AnalysisInput> {
    parse_analysis_document(SAMPLE_ANALYSIS_JSON.as_bytes())
}

/// The input-format example.
///
/// # Errors
///
/// Only if the bundled document fails validation, which the test suite rules out.
pub fn format_example() -> Result<AnalysisInput> {
    parse_analysis_document(FORMAT_EXAMPLE_JSON.as_bytes())
}
