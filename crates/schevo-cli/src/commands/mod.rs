//! Subcommand implementations

pub mod analyze;
pub mod diff;
pub mod example;

use clap::{Args, ValueEnum};
use schevo_core::errors::{ExError, SchevoError};
use schevo_core::input::AnalysisInput;
use schevo_core::sample::sample_input;
use schevo_core_types::RequestContext;
use serde::Serialize;
use std::path::PathBuf;

/// Output format for reports written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
}

/// Where the input document comes from
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Path to an input document (`oldSchemas`, `newSchemas`, `services`)
    #[arg(required_unless_present = "sample", conflicts_with = "sample")]
    pub input: Option<PathBuf>,

    /// Use the bundled sample dataset instead of a file
    #[arg(long)]
    pub sample: bool,
}

impl InputArgs {
    /// Load the input and record its source on the context
    pub fn load(&self, ctx: &RequestContext) -> Result<(AnalysisInput, RequestContext), ExError> {
        let (input, source) = match &self.input {
            Some(path) => (AnalysisInput::from_path(path)?, path.display().to_string()),
            None => (sample_input()?, "sample".to_string()),
        };
        let ctx = ctx.clone().with_source(source);
        tracing::debug!(
            request_id = %ctx.request_id,
            source = ctx.source.as_deref().unwrap_or_default(),
            "input loaded"
        );
        Ok((input, ctx))
    }
}

/// Pretty JSON with the error mapped into the structured facility
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, ExError> {
    serde_json::to_string_pretty(value).map_err(|e| ExError::from(SchevoError::from(e)))
}
