//! Change-only command

use super::{to_pretty_json, InputArgs, OutputFormat};
use clap::Args;
use schevo_core::diff::{diff, summarize, ChangeSummary};
use schevo_core::model::Change;
use schevo_core::render::render_change_report;
use schevo_core_types::RequestContext;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct DiffReport<'a> {
    changes: &'a [Change],
    summary: ChangeSummary,
}

pub fn execute(args: DiffArgs, ctx: &RequestContext) -> Result<(), Box<dyn std::error::Error>> {
    let (input, _ctx) = args
        .input
        .load(ctx)
        .map_err(|e| e.with_request_id(ctx.request_id.clone()))?;

    let changes = diff(&input.old_schemas, &input.new_schemas);
    let summary = summarize(&changes);

    match args.format {
        OutputFormat::Json => println!(
            "{}",
            to_pretty_json(&DiffReport {
                changes: &changes,
                summary,
            })?
        ),
        OutputFormat::Markdown => print!("{}", render_change_report(&changes, &summary)),
    }

    Ok(())
}
