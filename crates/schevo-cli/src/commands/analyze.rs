//! Full analysis command

use super::{to_pretty_json, InputArgs, OutputFormat};
use chrono::Utc;
use clap::Args;
use schevo_core::deploy::ServiceTopology;
use schevo_core::errors::io_error;
use schevo_core::pipeline::{analyze, export_plan};
use schevo_core::render::render_analysis_report;
use schevo_core_types::RequestContext;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Service topology file (YAML or JSON) used for prerequisites
    #[arg(long, conflicts_with = "declared_topology")]
    pub topology: Option<PathBuf>,

    /// Derive the topology from the services' declared `serviceDependencies`
    #[arg(long)]
    pub declared_topology: bool,

    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Also write the deployment plan export to this file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: AnalyzeArgs, ctx: &RequestContext) -> Result<(), Box<dyn std::error::Error>> {
    let (input, ctx) = args
        .input
        .load(ctx)
        .map_err(|e| e.with_request_id(ctx.request_id.clone()))?;

    let topology = if let Some(path) = &args.topology {
        ServiceTopology::load(path).map_err(|e| e.with_request_id(ctx.request_id.clone()))?
    } else if args.declared_topology {
        ServiceTopology::from_services(&input.services)
    } else {
        ServiceTopology::standard()
    };

    let analysis = analyze(&input, &topology);

    if let Some(path) = &args.export {
        let export = export_plan(&analysis, &input, Utc::now(), ctx.request_id.clone())?;
        std::fs::write(path, to_pretty_json(&export)?)
            .map_err(|e| io_error("export_plan", path, e).with_request_id(ctx.request_id.clone()))?;
        eprintln!("Deployment plan exported to {}", path.display());
    }

    match args.format {
        OutputFormat::Json => println!("{}", to_pretty_json(&analysis)?),
        OutputFormat::Markdown => print!("{}", render_analysis_report(&analysis)),
    }

    Ok(())
}
