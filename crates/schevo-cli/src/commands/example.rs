//! Example input document command

use super::to_pretty_json;
use clap::Args;
use schevo_core::sample::{format_example, sample_input};

#[derive(Debug, Args)]
pub struct ExampleArgs {
    /// Print the full sample dataset instead of the minimal format example
    #[arg(long)]
    pub sample: bool,
}

pub fn execute(args: ExampleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let document = if args.sample {
        sample_input()?
    } else {
        format_example()?
    };
    println!("{}", to_pretty_json(&document)?);
    Ok(())
}
