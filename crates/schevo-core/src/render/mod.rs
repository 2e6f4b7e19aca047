//! Markdown rendering of analysis results.

pub mod report;

pub use report::{render_analysis_report, render_change_report};
