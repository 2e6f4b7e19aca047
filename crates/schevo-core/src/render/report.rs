//! Human-readable Markdown reports.

use crate::deploy::DeploymentPlan;
use crate::diff::{format_change, ChangeSummary};
use crate::impact::AffectedService;
use crate::model::Change;
use crate::pipeline::Analysis;

/// Render a full analysis as Markdown.
///
/// Sections: summary counts, the change list, affected services and the
/// deployment plan. Informational only; the JSON output is the contract.
pub fn render_analysis_report(analysis: &Analysis) -> String {
    let mut out = String::new();

    out.push_str("# Schema Evolution Analysis\n\n");
    push_summary(&mut out, &analysis.summary);
    push_changes(&mut out, &analysis.changes);
    push_affected(&mut out, &analysis.affected_services);
    push_plan(&mut out, &analysis.deployment_plan);

    out
}

/// Render a change list and its summary as Markdown.
pub fn render_change_report(changes: &[Change], summary: &ChangeSummary) -> String {
    let mut out = String::new();

    out.push_str("# Schema Changes\n\n");
    push_summary(&mut out, summary);
    push_changes(&mut out, changes);

    out
}

fn push_summary(out: &mut String, summary: &ChangeSummary) {
    out.push_str("## Summary\n\n");
    out.push_str(&format!(
        "| Total | Breaking | Non-breaking |\n\
         |---|---|---|\n\
         | {} | {} | {} |\n\n",
        summary.total, summary.breaking, summary.non_breaking
    ));

    if summary.has_breaking_changes {
        out.push_str("**Breaking changes detected.**\n\n");
    } else {
        out.push_str("_No breaking changes._\n\n");
    }
}

fn push_changes(out: &mut String, changes: &[Change]) {
    out.push_str("## Changes\n\n");
    if changes.is_empty() {
        out.push_str("_No changes detected._\n\n");
        return;
    }

    for change in changes {
        let location = change.path.as_deref().unwrap_or(&change.schema);
        out.push_str(&format!(
            "- **{}** `{}` {}\n",
            change.severity.as_str(),
            location,
            format_change(change)
        ));
    }
    out.push('\n');
}

fn push_affected(out: &mut String, affected: &[AffectedService]) {
    out.push_str("## Affected Services\n\n");
    if affected.is_empty() {
        out.push_str("_No services affected._\n\n");
        return;
    }

    out.push_str("| Service | Importance | Impact | Breaking | Warnings |\n");
    out.push_str("|---|---|---|---|---|\n");
    for service in affected {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            service.name(),
            service.service.importance,
            service.impact_level.as_str(),
            service.breaking_changes,
            service.warnings
        ));
    }
    out.push('\n');
}

fn push_plan(out: &mut String, plan: &DeploymentPlan) {
    out.push_str("## Deployment Plan\n\n");
    if plan.is_empty() {
        out.push_str("_Nothing to deploy._\n");
        return;
    }

    for step in &plan.steps {
        out.push_str(&format!(
            "### Step {}: {}\n\n",
            step.step, step.service
        ));
        out.push_str(&format!(
            "- **Reason**: {}\n- **Risk**: {}\n- **Impact**: {}\n- **Breaking changes**: {}\n",
            step.reason,
            step.estimated_risk.as_str(),
            step.impact.as_str(),
            step.breaking_changes
        ));
        if !step.prerequisites.is_empty() {
            out.push_str(&format!(
                "- **Prerequisites**: {}\n",
                step.prerequisites.join("; ")
            ));
        }
        out.push('\n');
    }

    if !plan.recommendations.is_empty() {
        out.push_str("### Recommendations\n\n");
        for recommendation in &plan.recommendations {
            out.push_str(&format!("- {}\n", recommendation));
        }
    }
}
