//! End-to-end analysis: diff, resolve, order, plan.
//!
//! ```
//! use schevo_core::deploy::ServiceTopology;
//! use schevo_core::input::parse_analysis_document;
//! use schevo_core::pipeline::analyze;
//!
//! let input = parse_analysis_document(br#"{
//!     "oldSchemas": {"UserSchema": {"properties": {"email": {"type": "string"}}, "required": ["email"]}},
//!     "newSchemas": {"UserSchema": {"properties": {}}},
//!     "services": [{"name": "user-service", "importance": "HIGH", "callsPerDay": 10,
//!                   "dependencies": ["UserSchema.email"]}]
//! }"#).unwrap();
//!
//! let analysis = analyze(&input, &ServiceTopology::standard());
//! assert_eq!(analysis.deployment_plan.total_steps, 1);
//! ```

use crate::deploy::{DeploymentPlan, DeploymentPlanner, ScoredService, ServiceTopology};
use crate::diff::{diff, summarize, ChangeSummary};
use crate::errors::{ExError, Result, SchevoError};
use crate::impact::{resolve, AffectedService};
use crate::input::AnalysisInput;
use crate::model::Change;
use crate::{log_op_end, log_op_start};
use chrono::{DateTime, Utc};
use schevo_core_types::RequestId;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::time::Instant;

/// Everything one pipeline run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub changes: Vec<Change>,
    pub affected_services: Vec<AffectedService>,
    pub deployment_order: Vec<ScoredService>,
    pub deployment_plan: DeploymentPlan,
    pub summary: ChangeSummary,
}

/// Run the full pipeline over one input.
///
/// Pure apart from logging: the same input and topology always give the same
/// analysis.
pub fn analyze(input: &AnalysisInput, topology: &ServiceTopology) -> Analysis {
    let start = Instant::now();
    log_op_start!(
        "analyze",
        old_schema_count = input.old_schemas.len(),
        new_schema_count = input.new_schemas.len(),
        service_count = input.services.len()
    );

    let planner = DeploymentPlanner::new(topology.clone());
    let changes = diff(&input.old_schemas, &input.new_schemas);
    let affected_services = resolve(&changes, &input.services);
    let deployment_order = planner.order(&affected_services);
    let deployment_plan = planner.plan_ordered(&deployment_order);
    let summary = summarize(&changes);

    log_op_end!(
        "analyze",
        duration_ms = start.elapsed().as_millis() as u64,
        change_count = summary.total,
        breaking_count = summary.breaking,
        affected_count = affected_services.len(),
        step_count = deployment_plan.total_steps
    );

    Analysis {
        changes,
        affected_services,
        deployment_order,
        deployment_plan,
        summary,
    }
}

/// Digests identifying the inputs of an exported plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisIdentity {
    pub old_schemas_digest: String,
    pub new_schemas_digest: String,
    pub services_digest: String,
}

/// Compute SHA-256 digests over the canonical JSON of each input part.
///
/// Order-sensitive: reordering schemas or services changes the digest, just
/// as it can change the diff and the plan.
///
/// # Errors
///
/// `Serialization` if an input part cannot be encoded.
pub fn compute_identity(input: &AnalysisInput) -> Result<AnalysisIdentity> {
    Ok(AnalysisIdentity {
        old_schemas_digest: digest_json(&input.old_schemas)?,
        new_schemas_digest: digest_json(&input.new_schemas)?,
        services_digest: digest_json(&input.services)?,
    })
}

fn digest_json<T: Serialize>(value: &T) -> Result<String> {
    let canonical = serde_json::to_string(value)
        .map_err(|e| ExError::from(SchevoError::from(e)).with_op("compute_identity"))?;
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// A deployment plan packaged for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanExport {
    pub analysis_id: RequestId,
    pub generated_at: DateTime<Utc>,
    pub summary: String,
    pub identity: AnalysisIdentity,
    pub plan: DeploymentPlan,
}

/// Package the plan of an analysis for export.
///
/// # Errors
///
/// `Serialization` if the input digests cannot be computed.
pub fn export_plan(
    analysis: &Analysis,
    input: &AnalysisInput,
    generated_at: DateTime<Utc>,
    analysis_id: RequestId,
) -> Result<PlanExport> {
    Ok(PlanExport {
        analysis_id,
        generated_at,
        summary: format!("{} services", analysis.deployment_plan.total_steps),
        identity: compute_identity(input)?,
        plan: analysis.deployment_plan.clone(),
    })
}
