#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{TimeZone, Utc};
use schevo_core::core_types::RequestId;
use schevo_core::deploy::{PlanOrder, RiskLevel, ServiceTopology};
use schevo_core::diff::ChangeSummary;
use schevo_core::impact::ImpactLevel;
use schevo_core::pipeline::{analyze, compute_identity, export_plan};
use schevo_core::render::render_analysis_report;
use schevo_core::sample::{format_example, sample_input};

fn deployed(service: &str) -> String {
    format!("{} deployed successfully", service)
}

#[test]
fn test_sample_changes() {
    let analysis = analyze(&sample_input().unwrap(), &ServiceTopology::standard());

    let listed: Vec<(&str, &str, &str)> = analysis
        .changes
        .iter()
        .map(|c| (c.kind.code(), c.schema.as_str(), c.field.as_deref().unwrap_or("")))
        .collect();

    assert_eq!(
        listed,
        vec![
            ("FIELD_REMOVED", "UserSchema", "email"),
            ("FIELD_REMOVED", "UserSchema", "name"),
            ("FIELD_REMOVED", "UserSchema", "age"),
            ("FIELD_REMOVED", "UserSchema", "status"),
            ("FIELD_ADDED", "UserSchema", "emailAddress"),
            ("FIELD_ADDED", "UserSchema", "firstName"),
            ("FIELD_ADDED", "UserSchema", "lastName"),
            ("FIELD_ADDED", "UserSchema", "birthDate"),
            ("FIELD_ADDED", "UserSchema", "accountStatus"),
            ("FIELD_ADDED", "UserSchema", "phoneNumber"),
            ("FIELD_REMOVED", "OrderSchema", "userId"),
            ("FIELD_REMOVED", "OrderSchema", "status"),
            ("FIELD_ADDED", "OrderSchema", "customerId"),
            ("FIELD_ADDED", "OrderSchema", "subtotal"),
            ("FIELD_ADDED", "OrderSchema", "tax"),
            ("FIELD_ADDED", "OrderSchema", "orderStatus"),
            ("FIELD_ADDED", "OrderSchema", "shippingAddress"),
        ]
    );
    assert_eq!(
        analysis.summary,
        ChangeSummary {
            total: 17,
            breaking: 13,
            non_breaking: 4,
            has_breaking_changes: true
        }
    );
}

#[test]
fn test_sample_affected_services() {
    let analysis = analyze(&sample_input().unwrap(), &ServiceTopology::standard());

    let affected: Vec<(&str, usize, usize, ImpactLevel)> = analysis
        .affected_services
        .iter()
        .map(|a| (a.name(), a.breaking_changes, a.warnings, a.impact_level))
        .collect();

    assert_eq!(
        affected,
        vec![
            ("user-service", 2, 0, ImpactLevel::High),
            ("auth-service", 2, 0, ImpactLevel::High),
            ("notification-service", 2, 0, ImpactLevel::High),
            ("order-service", 2, 0, ImpactLevel::High),
            ("analytics-service", 1, 0, ImpactLevel::High),
        ]
    );
}

#[test]
fn test_sample_plan_with_standard_topology() {
    let analysis = analyze(&sample_input().unwrap(), &ServiceTopology::standard());
    let plan = &analysis.deployment_plan;

    let scores: Vec<(&str, u64)> = analysis
        .deployment_order
        .iter()
        .map(|s| (s.name(), s.deployment_score))
        .collect();
    assert_eq!(
        scores,
        vec![
            ("analytics-service", 12),
            ("user-service", 23),
            ("notification-service", 23),
            ("auth-service", 25),
            ("order-service", 25),
        ]
    );

    assert_eq!(plan.total_steps, 5);
    assert_eq!(plan.order, PlanOrder::Optimized);

    let risks: Vec<RiskLevel> = plan.steps.iter().map(|s| s.estimated_risk).collect();
    assert_eq!(
        risks,
        vec![
            RiskLevel::Medium,
            RiskLevel::Medium,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::High
        ]
    );

    assert_eq!(
        plan.steps[0].reason,
        "Lowest risk service - deploy first to validate process"
    );
    assert_eq!(
        plan.steps[1].reason,
        "Standard deployment - monitor service health after changes"
    );
    assert_eq!(
        plan.steps[3].reason,
        "Critical service with breaking changes - deploy with full team monitoring"
    );

    assert!(plan.steps[0].prerequisites.is_empty());
    assert_eq!(plan.steps[1].prerequisites, vec![deployed("analytics-service")]);
    assert_eq!(plan.steps[2].prerequisites, vec![deployed("user-service")]);
    assert_eq!(plan.steps[3].prerequisites, vec![deployed("user-service")]);
    assert_eq!(
        plan.steps[4].prerequisites,
        vec![deployed("user-service"), deployed("auth-service")]
    );
}

#[test]
fn test_sample_plan_with_declared_topology() {
    let input = sample_input().unwrap();
    let topology = ServiceTopology::from_services(&input.services);

    let analysis = analyze(&input, &topology);

    assert_eq!(
        analysis.deployment_plan.steps[4].prerequisites,
        vec![deployed("user-service")]
    );
}

#[test]
fn test_analysis_is_deterministic() {
    let input = sample_input().unwrap();
    let topology = ServiceTopology::standard();
    assert_eq!(analyze(&input, &topology), analyze(&input, &topology));
}

#[test]
fn test_analysis_json_shape() {
    let analysis = analyze(&format_example().unwrap(), &ServiceTopology::standard());
    let value = serde_json::to_value(&analysis).unwrap();

    for key in [
        "changes",
        "affectedServices",
        "deploymentOrder",
        "deploymentPlan",
        "summary",
    ] {
        assert!(value.get(key).is_some(), "missing key {}", key);
    }
    assert_eq!(value["summary"]["hasBreakingChanges"], true);
    assert_eq!(value["deploymentOrder"][0]["deploymentScore"], 23);
}

#[test]
fn test_export_envelope() {
    let input = sample_input().unwrap();
    let analysis = analyze(&input, &ServiceTopology::standard());
    let generated_at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

    let export = export_plan(
        &analysis,
        &input,
        generated_at,
        RequestId::from_string("run-42".to_string()),
    )
    .unwrap();

    assert_eq!(export.summary, "5 services");
    assert_eq!(export.identity, compute_identity(&input).unwrap());

    let value = serde_json::to_value(&export).unwrap();
    assert_eq!(value["analysisId"], "run-42");
    assert_eq!(value["generatedAt"], "2025-01-02T03:04:05Z");
    assert_eq!(value["plan"]["totalSteps"], 5);
    assert_eq!(
        value["identity"]["oldSchemasDigest"].as_str().map(str::len),
        Some(64)
    );
}

#[test]
fn test_markdown_report_lists_every_step() {
    let analysis = analyze(&sample_input().unwrap(), &ServiceTopology::standard());
    let report = render_analysis_report(&analysis);

    assert!(report.starts_with("# Schema Evolution Analysis\n"));
    assert!(report.contains("| 17 | 13 | 4 |"));
    assert!(report.contains("| analytics-service | MEDIUM | HIGH | 1 | 0 |"));
    assert!(report.contains("### Step 1: analytics-service"));
    assert!(report.contains("### Step 5: order-service"));
    assert!(report.contains("- Have rollback plan ready"));
    assert!(report.contains("`UserSchema.email` Removed field: email"));
}
