#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{collection, service, user_schema_v1};
use schevo_core::diff::diff;
use schevo_core::impact::{parse_dependency, resolve, DependencyRef, ImpactLevel};
use schevo_core::model::{Change, ChangeKind, FieldDefinition, Importance, SchemaDefinition, Severity};

fn change(kind: ChangeKind, schema: &str, field: Option<&str>, severity: Severity) -> Change {
    Change {
        kind,
        schema: schema.to_string(),
        field: field.map(str::to_string),
        severity,
        description: None,
        path: None,
    }
}

#[test]
fn test_parse_dependency_splits_on_first_dot() {
    assert_eq!(
        parse_dependency("OrderSchema.shippingAddress.city"),
        DependencyRef {
            schema: "OrderSchema",
            field: Some("shippingAddress.city"),
        }
    );
    assert_eq!(
        parse_dependency("OrderSchema"),
        DependencyRef {
            schema: "OrderSchema",
            field: None,
        }
    );
}

#[test]
fn test_unaffected_services_are_omitted_and_order_is_kept() {
    let old = collection(vec![("UserSchema", user_schema_v1())]);
    let new = collection(vec![(
        "UserSchema",
        SchemaDefinition::object()
            .with_field("id", FieldDefinition::of_type("string"))
            .with_required("id"),
    )]);
    let changes = diff(&old, &new);

    let services = vec![
        service("mailer", Importance::Low, 10, &["UserSchema.email"]),
        service("ledger", Importance::High, 10, &["UserSchema.id"]),
        service("auth", Importance::Critical, 10, &["UserSchema.email", "UserSchema.id"]),
    ];

    let affected = resolve(&changes, &services);
    let names: Vec<&str> = affected.iter().map(|a| a.name()).collect();
    assert_eq!(names, vec!["mailer", "auth"]);
    assert!(affected.iter().all(|a| a.impact_level == ImpactLevel::High));
}

#[test]
fn test_warnings_only_means_low_impact() {
    let changes = vec![change(
        ChangeKind::FieldOptional,
        "UserSchema",
        Some("name"),
        Severity::NonBreaking,
    )];
    let services = vec![service("profile", Importance::Critical, 0, &["UserSchema.name"])];

    let affected = resolve(&changes, &services);

    assert_eq!(affected.len(), 1);
    assert_eq!(affected[0].breaking_changes, 0);
    assert_eq!(affected[0].warnings, 1);
    assert_eq!(affected[0].impact_level, ImpactLevel::Low);
}

#[test]
fn test_schema_removal_hits_every_dependency_on_the_schema() {
    let changes = vec![change(ChangeKind::SchemaRemoved, "UserSchema", None, Severity::Breaking)];
    let services = vec![service(
        "users",
        Importance::Medium,
        0,
        &["UserSchema.id", "UserSchema.email", "OrderSchema.total"],
    )];

    let affected = resolve(&changes, &services);

    assert_eq!(affected[0].breaking_changes, 2);
    assert_eq!(affected[0].changes.len(), 2);
}

#[test]
fn test_schema_level_dependency_matches_fieldless_changes_only() {
    let changes = vec![
        change(ChangeKind::SchemaAdded, "InvoiceSchema", None, Severity::NonBreaking),
        change(ChangeKind::FieldAdded, "InvoiceSchema", Some("total"), Severity::NonBreaking),
    ];
    let services = vec![service("billing", Importance::Low, 0, &["InvoiceSchema"])];

    let affected = resolve(&changes, &services);

    assert_eq!(affected[0].warnings, 1);
    assert_eq!(affected[0].changes[0].kind, ChangeKind::SchemaAdded);
}

#[test]
fn test_matches_are_not_deduplicated_across_dependencies() {
    let changes = vec![change(ChangeKind::SchemaRemoved, "OrderSchema", None, Severity::Breaking)];
    let services = vec![service(
        "orders",
        Importance::High,
        0,
        &["OrderSchema.orderId", "OrderSchema.orderId"],
    )];

    assert_eq!(resolve(&changes, &services)[0].breaking_changes, 2);
}

#[test]
fn test_breaking_matches_listed_before_warnings() {
    let changes = vec![
        change(ChangeKind::FieldOptional, "UserSchema", Some("name"), Severity::NonBreaking),
        change(ChangeKind::FieldRemoved, "UserSchema", Some("email"), Severity::Breaking),
    ];
    let services = vec![service(
        "notify",
        Importance::High,
        0,
        &["UserSchema.name", "UserSchema.email"],
    )];

    let affected = resolve(&changes, &services);
    let kinds: Vec<&str> = affected[0].changes.iter().map(|c| c.kind.code()).collect();
    assert_eq!(kinds, vec!["FIELD_REMOVED", "FIELD_OPTIONAL"]);
}

#[test]
fn test_no_changes_or_no_services() {
    let services = vec![service("users", Importance::High, 0, &["UserSchema.id"])];
    assert!(resolve(&[], &services).is_empty());

    let changes = vec![change(ChangeKind::FieldRemoved, "UserSchema", Some("id"), Severity::Breaking)];
    assert!(resolve(&changes, &[]).is_empty());
}

#[test]
fn test_affected_service_serializes_flat() {
    let changes = vec![change(ChangeKind::FieldRemoved, "UserSchema", Some("id"), Severity::Breaking)];
    let services = vec![service("users", Importance::High, 25_000, &["UserSchema.id"])];

    let value = serde_json::to_value(&resolve(&changes, &services)[0]).unwrap();

    assert_eq!(value["name"], "users");
    assert_eq!(value["callsPerDay"], 25_000);
    assert_eq!(value["breakingChanges"], 1);
    assert_eq!(value["warnings"], 0);
    assert_eq!(value["impactLevel"], "HIGH");
    assert_eq!(value["changes"][0]["type"], "FIELD_REMOVED");
}
