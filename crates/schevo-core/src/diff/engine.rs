//! Schema diff computation engine.
//!
//! The core entry point is [`diff`], which compares two schema collections
//! field by field and returns one [`Change`] per elementary difference.

use crate::model::change::literal_text;
use crate::model::{Change, ChangeKind, FieldDefinition, SchemaCollection, SchemaDefinition, Severity};
use crate::{log_op_end, log_op_start};
use serde_json::Value;
use std::time::Instant;

/// Compute the list of changes between two schema collections.
///
/// Changes are emitted in discovery order: schema by schema in `old` order,
/// and within a schema removed/modified fields, then added fields, then
/// required-set relaxations and tightenings. Schemas only present in `new`
/// come last. Nothing is deduplicated or re-sorted; one field can produce
/// several records.
pub fn diff(old: &SchemaCollection, new: &SchemaCollection) -> Vec<Change> {
    let start = Instant::now();
    log_op_start!(
        "diff_schemas",
        old_schema_count = old.len(),
        new_schema_count = new.len()
    );

    let mut changes = Vec::new();

    for (schema_name, old_schema) in old {
        match new.get(schema_name) {
            None => changes.push(Change {
                kind: ChangeKind::SchemaRemoved,
                schema: schema_name.clone(),
                field: None,
                severity: Severity::Breaking,
                description: None,
                path: None,
            }),
            Some(new_schema) => diff_schema(schema_name, old_schema, new_schema, &mut changes),
        }
    }

    for schema_name in new.keys() {
        if !old.contains_key(schema_name) {
            changes.push(Change {
                kind: ChangeKind::SchemaAdded,
                schema: schema_name.clone(),
                field: None,
                severity: Severity::NonBreaking,
                description: Some(format!("New schema added: {}", schema_name)),
                path: Some(schema_name.clone()),
            });
        }
    }

    let breaking_count = changes.iter().filter(|c| c.is_breaking()).count();
    log_op_end!(
        "diff_schemas",
        duration_ms = start.elapsed().as_millis() as u64,
        change_count = changes.len(),
        breaking_count = breaking_count
    );

    changes
}

/// Compare one schema present on both sides.
fn diff_schema(
    schema_name: &str,
    old_schema: &SchemaDefinition,
    new_schema: &SchemaDefinition,
    changes: &mut Vec<Change>,
) {
    let field_change = |kind: ChangeKind, field: &str, severity: Severity, description: String| {
        Change {
            kind,
            schema: schema_name.to_string(),
            field: Some(field.to_string()),
            severity,
            description: Some(description),
            path: Some(format!("{}.{}", schema_name, field)),
        }
    };

    for (field_name, old_field) in &old_schema.properties {
        match new_schema.field(field_name) {
            None => changes.push(field_change(
                ChangeKind::FieldRemoved,
                field_name,
                Severity::Breaking,
                format!("Removed field: {}", field_name),
            )),
            Some(new_field) => {
                for (kind, severity, description) in compare_field(old_field, new_field) {
                    tracing::debug!(
                        schema = schema_name,
                        field = field_name.as_str(),
                        change = kind.code(),
                        "field modified"
                    );
                    changes.push(field_change(kind, field_name, severity, description));
                }
            }
        }
    }

    for field_name in new_schema.properties.keys() {
        if !old_schema.has_field(field_name) {
            let required = new_schema.is_required(field_name);
            let (severity, label) = if required {
                (Severity::Breaking, "required")
            } else {
                (Severity::NonBreaking, "optional")
            };
            changes.push(field_change(
                ChangeKind::FieldAdded,
                field_name,
                severity,
                format!("Added {} field: {}", label, field_name),
            ));
        }
    }

    // Relaxing a constraint is safe for producers already sending the field.
    for field_name in &old_schema.required {
        if !new_schema.is_required(field_name) && new_schema.has_field(field_name) {
            changes.push(field_change(
                ChangeKind::FieldOptional,
                field_name,
                Severity::NonBreaking,
                format!("Field is now optional: {}", field_name),
            ));
        }
    }

    // Tightening breaks producers that omit the field.
    for field_name in &new_schema.required {
        if !old_schema.is_required(field_name) && old_schema.has_field(field_name) {
            changes.push(field_change(
                ChangeKind::FieldRequired,
                field_name,
                Severity::Breaking,
                format!("Field is now required: {}", field_name),
            ));
        }
    }
}

/// Enum literal equality. Numbers compare by value, so `1` and `1.0` match.
fn same_literal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

fn contains_literal(values: &[Value], value: &Value) -> bool {
    values.iter().any(|v| same_literal(v, value))
}

/// Compare a field present on both sides.
///
/// Type, enum and format are checked independently, so a single field can
/// report all of them at once.
fn compare_field(
    old_field: &FieldDefinition,
    new_field: &FieldDefinition,
) -> Vec<(ChangeKind, Severity, String)> {
    let mut out = Vec::new();

    if old_field.field_type != new_field.field_type {
        out.push((
            ChangeKind::FieldTypeChanged {
                old_type: old_field.field_type.clone(),
                new_type: new_field.field_type.clone(),
            },
            Severity::Breaking,
            format!(
                "Field type changed: {} → {}",
                or_none(&old_field.field_type),
                or_none(&new_field.field_type)
            ),
        ));
    }

    if let (Some(old_enum), Some(new_enum)) = (&old_field.enum_values, &new_field.enum_values) {
        for value in old_enum.iter().filter(|v| !contains_literal(new_enum, v)) {
            out.push((
                ChangeKind::EnumValueRemoved {
                    value: value.clone(),
                },
                Severity::Breaking,
                format!("Enum value removed: {}", literal_text(value)),
            ));
        }
        for value in new_enum.iter().filter(|v| !contains_literal(old_enum, v)) {
            out.push((
                ChangeKind::EnumValueAdded {
                    value: value.clone(),
                },
                Severity::NonBreaking,
                format!("Enum value added: {}", literal_text(value)),
            ));
        }
    }

    if old_field.format != new_field.format {
        out.push((
            ChangeKind::FieldFormatChanged {
                old_format: old_field.format.clone(),
                new_format: new_field.format.clone(),
            },
            Severity::Breaking,
            format!(
                "Field format changed: {} → {}",
                or_none(&old_field.format),
                or_none(&new_field.format)
            ),
        ));
    }

    out
}

pub(crate) fn or_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("none")
}
