//! Change counting and one-line change messages.

use crate::diff::engine::or_none;
use crate::model::change::literal_text;
use crate::model::{Change, ChangeKind};
use serde::{Deserialize, Serialize};

/// Counts over a change list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSummary {
    pub total: usize,
    pub breaking: usize,
    pub non_breaking: usize,
    pub has_breaking_changes: bool,
}

/// Summarize a change list.
pub fn summarize(changes: &[Change]) -> ChangeSummary {
    let breaking = changes.iter().filter(|c| c.is_breaking()).count();
    let non_breaking = changes.len() - breaking;
    ChangeSummary {
        total: changes.len(),
        breaking,
        non_breaking,
        has_breaking_changes: breaking > 0,
    }
}

/// One-line message for a change.
///
/// Uses the precomputed description when there is one and falls back to a
/// message built from the change kind otherwise.
pub fn format_change(change: &Change) -> String {
    if let Some(description) = &change.description {
        return description.clone();
    }

    let field = change.field.as_deref().unwrap_or_default();
    match &change.kind {
        ChangeKind::FieldRemoved => format!("Removed field: {}", field),
        ChangeKind::FieldAdded => format!("Added field: {}", field),
        ChangeKind::FieldTypeChanged { old_type, new_type } => {
            format!("{}: {} → {}", field, or_none(old_type), or_none(new_type))
        }
        ChangeKind::FieldRequired => format!("{} is now required", field),
        ChangeKind::FieldOptional => format!("{} is now optional", field),
        ChangeKind::SchemaRemoved => format!("Schema removed: {}", change.schema),
        ChangeKind::SchemaAdded => format!("Schema added: {}", change.schema),
        ChangeKind::EnumValueRemoved { value } => {
            format!("Enum value removed: {}", literal_text(value))
        }
        ChangeKind::EnumValueAdded { value } => format!("Enum value added: {}", literal_text(value)),
        ChangeKind::FieldFormatChanged {
            old_format,
            new_format,
        } => format!(
            "Format changed: {} → {}",
            or_none(old_format),
            or_none(new_format)
        ),
    }
}
