//! Change records emitted by the differ.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether a change can break existing consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Breaking,
    NonBreaking,
}

impl Severity {
    pub fn is_breaking(&self) -> bool {
        matches!(self, Severity::Breaking)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Breaking => "BREAKING",
            Severity::NonBreaking => "NON_BREAKING",
        }
    }
}

/// The kind of an elementary schema difference, with its kind-specific data.
///
/// Serialized inline into [`Change`] under the `type` key, e.g.
/// `{"type": "FIELD_TYPE_CHANGED", "oldType": "string", "newType": "integer", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeKind {
    SchemaRemoved,
    SchemaAdded,
    FieldRemoved,
    FieldAdded,
    FieldTypeChanged {
        #[serde(rename = "oldType", default, skip_serializing_if = "Option::is_none")]
        old_type: Option<String>,
        #[serde(rename = "newType", default, skip_serializing_if = "Option::is_none")]
        new_type: Option<String>,
    },
    FieldFormatChanged {
        #[serde(rename = "oldFormat", default, skip_serializing_if = "Option::is_none")]
        old_format: Option<String>,
        #[serde(rename = "newFormat", default, skip_serializing_if = "Option::is_none")]
        new_format: Option<String>,
    },
    EnumValueRemoved {
        value: Value,
    },
    EnumValueAdded {
        value: Value,
    },
    FieldRequired,
    FieldOptional,
}

impl ChangeKind {
    /// Stable upper-case code, identical to the serialized `type` value
    pub fn code(&self) -> &'static str {
        match self {
            ChangeKind::SchemaRemoved => "SCHEMA_REMOVED",
            ChangeKind::SchemaAdded => "SCHEMA_ADDED",
            ChangeKind::FieldRemoved => "FIELD_REMOVED",
            ChangeKind::FieldAdded => "FIELD_ADDED",
            ChangeKind::FieldTypeChanged { .. } => "FIELD_TYPE_CHANGED",
            ChangeKind::FieldFormatChanged { .. } => "FIELD_FORMAT_CHANGED",
            ChangeKind::EnumValueRemoved { .. } => "ENUM_VALUE_REMOVED",
            ChangeKind::EnumValueAdded { .. } => "ENUM_VALUE_ADDED",
            ChangeKind::FieldRequired => "FIELD_REQUIRED",
            ChangeKind::FieldOptional => "FIELD_OPTIONAL",
        }
    }

    /// True for changes that apply to a whole schema rather than one field
    pub fn is_schema_level(&self) -> bool {
        matches!(self, ChangeKind::SchemaRemoved | ChangeKind::SchemaAdded)
    }
}

/// One elementary difference between the old and new schema collections.
///
/// A renamed field is never a single record: it shows up as a
/// `FIELD_REMOVED` for the old name and a `FIELD_ADDED` for the new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    #[serde(flatten)]
    pub kind: ChangeKind,

    pub schema: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    pub severity: Severity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `Schema.field` for field-level changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Change {
    pub fn is_breaking(&self) -> bool {
        self.severity.is_breaking()
    }

    pub fn field_name(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

/// Render a JSON literal the way it reads in a message: strings bare,
/// everything else as JSON text.
pub fn literal_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
