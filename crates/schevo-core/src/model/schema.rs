//! JSON-Schema-like definitions compared by the differ.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Named schema definitions, in document order.
///
/// Order matters: the differ reports changes in the order schemas and
/// fields appear in the input.
pub type SchemaCollection = IndexMap<String, SchemaDefinition>;

/// A single object schema: its fields and which of them are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: IndexMap<String, FieldDefinition>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub required: Vec<String>,
}

/// An explicit `null` reads the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl SchemaDefinition {
    /// Create an object schema with no fields
    pub fn object() -> Self {
        Self {
            schema_type: Some("object".to_string()),
            ..Self::default()
        }
    }

    /// Builder: add a field
    pub fn with_field(mut self, name: impl Into<String>, field: FieldDefinition) -> Self {
        self.properties.insert(name.into(), field);
        self
    }

    /// Builder: mark a field as required
    pub fn with_required(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.properties.get(name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

/// Definition of one field.
///
/// Only `type`, `format` and `enum` take part in comparison. Nested object
/// properties and any other keywords are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, FieldDefinition>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    /// Any other keywords (`description`, `minimum`, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl FieldDefinition {
    /// A field of the given JSON type
    pub fn of_type(field_type: impl Into<String>) -> Self {
        Self {
            field_type: Some(field_type.into()),
            ..Self::default()
        }
    }

    /// Builder: set the format
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Builder: set the enum values
    pub fn with_enum<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }
}
