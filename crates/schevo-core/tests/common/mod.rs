use schevo_core::impact::AffectedService;
use schevo_core::model::{
    FieldDefinition, Importance, SchemaCollection, SchemaDefinition, Service,
};

/// Build a collection from (name, schema) pairs, keeping their order
#[allow(dead_code)]
pub fn collection(entries: Vec<(&str, SchemaDefinition)>) -> SchemaCollection {
    entries
        .into_iter()
        .map(|(name, schema)| (name.to_string(), schema))
        .collect()
}

/// `UserSchema` with `id` and `email`, both required
#[allow(dead_code)]
pub fn user_schema_v1() -> SchemaDefinition {
    SchemaDefinition::object()
        .with_field("id", FieldDefinition::of_type("string"))
        .with_field("email", FieldDefinition::of_type("string").with_format("email"))
        .with_required("id")
        .with_required("email")
}

/// A service with the given schema-field dependencies
#[allow(dead_code)]
pub fn service(name: &str, importance: Importance, calls: u64, deps: &[&str]) -> Service {
    Service::new(name, importance, calls).with_dependencies(deps.iter().copied())
}

/// An affected service with `breaking` breaking matches and no changes attached
#[allow(dead_code)]
pub fn affected(name: &str, importance: Importance, calls: u64, breaking: usize) -> AffectedService {
    let mut record = AffectedService::new(Service::new(name, importance, calls), Vec::new(), Vec::new());
    record.breaking_changes = breaking;
    if breaking > 0 {
        record.impact_level = schevo_core::impact::ImpactLevel::High;
    }
    record
}
