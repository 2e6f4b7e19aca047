//! Dependency matching between services and schema changes.

use crate::impact::model::AffectedService;
use crate::model::{Change, ChangeKind, Service};
use crate::{log_op_end, log_op_start};
use std::time::Instant;

/// A parsed `"Schema.field"` dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyRef<'a> {
    pub schema: &'a str,
    /// `None` when the dependency names a whole schema
    pub field: Option<&'a str>,
}

impl DependencyRef<'_> {
    /// Whether a change reaches this dependency.
    ///
    /// A removed schema reaches every dependency on it, whatever the field.
    pub fn is_hit_by(&self, change: &Change) -> bool {
        change.schema == self.schema
            && (change.field.as_deref() == self.field
                || matches!(change.kind, ChangeKind::SchemaRemoved))
    }
}

/// Split a dependency path on its first `.`.
pub fn parse_dependency(dependency: &str) -> DependencyRef<'_> {
    match dependency.split_once('.') {
        Some((schema, field)) => DependencyRef {
            schema,
            field: Some(field),
        },
        None => DependencyRef {
            schema: dependency,
            field: None,
        },
    }
}

/// Determine which services are affected by a change list.
///
/// The result keeps the input order of `services` and contains only services
/// with at least one match. A change matching several dependencies of the
/// same service is counted once per dependency.
pub fn resolve(changes: &[Change], services: &[Service]) -> Vec<AffectedService> {
    let start = Instant::now();
    log_op_start!(
        "resolve_impact",
        change_count = changes.len(),
        service_count = services.len()
    );

    let mut affected = Vec::new();

    for service in services {
        let mut breaking = Vec::new();
        let mut warnings = Vec::new();

        for dependency in &service.dependencies {
            let dep = parse_dependency(dependency);
            for change in changes.iter().filter(|c| dep.is_hit_by(c)) {
                if change.is_breaking() {
                    breaking.push(change.clone());
                } else {
                    warnings.push(change.clone());
                }
            }
        }

        if breaking.is_empty() && warnings.is_empty() {
            continue;
        }

        tracing::debug!(
            service = service.name.as_str(),
            breaking = breaking.len(),
            warnings = warnings.len(),
            "service affected"
        );
        affected.push(AffectedService::new(service.clone(), breaking, warnings));
    }

    log_op_end!(
        "resolve_impact",
        duration_ms = start.elapsed().as_millis() as u64,
        affected_count = affected.len()
    );

    affected
}
