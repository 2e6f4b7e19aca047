//! Affected-service records produced by the resolver.

use crate::model::{Change, Service};
use serde::{Deserialize, Serialize};

/// Binary impact classification of an affected service.
///
/// Independent of [`Importance`](crate::model::Importance): a LOW-importance
/// service with one breaking match is HIGH impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpactLevel {
    High,
    Low,
}

impl ImpactLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::High => "HIGH",
            ImpactLevel::Low => "LOW",
        }
    }
}

/// A service together with the changes that reach it.
///
/// Serializes as the service's own fields plus the impact fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectedService {
    #[serde(flatten)]
    pub service: Service,
    /// Number of breaking matches, counted once per matching dependency
    pub breaking_changes: usize,
    /// Number of non-breaking matches, counted once per matching dependency
    pub warnings: usize,
    pub impact_level: ImpactLevel,
    /// Breaking matches first, then warnings
    pub changes: Vec<Change>,
}

impl AffectedService {
    /// Build the record from the bucketed matches.
    pub fn new(service: Service, breaking: Vec<Change>, warnings: Vec<Change>) -> Self {
        let impact_level = if breaking.is_empty() {
            ImpactLevel::Low
        } else {
            ImpactLevel::High
        };
        let breaking_changes = breaking.len();
        let warning_count = warnings.len();
        let mut changes = breaking;
        changes.extend(warnings);

        Self {
            service,
            breaking_changes,
            warnings: warning_count,
            impact_level,
            changes,
        }
    }

    pub fn name(&self) -> &str {
        &self.service.name
    }
}
