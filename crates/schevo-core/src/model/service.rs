//! Downstream services and what they depend on.

use serde::{Deserialize, Serialize};

/// Business importance of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Importance {
    Low,
    Medium,
    High,
    Critical,
}

impl Importance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Low => "LOW",
            Importance::Medium => "MEDIUM",
            Importance::High => "HIGH",
            Importance::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Importance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service consuming schema fields.
///
/// `dependencies` are `"Schema.field"` paths. `service_dependencies` names
/// the services this one calls at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    pub importance: Importance,
    #[serde(default)]
    pub calls_per_day: u64,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub service_dependencies: Vec<String>,
    #[serde(default)]
    pub is_core: bool,
}

impl Service {
    pub fn new(name: impl Into<String>, importance: Importance, calls_per_day: u64) -> Self {
        Self {
            name: name.into(),
            importance,
            calls_per_day,
            dependencies: Vec::new(),
            service_dependencies: Vec::new(),
            is_core: false,
        }
    }

    /// Builder: add schema-field dependencies
    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies.extend(deps.into_iter().map(Into::into));
        self
    }

    /// Builder: add runtime service dependencies
    pub fn with_service_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.service_dependencies
            .extend(deps.into_iter().map(Into::into));
        self
    }

    /// Builder: mark as a core service
    pub fn core(mut self) -> Self {
        self.is_core = true;
        self
    }
}
