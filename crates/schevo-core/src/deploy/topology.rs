//! Service topology: which services logically deploy before which.
//!
//! The planner only uses the topology to phrase prerequisites, never to
//! reorder steps.
//!
//! A topology file is a YAML (or JSON) mapping from service name to its
//! predecessors:
//!
//! ```yaml
//! user-service: []
//! auth-service: [user-service]
//! payment-service:
//!   - order-service
//!   - user-service
//! ```

use crate::errors::{io_error, ExError, Result, SchevoError};
use crate::model::Service;
use crate::{log_op_end, log_op_error, log_op_start};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

/// Mapping from service name to its ordered logical predecessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceTopology {
    predecessors: IndexMap<String, Vec<String>>,
}

impl ServiceTopology {
    /// A topology that knows no services.
    pub fn empty() -> Self {
        Self {
            predecessors: IndexMap::new(),
        }
    }

    /// The built-in topology for a typical commerce platform.
    pub fn standard() -> Self {
        Self::empty()
            .with_service("user-service", Vec::<String>::new())
            .with_service("auth-service", ["user-service"])
            .with_service("notification-service", ["user-service"])
            .with_service("order-service", ["user-service", "auth-service"])
            .with_service("payment-service", ["order-service", "user-service"])
            .with_service("inventory-service", ["product-service"])
            .with_service("analytics-service", ["user-service", "order-service"])
            .with_service("reporting-service", ["user-service", "order-service"])
            .with_service("search-service", ["user-service"])
            .with_service("shipping-service", ["order-service", "user-service"])
    }

    /// Derive a topology from the services' declared runtime dependencies.
    pub fn from_services(services: &[Service]) -> Self {
        services.iter().fold(Self::empty(), |topology, service| {
            topology.with_service(
                service.name.clone(),
                service.service_dependencies.iter().cloned(),
            )
        })
    }

    /// Parse a topology document.
    ///
    /// A service mapped to nothing (`name:` or `name: null`) has no
    /// predecessors.
    ///
    /// # Errors
    ///
    /// `InvalidTopology` if the text is not a mapping of names to name lists.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let raw: IndexMap<String, Option<Vec<String>>> =
            serde_yaml::from_str(content).map_err(|e| {
                ExError::from(SchevoError::TopologyUnreadable {
                    reason: e.to_string(),
                })
                .with_op("load_topology")
            })?;

        Ok(Self {
            predecessors: raw
                .into_iter()
                .map(|(name, preds)| (name, preds.unwrap_or_default()))
                .collect(),
        })
    }

    /// Load a topology document from disk.
    ///
    /// # Errors
    ///
    /// - `Io` if the file cannot be read
    /// - `InvalidTopology` if it cannot be parsed
    pub fn load(path: &Path) -> Result<Self> {
        let start = Instant::now();
        log_op_start!("load_topology", path = %path.display());

        let result = std::fs::read_to_string(path)
            .map_err(|e| io_error("load_topology", path, e))
            .and_then(|content| Self::from_yaml_str(&content))
            .map_err(|e| e.with_entity_id(path.display().to_string()));

        match &result {
            Ok(topology) => {
                log_op_end!(
                    "load_topology",
                    duration_ms = start.elapsed().as_millis() as u64,
                    service_count = topology.len()
                );
            }
            Err(err) => {
                log_op_error!(
                    "load_topology",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
            }
        }

        result
    }

    /// Builder: set the predecessors of a service, replacing any existing entry.
    pub fn with_service<I, S>(mut self, name: impl Into<String>, predecessors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predecessors.insert(
            name.into(),
            predecessors.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Predecessors of a service; empty for unknown services.
    pub fn predecessors(&self, service: &str) -> &[String] {
        self.predecessors
            .get(service)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, service: &str) -> bool {
        self.predecessors.contains_key(service)
    }

    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }
}

impl Default for ServiceTopology {
    fn default() -> Self {
        Self::standard()
    }
}
