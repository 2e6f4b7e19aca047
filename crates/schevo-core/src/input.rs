//! Analysis input documents.
//!
//! An input document is a JSON object:
//!
//! ```json
//! {
//!   "oldSchemas": { "UserSchema": { "type": "object", "properties": {...}, "required": [...] } },
//!   "newSchemas": { ... },
//!   "services": [ { "name": "user-service", "importance": "HIGH", "callsPerDay": 25000,
//!                   "dependencies": ["UserSchema.id"] } ]
//! }
//! ```
//!
//! `services` is optional. Parsing is where malformed input is rejected; the
//! pipeline stages never see an invalid document.

use crate::errors::{io_error, ExError, Result, SchevoError};
use crate::model::{SchemaCollection, Service};
use crate::{log_op_end, log_op_error, log_op_start};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

pub const KEY_OLD_SCHEMAS: &str = "oldSchemas";
pub const KEY_NEW_SCHEMAS: &str = "newSchemas";
pub const KEY_SERVICES: &str = "services";

/// A validated analysis input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub old_schemas: SchemaCollection,
    pub new_schemas: SchemaCollection,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl AnalysisInput {
    pub fn new(old_schemas: SchemaCollection, new_schemas: SchemaCollection) -> Self {
        Self {
            old_schemas,
            new_schemas,
            services: Vec::new(),
        }
    }

    /// Builder: set the service list
    pub fn with_services(mut self, services: Vec<Service>) -> Self {
        self.services = services;
        self
    }

    /// Read and parse an input document from disk.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, otherwise see [`parse_analysis_document`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).map_err(|e| io_error("parse_analysis_document", path, e))?;
        parse_analysis_document(&bytes)
    }
}

/// Parse and validate an analysis input document.
///
/// # Errors
///
/// - `MalformedDocument`: not UTF-8, not JSON, or the root is not an object
/// - `MissingField`: `oldSchemas` or `newSchemas` is absent or null
/// - `InvalidInput`: a collection has the wrong shape, or service names repeat
pub fn parse_analysis_document(bytes: &[u8]) -> Result<AnalysisInput> {
    let start = Instant::now();
    log_op_start!("parse_analysis_document", byte_len = bytes.len());

    match parse_document(bytes) {
        Ok(input) => {
            log_op_end!(
                "parse_analysis_document",
                duration_ms = start.elapsed().as_millis() as u64,
                old_schema_count = input.old_schemas.len(),
                new_schema_count = input.new_schemas.len(),
                service_count = input.services.len()
            );
            Ok(input)
        }
        Err(err) => {
            let ex_err = ExError::from(err).with_op("parse_analysis_document");
            log_op_error!(
                "parse_analysis_document",
                ex_err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(ex_err)
        }
    }
}

fn parse_document(bytes: &[u8]) -> std::result::Result<AnalysisInput, SchevoError> {
    let text = std::str::from_utf8(bytes).map_err(|e| SchevoError::MalformedDocument {
        reason: format!("document is not valid UTF-8: {}", e),
    })?;

    let raw: Value = serde_json::from_str(text).map_err(|e| SchevoError::MalformedDocument {
        reason: format!("document is not valid JSON: {}", e),
    })?;

    let Value::Object(mut root) = raw else {
        return Err(SchevoError::MalformedDocument {
            reason: "document root must be a JSON object".to_string(),
        });
    };

    let old_schemas = take_schemas(&mut root, KEY_OLD_SCHEMAS)?;
    let new_schemas = take_schemas(&mut root, KEY_NEW_SCHEMAS)?;

    let services: Vec<Service> = match root.remove(KEY_SERVICES) {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => {
            serde_json::from_value(value).map_err(|e| SchevoError::InvalidServices {
                reason: e.to_string(),
            })?
        }
    };

    let mut seen = HashSet::new();
    for service in &services {
        if !seen.insert(service.name.as_str()) {
            return Err(SchevoError::DuplicateService {
                name: service.name.clone(),
            });
        }
    }

    Ok(AnalysisInput {
        old_schemas,
        new_schemas,
        services,
    })
}

fn take_schemas(
    root: &mut Map<String, Value>,
    key: &str,
) -> std::result::Result<SchemaCollection, SchevoError> {
    match root.remove(key) {
        None | Some(Value::Null) => Err(SchevoError::MissingSchemas {
            key: key.to_string(),
        }),
        Some(value) => serde_json::from_value(value).map_err(|e| SchevoError::InvalidSchemas {
            key: key.to_string(),
            reason: e.to_string(),
        }),
    }
}
