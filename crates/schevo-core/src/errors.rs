use schevo_core_types::RequestId;
use thiserror::Error;

/// Result type alias using the structured error facility
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure Schevo can report maps to one of these kinds. Each kind has a
/// stable code for programmatic handling, tests and the CLI exit message.
/// The pipeline stages themselves never fail; all kinds belong to the
/// boundary (input documents, topology files, file I/O, export).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input documents
    /// A document has the wrong shape (e.g. `services` is not an array)
    InvalidInput,
    /// Input bytes are not valid UTF-8 JSON, or the root is not an object
    MalformedDocument,
    /// A required top-level key (`oldSchemas`, `newSchemas`) is absent
    MissingField,

    // Configuration
    /// A service topology file could not be parsed
    InvalidTopology,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MalformedDocument => "ERR_MALFORMED_DOCUMENT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::InvalidTopology => "ERR_INVALID_TOPOLOGY",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus optional
/// context (operation, offending entity, request id) for diagnostics.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (service name, document key, file path)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for Schevo boundary operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchevoError {
    /// Input is not parseable as a JSON object
    #[error("Malformed input document: {reason}")]
    MalformedDocument { reason: String },

    /// One of the two schema collections is missing from the input
    #[error("Input document is missing `{key}`")]
    MissingSchemas { key: String },

    /// A schema collection does not have the expected shape
    #[error("Invalid schema collection `{key}`: {reason}")]
    InvalidSchemas { key: String, reason: String },

    /// The service list does not have the expected shape
    #[error("Invalid services: {reason}")]
    InvalidServices { reason: String },

    /// Two services share the same name
    #[error("Duplicate service name: {name}")]
    DuplicateService { name: String },

    /// A topology document could not be parsed
    #[error("Unreadable service topology: {reason}")]
    TopologyUnreadable { reason: String },

    /// Serialization failure while producing output
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<SchevoError> for ExError {
    fn from(err: SchevoError) -> Self {
        match err {
            SchevoError::MalformedDocument { reason } => {
                ExError::new(ExErrorKind::MalformedDocument).with_message(reason)
            }

            SchevoError::MissingSchemas { key } => ExError::new(ExErrorKind::MissingField)
                .with_message(format!("required key `{}` is absent", key))
                .with_entity_id(key),

            SchevoError::InvalidSchemas { key, reason } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_entity_id(key)
                    .with_message(reason)
            }

            SchevoError::InvalidServices { reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity_id("services")
                .with_message(reason),

            SchevoError::DuplicateService { name } => ExError::new(ExErrorKind::InvalidInput)
                .with_message("Service names must be unique")
                .with_entity_id(name),

            SchevoError::TopologyUnreadable { reason } => {
                ExError::new(ExErrorKind::InvalidTopology).with_message(reason)
            }

            SchevoError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to SchevoError
impl From<serde_json::Error> for SchevoError {
    fn from(err: serde_json::Error) -> Self {
        SchevoError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Create an IO error for the given operation and path
pub fn io_error(op: &str, path: &std::path::Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(op)
        .with_entity_id(path.display().to_string())
        .with_message(err.to_string())
}
