use domain_audit_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using AuditError
pub type Result<T> = std::result::Result<T, AuditError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that the service layer can hand to
/// clients and that tests can assert on without matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Request validation
    InvalidInput,
    NotFound,

    // Snapshot codec
    /// A snapshot could not be serialized or compressed
    Encode,
    /// Stored bytes are not valid compressed output or not a valid snapshot
    Decode,
    /// A persisted change summary could not be parsed (recovered by fail-open filtering)
    FilterParse,

    // Integration/IO
    Serialization,
    Persistence,
    Config,
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Encode => "ERR_ENCODE",
            ExErrorKind::Decode => "ERR_DECODE",
            ExErrorKind::FilterParse => "ERR_FILTER_PARSE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus whatever request context was known at
/// the point of failure. Store and engine APIs return this type.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    domain_id: Option<String>,
    event_id: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            domain_id: None,
            event_id: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_domain_id(mut self, id: impl Into<String>) -> Self {
        self.domain_id = Some(id.into());
        self
    }

    pub fn with_event_id(mut self, id: impl Into<String>) -> Self {
        self.event_id = Some(id.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the lower-level error that caused this one
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn domain_id(&self) -> Option<&str> {
        self.domain_id.as_deref()
    }

    pub fn event_id(&self) -> Option<&str> {
        self.event_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

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
        if let Some(domain_id) = &self.domain_id {
            write!(f, " (domain_id: {})", domain_id)?;
        }
        if let Some(event_id) = &self.event_id {
            write!(f, " (event_id: {})", event_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
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

/// Which half of snapshot decoding failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    /// The bytes are not valid Snappy output
    Decompress,
    /// The decompressed bytes are not a valid snapshot document
    Deserialize,
}

impl std::fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeStage::Decompress => f.write_str("decompress"),
            DecodeStage::Deserialize => f.write_str("deserialize"),
        }
    }
}

/// Errors raised by the audit kernel
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuditError {
    /// Snapshot could not be serialized or compressed
    #[error("Failed to encode domain snapshot: {message}")]
    Encode { message: String },

    /// Snapshot bytes could not be decoded
    #[error("Failed to decode domain snapshot ({stage}): {message}")]
    Decode { stage: DecodeStage, message: String },

    /// Persisted change summary is not valid JSON for the summary shape
    #[error("Failed to parse change summary: {message}")]
    FilterParse { message: String },

    /// A request is missing a required field
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    /// The storage collaborator failed
    #[error("Audit log storage failure: {message}")]
    Storage { message: String },
}

impl AuditError {
    /// Decode stage, if this is a decode failure
    pub fn decode_stage(&self) -> Option<DecodeStage> {
        match self {
            AuditError::Decode { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

/// Conversion from AuditError to the canonical ExError
impl From<AuditError> for ExError {
    fn from(err: AuditError) -> Self {
        match err {
            AuditError::Encode { message } => ExError::new(ExErrorKind::Encode)
                .with_op("serialize_and_compress")
                .with_message(message),

            AuditError::Decode { stage, message } => ExError::new(ExErrorKind::Decode)
                .with_op("decompress_and_deserialize")
                .with_message(format!("{} failed: {}", stage, message)),

            AuditError::FilterParse { message } => ExError::new(ExErrorKind::FilterParse)
                .with_op("parse_change_summary")
                .with_message(message),

            AuditError::InvalidRequest { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }

            AuditError::Storage { message } => {
                ExError::new(ExErrorKind::Persistence).with_message(message)
            }
        }
    }
}
