//! Error handling for domain-audit-store
//!
//! Wraps domain-audit-core ExError with store-specific helpers

use domain_audit_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an error for a page token that does not decode
pub fn invalid_page_token(op: &str, token: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op(op.to_string())
        .with_message(format!("Invalid page token '{}'", token))
}

/// Create an error for a zero or otherwise unusable page size
pub fn invalid_page_size(op: &str, page_size: usize) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op(op.to_string())
        .with_message(format!("Page size must be positive, got {}", page_size))
}

/// Create an error for an event id that already exists in a domain
pub fn duplicate_entry(domain_id: &str, event_id: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("create_audit_log_entry")
        .with_domain_id(domain_id)
        .with_event_id(event_id)
        .with_message("Audit log entry already exists")
}

/// Create a missing-field error for store requests
pub fn missing_field(op: &str, field: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op(op.to_string())
        .with_message(format!("{} is required", field))
}
