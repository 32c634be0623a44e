//! Persisted audit log records and the requests that read them.

use chrono::{DateTime, Utc};
use domain_audit_core::model::DomainOperationType;
use serde::{Deserialize, Serialize};

/// One persisted domain mutation
///
/// `state_before`/`state_after` hold codec output tagged by their encoding;
/// `comment` holds the serialized change summary used as the list filter
/// index. An empty state payload means the snapshot was not captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub domain_id: String,
    pub event_id: String,
    pub created_time: DateTime<Utc>,
    pub operation_type: DomainOperationType,
    pub state_before: Vec<u8>,
    pub state_before_encoding: String,
    pub state_after: Vec<u8>,
    pub state_after_encoding: String,
    pub comment: String,
    pub identity: String,
    pub identity_type: String,
}

impl AuditLogEntry {
    pub fn created_time_ms(&self) -> i64 {
        self.created_time.timestamp_millis()
    }

    /// Sort key for newest-first listing: `(created_time_ms, event_id)`
    pub fn page_key(&self) -> (i64, &str) {
        (self.created_time_ms(), self.event_id.as_str())
    }
}

/// Request for one page of a domain's audit log, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadAuditLogRequest {
    pub domain_id: String,
    pub page_size: usize,
    /// Opaque token from a previous response
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadAuditLogResponse {
    pub entries: Vec<AuditLogEntry>,
    /// `None` when this is the last page
    pub next_page_token: Option<String>,
}

/// Exact lookup of one entry
///
/// `created_time` is matched at millisecond resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAuditLogEntryRequest {
    pub domain_id: String,
    pub event_id: String,
    pub created_time: DateTime<Utc>,
}
