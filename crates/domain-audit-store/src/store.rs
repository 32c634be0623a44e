//! Storage collaborator interface.

use async_trait::async_trait;

use crate::entry::{
    AuditLogEntry, GetAuditLogEntryRequest, ReadAuditLogRequest, ReadAuditLogResponse,
};
use crate::errors::Result;

/// Durable home of audit log entries
///
/// Implementations own ordering and pagination: `read_audit_log` returns a
/// domain's entries newest first, and the page token it hands out is opaque
/// to callers.
#[async_trait]
pub trait AuditLogStore: Send + Sync {
    /// Read one page of a domain's audit log
    ///
    /// # Errors
    ///
    /// - `InvalidInput` — empty domain id, zero page size, or a malformed token
    /// - `Persistence` — the backing store failed
    async fn read_audit_log(&self, request: &ReadAuditLogRequest) -> Result<ReadAuditLogResponse>;

    /// Fetch exactly one entry, or `None` if no entry matches
    ///
    /// # Errors
    ///
    /// - `Persistence` — the backing store failed
    async fn get_audit_log_entry(
        &self,
        request: &GetAuditLogEntryRequest,
    ) -> Result<Option<AuditLogEntry>>;

    /// Append a new entry
    ///
    /// # Errors
    ///
    /// - `InvalidInput` — empty domain id or event id
    /// - `Persistence` — duplicate event id, or the backing store failed
    async fn create_audit_log_entry(&self, entry: AuditLogEntry) -> Result<()>;
}
