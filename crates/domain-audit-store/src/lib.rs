//! Domain Audit Store - persistence boundary for the audit log
//!
//! Provides:
//! - `AuditLogStore`, the async storage collaborator consumed by the engine
//! - Audit log entry and request/response types
//! - Opaque page-token encoding
//! - `MemoryAuditLogStore`, an in-process reference implementation

pub mod cursor;
pub mod entry;
pub mod errors;
pub mod memory;
pub mod store;

// Re-export key types
pub use entry::{
    AuditLogEntry, GetAuditLogEntryRequest, ReadAuditLogRequest, ReadAuditLogResponse,
};
pub use errors::Result;
pub use memory::MemoryAuditLogStore;
pub use store::AuditLogStore;
