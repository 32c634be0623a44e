//! Domain Audit Core - failover audit kernel
//!
//! This crate provides the pure, I/O-free building blocks of the domain
//! failover audit trail:
//! - Domain configuration snapshot model
//! - Snapshot codec (JSON + Snappy) for compact persistence
//! - Write-time change summary used as a cheap filter index
//! - Read-time failover differ reconstructing every ownership transition
//! - Filter predicate evaluated against persisted summaries
//! - Structured error and logging facilities shared by the outer crates

pub mod codec;
pub mod diff;
pub mod errors;
pub mod filter;
pub mod logging_facility;
pub mod model;

pub use domain_audit_types::schema;

// Re-export commonly used types
pub use codec::{decompress_and_deserialize, serialize_and_compress, ENCODING_JSON_SNAPPY};
pub use diff::{compute_change_summary, compute_cluster_failovers, ChangeSummary};
pub use errors::{AuditError, ExError, ExErrorKind, Result};
pub use filter::{should_include_event, FailoverHistoryFilters};
pub use model::{
    ActiveClusterInfo, ActiveClusters, ClusterAttributeRef, ClusterAttributeScope,
    ClusterFailover, DomainOperationType, DomainSnapshot, ReplicationConfig,
};
