//! Snapshot comparison for failover auditing.
//!
//! Two comparisons run over the same before/after pair at different times:
//!
//! ```ignore
//! use domain_audit_core::diff::{compute_change_summary, compute_cluster_failovers};
//!
//! // write time: small index persisted next to the compressed snapshots
//! let summary = compute_change_summary(&before, &after);
//! // read time: full reconstruction of every ownership transition
//! let failovers = compute_cluster_failovers(&before, &after);
//! ```
//!
//! ## Guarantees
//!
//! - **Totality**: neither comparison fails for well-formed snapshots; a
//!   missing replication config is treated as "nothing configured".
//! - **Determinism**: scopes and attribute names are visited in lexical
//!   order, so output order is stable for equal inputs.
//! - **Known asymmetry**: the summary only reports attributes present on both
//!   sides. Additions and removals appear in the failover list but cannot be
//!   matched by list-time attribute filters.

pub mod failover;
pub mod human_summary;
pub mod summary;

pub use failover::compute_cluster_failovers;
pub use human_summary::render_failover_summary;
pub use summary::{compute_change_summary, ChangeSummary};
