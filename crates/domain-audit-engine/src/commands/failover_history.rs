//! Failover history: list and get orchestration.
//!
//! Listing scans the cheap per-entry change summaries and never decompresses
//! snapshots unless hydration is configured. Lookup decodes both snapshots of
//! one entry and recomputes its full transition list.
//!
//! ## Logging Ownership
//!
//! This layer owns lifecycle logging for both operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The store and core use only `tracing::debug!()` for internal details.

#![allow(clippy::result_large_err)]

use std::time::Instant;

use chrono::{DateTime, Utc};
use domain_audit_core::codec::{decompress_and_deserialize, ENCODING_JSON_SNAPPY};
use domain_audit_core::diff::compute_cluster_failovers;
use domain_audit_core::errors::{ExError, ExErrorKind};
use domain_audit_core::filter::should_include_event;
use domain_audit_core::model::{ClusterFailover, FailoverType};
use domain_audit_core::{log_op_end, log_op_error, log_op_start};
use domain_audit_store::{
    AuditLogEntry, AuditLogStore, GetAuditLogEntryRequest, ReadAuditLogRequest, Result,
};
use domain_audit_types::RequestContext;
use tracing::{debug, warn};

use crate::commands::types::{
    FailoverEvent, GetFailoverEventRequest, GetFailoverEventResponse,
    ListFailoverHistoryRequest, ListFailoverHistoryResponse,
};
use crate::config::EngineConfig;

const OP_LIST: &str = "list_failover_history";
const OP_GET: &str = "get_failover_event";

/// Read side of the domain audit trail
pub struct FailoverHistory<S> {
    store: S,
    config: EngineConfig,
}

impl<S: AuditLogStore> FailoverHistory<S> {
    pub fn new(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// List one page of failover events for a domain, newest first
    ///
    /// Entries that are not failovers, or whose change summary does not pass
    /// the request filters, are skipped. A page may therefore hold fewer
    /// events than the page size while a next-page token is still returned.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` — `filters.domain_id` is empty
    /// - `Internal` — hydration is enabled and an entry's snapshot does not decode
    /// - store errors, unchanged
    pub async fn list_failover_history(
        &self,
        request: &ListFailoverHistoryRequest,
    ) -> Result<ListFailoverHistoryResponse> {
        log_op_start!(
            OP_LIST,
            domain_id = %request.filters.domain_id,
            request_id = %request.context.request_id
        );
        let start = Instant::now();

        match self.list_impl(request).await {
            Ok(response) => {
                log_op_end!(
                    OP_LIST,
                    duration_ms = start.elapsed().as_millis() as u64,
                    num_events = response.failover_events.len(),
                    request_id = %request.context.request_id
                );
                Ok(response)
            }
            Err(e) => {
                log_op_error!(
                    OP_LIST,
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    request_id = %request.context.request_id
                );
                Err(e)
            }
        }
    }

    async fn list_impl(
        &self,
        request: &ListFailoverHistoryRequest,
    ) -> Result<ListFailoverHistoryResponse> {
        let filters = &request.filters;
        if filters.domain_id.is_empty() {
            return Err(invalid_input(OP_LIST, &request.context, "domain_id is required"));
        }

        let page_size = if request.page_size > 0 {
            request.page_size
        } else {
            self.config.default_page_size
        };

        let page = self
            .store
            .read_audit_log(&ReadAuditLogRequest {
                domain_id: filters.domain_id.clone(),
                page_size,
                next_page_token: request.next_page_token.clone(),
            })
            .await?;

        let mut failover_events = Vec::with_capacity(page.entries.len());
        for entry in &page.entries {
            if !entry.operation_type.is_failover() {
                continue;
            }
            if !should_include_event(&entry.comment, filters) {
                debug!(event_id = %entry.event_id, "failover event filtered out");
                continue;
            }

            let cluster_failovers = if self.config.hydrate_list_responses {
                entry_failovers(OP_LIST, entry, &request.context)?
            } else {
                Vec::new()
            };

            failover_events.push(FailoverEvent {
                id: entry.event_id.clone(),
                created_time_ms: entry.created_time_ms(),
                // Entries carry no grace-period data
                failover_type: FailoverType::Force,
                cluster_failovers,
            });
        }

        Ok(ListFailoverHistoryResponse {
            failover_events,
            next_page_token: page.next_page_token,
        })
    }

    /// Recompute every ownership transition of one failover event
    ///
    /// A missing entry, or one whose snapshots were not captured, yields an
    /// empty response rather than an error.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` — missing domain id, event id, or creation time
    /// - `Internal` — the stored snapshots do not decode
    /// - store errors, unchanged
    pub async fn get_failover_event(
        &self,
        request: &GetFailoverEventRequest,
    ) -> Result<GetFailoverEventResponse> {
        log_op_start!(
            OP_GET,
            domain_id = %request.domain_id,
            event_id = %request.failover_event_id,
            request_id = %request.context.request_id
        );
        let start = Instant::now();

        match self.get_impl(request).await {
            Ok(response) => {
                log_op_end!(
                    OP_GET,
                    duration_ms = start.elapsed().as_millis() as u64,
                    num_failovers = response.cluster_failovers.len(),
                    request_id = %request.context.request_id
                );
                Ok(response)
            }
            Err(e) => {
                log_op_error!(
                    OP_GET,
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    request_id = %request.context.request_id
                );
                Err(e)
            }
        }
    }

    async fn get_impl(
        &self,
        request: &GetFailoverEventRequest,
    ) -> Result<GetFailoverEventResponse> {
        let ctx = &request.context;
        if request.domain_id.is_empty() {
            return Err(invalid_input(OP_GET, ctx, "domain_id is required"));
        }
        if request.failover_event_id.is_empty() {
            return Err(invalid_input(OP_GET, ctx, "failover_event_id is required"));
        }
        let Some(created_time_ms) = request.created_time_ms else {
            return Err(invalid_input(OP_GET, ctx, "created_time is required"));
        };
        let Some(created_time) = DateTime::<Utc>::from_timestamp_millis(created_time_ms) else {
            return Err(invalid_input(OP_GET, ctx, "created_time is out of range"));
        };

        let entry = self
            .store
            .get_audit_log_entry(&GetAuditLogEntryRequest {
                domain_id: request.domain_id.clone(),
                event_id: request.failover_event_id.clone(),
                created_time,
            })
            .await?;

        let Some(entry) = entry else {
            debug!(
                domain_id = %request.domain_id,
                event_id = %request.failover_event_id,
                "audit log entry not found"
            );
            return Ok(GetFailoverEventResponse::default());
        };

        Ok(GetFailoverEventResponse {
            cluster_failovers: entry_failovers(OP_GET, &entry, ctx)?,
        })
    }
}

/// Decode both snapshots of an entry and diff them
///
/// Uncaptured snapshots yield no transitions.
fn entry_failovers(
    op: &str,
    entry: &AuditLogEntry,
    ctx: &RequestContext,
) -> Result<Vec<ClusterFailover>> {
    if entry.state_before.is_empty() || entry.state_after.is_empty() {
        warn!(
            domain_id = %entry.domain_id,
            event_id = %entry.event_id,
            "audit log entry has no captured domain state"
        );
        return Ok(Vec::new());
    }

    for encoding in [&entry.state_before_encoding, &entry.state_after_encoding] {
        if !encoding.is_empty() && encoding != ENCODING_JSON_SNAPPY {
            return Err(decode_failure(op, entry, ctx)
                .with_message(format!("unsupported domain state encoding '{}'", encoding)));
        }
    }

    let before = decompress_and_deserialize(&entry.state_before)
        .map_err(|e| decode_failure(op, entry, ctx).with_source(e.into()))?;
    let after = decompress_and_deserialize(&entry.state_after)
        .map_err(|e| decode_failure(op, entry, ctx).with_source(e.into()))?;

    Ok(compute_cluster_failovers(&before, &after))
}

fn decode_failure(op: &str, entry: &AuditLogEntry, ctx: &RequestContext) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op(op.to_string())
        .with_domain_id(entry.domain_id.as_str())
        .with_event_id(entry.event_id.as_str())
        .with_request_id(ctx.request_id.clone())
        .with_message("failed to decompress domain state")
}

fn invalid_input(op: &str, ctx: &RequestContext, message: &str) -> ExError {
    let err = ExError::new(ExErrorKind::InvalidInput)
        .with_op(op.to_string())
        .with_request_id(ctx.request_id.clone())
        .with_message(message.to_string());
    match &ctx.trace_id {
        Some(trace_id) => err.with_trace_id(trace_id.clone()),
        None => err,
    }
}
