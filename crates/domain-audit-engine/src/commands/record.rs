//! Write side: turn a domain mutation into an audit log entry.

#![allow(clippy::result_large_err)]

use std::time::Instant;

use chrono::{DateTime, Utc};
use domain_audit_core::codec::{serialize_and_compress, ENCODING_JSON_SNAPPY};
use domain_audit_core::diff::compute_change_summary;
use domain_audit_core::errors::{ExError, ExErrorKind};
use domain_audit_core::model::{DomainOperationType, DomainSnapshot};
use domain_audit_core::{log_op_end, log_op_error, log_op_start};
use domain_audit_store::{AuditLogEntry, AuditLogStore, Result};
use domain_audit_types::RequestContext;
use uuid::Uuid;

/// A captured mutation of one domain
///
/// `before` is absent for creations; `after` is absent for deletions.
#[derive(Debug, Clone)]
pub struct DomainMutation {
    pub domain_id: String,
    pub operation_type: DomainOperationType,
    pub before: Option<DomainSnapshot>,
    pub after: Option<DomainSnapshot>,
    pub identity: String,
    pub identity_type: String,
    pub context: RequestContext,
}

impl DomainMutation {
    pub fn new(
        domain_id: impl Into<String>,
        operation_type: DomainOperationType,
        before: Option<DomainSnapshot>,
        after: Option<DomainSnapshot>,
    ) -> Self {
        Self {
            domain_id: domain_id.into(),
            operation_type,
            before,
            after,
            identity: String::new(),
            identity_type: String::new(),
            context: RequestContext::default(),
        }
    }

    pub fn with_identity(
        mut self,
        identity: impl Into<String>,
        identity_type: impl Into<String>,
    ) -> Self {
        self.identity = identity.into();
        self.identity_type = identity_type.into();
        self
    }
}

/// Encode a mutation, summarize it, and persist it as a new entry
///
/// The event id is a fresh UUIDv7 and the creation time is the current UTC
/// time truncated to milliseconds, the resolution at which entries are
/// looked up.
///
/// # Errors
///
/// - `InvalidInput` — empty domain id
/// - `Encode` — a snapshot could not be encoded
/// - store errors, unchanged
pub async fn record_domain_mutation<S>(
    store: &S,
    mutation: &DomainMutation,
) -> Result<AuditLogEntry>
where
    S: AuditLogStore + ?Sized,
{
    log_op_start!(
        "record_domain_mutation",
        domain_id = %mutation.domain_id,
        operation_type = mutation.operation_type.as_str(),
        request_id = %mutation.context.request_id
    );
    let start = Instant::now();

    match record_impl(store, mutation).await {
        Ok(entry) => {
            log_op_end!(
                "record_domain_mutation",
                duration_ms = start.elapsed().as_millis() as u64,
                event_id = %entry.event_id
            );
            Ok(entry)
        }
        Err(e) => {
            log_op_error!(
                "record_domain_mutation",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(e)
        }
    }
}

async fn record_impl<S>(store: &S, mutation: &DomainMutation) -> Result<AuditLogEntry>
where
    S: AuditLogStore + ?Sized,
{
    if mutation.domain_id.is_empty() {
        return Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op("record_domain_mutation")
            .with_request_id(mutation.context.request_id.clone())
            .with_message("domain_id is required"));
    }

    let (state_before, state_before_encoding) = encode_state(mutation.before.as_ref())?;
    let (state_after, state_after_encoding) = encode_state(mutation.after.as_ref())?;

    let empty = DomainSnapshot::default();
    let summary = compute_change_summary(
        mutation.before.as_ref().unwrap_or(&empty),
        mutation.after.as_ref().unwrap_or(&empty),
    );

    let now = Utc::now();
    let entry = AuditLogEntry {
        domain_id: mutation.domain_id.clone(),
        event_id: Uuid::now_v7().to_string(),
        created_time: DateTime::<Utc>::from_timestamp_millis(now.timestamp_millis())
            .unwrap_or(now),
        operation_type: mutation.operation_type,
        state_before,
        state_before_encoding,
        state_after,
        state_after_encoding,
        comment: summary.to_json()?,
        identity: mutation.identity.clone(),
        identity_type: mutation.identity_type.clone(),
    };

    store.create_audit_log_entry(entry.clone()).await?;
    Ok(entry)
}

/// Encoded bytes and encoding tag; an absent snapshot stores nothing
fn encode_state(snapshot: Option<&DomainSnapshot>) -> Result<(Vec<u8>, String)> {
    match snapshot {
        Some(s) => Ok((serialize_and_compress(s)?, ENCODING_JSON_SNAPPY.to_string())),
        None => Ok((Vec::new(), String::new())),
    }
}
