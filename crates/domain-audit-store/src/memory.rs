//! In-process audit log store.
//!
//! Holds every entry in memory behind a `tokio::sync::RwLock`. Used by tests,
//! the CLI, and as the reference behavior for durable implementations.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cursor::{decode_page_token, encode_page_token};
use crate::entry::{
    AuditLogEntry, GetAuditLogEntryRequest, ReadAuditLogRequest, ReadAuditLogResponse,
};
use crate::errors::{
    duplicate_entry, invalid_page_size, invalid_page_token, missing_field, Result,
};
use crate::store::AuditLogStore;

/// Entries per domain, kept sorted newest first
type DomainLog = Vec<AuditLogEntry>;

#[derive(Debug, Default)]
pub struct MemoryAuditLogStore {
    domains: RwLock<BTreeMap<String, DomainLog>>,
}

impl MemoryAuditLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries stored for a domain
    pub async fn entry_count(&self, domain_id: &str) -> usize {
        self.domains
            .read()
            .await
            .get(domain_id)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl AuditLogStore for MemoryAuditLogStore {
    async fn read_audit_log(&self, request: &ReadAuditLogRequest) -> Result<ReadAuditLogResponse> {
        const OP: &str = "read_audit_log";

        if request.domain_id.is_empty() {
            return Err(missing_field(OP, "domain_id"));
        }
        if request.page_size == 0 {
            return Err(invalid_page_size(OP, request.page_size));
        }

        let after = match request.next_page_token.as_deref() {
            Some(token) => {
                Some(decode_page_token(token).ok_or_else(|| invalid_page_token(OP, token))?)
            }
            None => None,
        };

        let domains = self.domains.read().await;
        let Some(log) = domains.get(&request.domain_id) else {
            return Ok(ReadAuditLogResponse::default());
        };

        // Over-fetch by one to learn whether another page exists
        let mut entries: Vec<AuditLogEntry> = log
            .iter()
            .filter(|e| match &after {
                Some((millis, event_id)) => e.page_key() < (*millis, event_id.as_str()),
                None => true,
            })
            .take(request.page_size.saturating_add(1))
            .cloned()
            .collect();

        let has_more = entries.len() > request.page_size;
        if has_more {
            entries.truncate(request.page_size);
        }
        let next_page_token = if has_more {
            entries
                .last()
                .map(|e| encode_page_token(e.created_time_ms(), &e.event_id))
        } else {
            None
        };

        debug!(
            domain_id = %request.domain_id,
            num_entries = entries.len(),
            has_more,
            "read audit log page"
        );

        Ok(ReadAuditLogResponse {
            entries,
            next_page_token,
        })
    }

    async fn get_audit_log_entry(
        &self,
        request: &GetAuditLogEntryRequest,
    ) -> Result<Option<AuditLogEntry>> {
        let domains = self.domains.read().await;
        Ok(domains.get(&request.domain_id).and_then(|log| {
            log.iter()
                .find(|e| {
                    e.event_id == request.event_id
                        && e.created_time_ms() == request.created_time.timestamp_millis()
                })
                .cloned()
        }))
    }

    async fn create_audit_log_entry(&self, entry: AuditLogEntry) -> Result<()> {
        const OP: &str = "create_audit_log_entry";

        if entry.domain_id.is_empty() {
            return Err(missing_field(OP, "domain_id"));
        }
        if entry.event_id.is_empty() {
            return Err(missing_field(OP, "event_id"));
        }

        let mut domains = self.domains.write().await;
        let log = domains.entry(entry.domain_id.clone()).or_default();
        if log.iter().any(|e| e.event_id == entry.event_id) {
            return Err(duplicate_entry(&entry.domain_id, &entry.event_id));
        }

        log.push(entry);
        log.sort_by(|a, b| b.page_key().cmp(&a.page_key()));
        Ok(())
    }
}
