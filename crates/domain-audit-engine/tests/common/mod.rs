//! Shared fixtures for engine integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use domain_audit_core::codec::{serialize_and_compress, ENCODING_JSON_SNAPPY};
use domain_audit_core::diff::compute_change_summary;
use domain_audit_core::errors::{ExError, ExErrorKind};
use domain_audit_core::model::{
    ActiveClusterInfo, DomainOperationType, DomainSnapshot, ReplicationConfig,
};
use domain_audit_store::{
    AuditLogEntry, AuditLogStore, GetAuditLogEntryRequest, MemoryAuditLogStore,
    ReadAuditLogRequest, ReadAuditLogResponse, Result,
};

pub const DOMAIN_ID: &str = "test-domain-id";

pub fn at(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis).unwrap()
}

pub fn snapshot(active: &str, regions: &[(&str, &str, i64)]) -> DomainSnapshot {
    let mut rc = ReplicationConfig::new(active).with_clusters(["cluster1", "cluster2", "cluster3"]);
    for (name, cluster, version) in regions {
        rc = rc.with_attribute("region", *name, ActiveClusterInfo::new(*cluster, *version));
    }
    DomainSnapshot::new(DOMAIN_ID, "test-domain").with_replication_config(rc)
}

/// A well-formed entry for a real before/after pair
pub fn entry(
    event_id: &str,
    millis: i64,
    operation_type: DomainOperationType,
    before: &DomainSnapshot,
    after: &DomainSnapshot,
) -> AuditLogEntry {
    AuditLogEntry {
        domain_id: DOMAIN_ID.to_string(),
        event_id: event_id.to_string(),
        created_time: at(millis),
        operation_type,
        state_before: serialize_and_compress(before).unwrap(),
        state_before_encoding: ENCODING_JSON_SNAPPY.to_string(),
        state_after: serialize_and_compress(after).unwrap(),
        state_after_encoding: ENCODING_JSON_SNAPPY.to_string(),
        comment: compute_change_summary(before, after).to_json().unwrap(),
        identity: "operator@example.com".to_string(),
        identity_type: "user".to_string(),
    }
}

pub fn default_failover(event_id: &str, millis: i64) -> AuditLogEntry {
    entry(
        event_id,
        millis,
        DomainOperationType::Failover,
        &snapshot("cluster1", &[]),
        &snapshot("cluster2", &[]),
    )
}

pub fn region_failover(event_id: &str, millis: i64, region: &str) -> AuditLogEntry {
    entry(
        event_id,
        millis,
        DomainOperationType::Failover,
        &snapshot("cluster1", &[(region, "cluster1", 100)]),
        &snapshot("cluster1", &[(region, "cluster2", 101)]),
    )
}

pub async fn store_with(entries: Vec<AuditLogEntry>) -> MemoryAuditLogStore {
    let store = MemoryAuditLogStore::new();
    for e in entries {
        store.create_audit_log_entry(e).await.unwrap();
    }
    store
}

/// Wraps a memory store and remembers the last read request
#[derive(Default)]
pub struct RecordingStore {
    pub inner: MemoryAuditLogStore,
    pub last_read: Mutex<Option<ReadAuditLogRequest>>,
}

impl RecordingStore {
    pub fn last_read(&self) -> Option<ReadAuditLogRequest> {
        self.last_read.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuditLogStore for RecordingStore {
    async fn read_audit_log(&self, request: &ReadAuditLogRequest) -> Result<ReadAuditLogResponse> {
        *self.last_read.lock().unwrap() = Some(request.clone());
        self.inner.read_audit_log(request).await
    }

    async fn get_audit_log_entry(
        &self,
        request: &GetAuditLogEntryRequest,
    ) -> Result<Option<AuditLogEntry>> {
        self.inner.get_audit_log_entry(request).await
    }

    async fn create_audit_log_entry(&self, entry: AuditLogEntry) -> Result<()> {
        self.inner.create_audit_log_entry(entry).await
    }
}

/// Store whose every call fails with a persistence error
pub struct FailingStore;

pub fn storage_down() -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("read_audit_log")
        .with_message("storage unavailable")
}

#[async_trait]
impl AuditLogStore for FailingStore {
    async fn read_audit_log(&self, _: &ReadAuditLogRequest) -> Result<ReadAuditLogResponse> {
        Err(storage_down())
    }

    async fn get_audit_log_entry(
        &self,
        _: &GetAuditLogEntryRequest,
    ) -> Result<Option<AuditLogEntry>> {
        Err(storage_down())
    }

    async fn create_audit_log_entry(&self, _: AuditLogEntry) -> Result<()> {
        Err(storage_down())
    }
}
