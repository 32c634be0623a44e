//! Write path: mutations become entries the read path can serve.

mod common;

use common::{snapshot, DOMAIN_ID};
use domain_audit_core::codec::{decompress_and_deserialize, ENCODING_JSON_SNAPPY};
use domain_audit_core::diff::ChangeSummary;
use domain_audit_core::errors::ExErrorKind;
use domain_audit_core::filter::FailoverHistoryFilters;
use domain_audit_core::logging_facility::test_capture::init_test_capture;
use domain_audit_core::model::{
    determine_operation_type, ClusterFailover, DomainOperationType, UpdateDomainRequest,
};
use domain_audit_core::schema::{EVENT_END, EVENT_START};
use domain_audit_engine::commands::{
    record_domain_mutation, DomainMutation, FailoverHistory, GetFailoverEventRequest,
    ListFailoverHistoryRequest,
};
use domain_audit_engine::EngineConfig;
use domain_audit_store::MemoryAuditLogStore;

#[tokio::test]
async fn test_recorded_failover_round_trips_through_history() {
    let store = MemoryAuditLogStore::new();
    let mutation = DomainMutation::new(
        DOMAIN_ID,
        DomainOperationType::Failover,
        Some(snapshot("cluster1", &[])),
        Some(snapshot("cluster2", &[])),
    )
    .with_identity("operator@example.com", "user");

    let entry = record_domain_mutation(&store, &mutation).await.unwrap();
    assert_eq!(entry.state_before_encoding, ENCODING_JSON_SNAPPY);
    assert_eq!(
        decompress_and_deserialize(&entry.state_after).unwrap(),
        snapshot("cluster2", &[])
    );
    assert_eq!(entry.identity, "operator@example.com");
    assert_eq!(entry.created_time.timestamp_subsec_nanos() % 1_000_000, 0);

    let summary = ChangeSummary::from_json(&entry.comment).unwrap();
    assert!(summary.default_cluster_changed);

    let history = FailoverHistory::new(store, EngineConfig::default());
    let listed = history
        .list_failover_history(&ListFailoverHistoryRequest::new(
            FailoverHistoryFilters::for_domain(DOMAIN_ID).default_cluster_only(),
        ))
        .await
        .unwrap();
    assert_eq!(listed.failover_events.len(), 1);
    assert_eq!(listed.failover_events[0].id, entry.event_id);

    let detail = history
        .get_failover_event(&GetFailoverEventRequest::new(
            DOMAIN_ID,
            entry.event_id.clone(),
            entry.created_time.timestamp_millis(),
        ))
        .await
        .unwrap();
    assert_eq!(
        detail.cluster_failovers,
        vec![ClusterFailover::default_cluster("cluster1", "cluster2")]
    );
}

#[tokio::test]
async fn test_creation_has_no_before_state() {
    let store = MemoryAuditLogStore::new();
    let mutation = DomainMutation::new(
        DOMAIN_ID,
        DomainOperationType::Create,
        None,
        Some(snapshot("cluster1", &[])),
    );

    let entry = record_domain_mutation(&store, &mutation).await.unwrap();
    assert!(entry.state_before.is_empty());
    assert!(entry.state_before_encoding.is_empty());
    assert!(!entry.state_after.is_empty());
    assert!(ChangeSummary::from_json(&entry.comment).unwrap().is_empty());
    assert_eq!(store.entry_count(DOMAIN_ID).await, 1);
}

#[tokio::test]
async fn test_event_ids_are_unique() {
    let store = MemoryAuditLogStore::new();
    let mutation = DomainMutation::new(
        DOMAIN_ID,
        DomainOperationType::Update,
        Some(snapshot("cluster1", &[])),
        Some(snapshot("cluster1", &[])),
    );

    let a = record_domain_mutation(&store, &mutation).await.unwrap();
    let b = record_domain_mutation(&store, &mutation).await.unwrap();
    assert_ne!(a.event_id, b.event_id);
    assert_eq!(store.entry_count(DOMAIN_ID).await, 2);
}

#[tokio::test]
async fn test_record_requires_domain_id() {
    let store = MemoryAuditLogStore::new();
    let mutation = DomainMutation::new("", DomainOperationType::Update, None, None);
    let err = record_domain_mutation(&store, &mutation).await.unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
}

#[tokio::test]
async fn test_operation_type_drives_listing() {
    let store = MemoryAuditLogStore::new();
    let before = snapshot("cluster1", &[]);
    let after = snapshot("cluster2", &[]);

    let failover_request = UpdateDomainRequest {
        name: "test-domain".to_string(),
        active_cluster_name: Some("cluster2".to_string()),
        active_clusters: None,
    };
    let plain_request = UpdateDomainRequest {
        name: "test-domain".to_string(),
        ..UpdateDomainRequest::default()
    };

    for request in [&failover_request, &plain_request] {
        let mutation = DomainMutation::new(
            DOMAIN_ID,
            determine_operation_type(request),
            Some(before.clone()),
            Some(after.clone()),
        );
        record_domain_mutation(&store, &mutation).await.unwrap();
    }

    let history = FailoverHistory::new(store, EngineConfig::default());
    let listed = history
        .list_failover_history(&ListFailoverHistoryRequest::new(
            FailoverHistoryFilters::for_domain(DOMAIN_ID),
        ))
        .await
        .unwrap();
    assert_eq!(listed.failover_events.len(), 1);
}

#[tokio::test]
async fn test_record_logs_lifecycle() {
    let capture = init_test_capture();
    let store = MemoryAuditLogStore::new();
    let mutation = DomainMutation::new(
        "logged-domain-unique",
        DomainOperationType::Failover,
        Some(snapshot("cluster1", &[])),
        Some(snapshot("cluster2", &[])),
    );

    let entry = record_domain_mutation(&store, &mutation).await.unwrap();

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some("record_domain_mutation")
            && e.event.as_deref() == Some(EVENT_START)
            && e.field("domain_id") == Some("logged-domain-unique")
    });
    assert_eq!(starts, 1);

    let ends = capture.count_events(|e| {
        e.op.as_deref() == Some("record_domain_mutation")
            && e.event.as_deref() == Some(EVENT_END)
            && e.field("event_id") == Some(entry.event_id.as_str())
    });
    assert_eq!(ends, 1);
}
