//! Request and response types for failover history queries.

use domain_audit_core::filter::FailoverHistoryFilters;
use domain_audit_core::model::{ClusterFailover, FailoverType};
use domain_audit_types::RequestContext;
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct ListFailoverHistoryRequest {
    pub filters: FailoverHistoryFilters,
    /// Zero means "use the configured default"
    pub page_size: usize,
    /// Token from a previous response, forwarded to the store untouched
    pub next_page_token: Option<String>,
    pub context: RequestContext,
}

impl ListFailoverHistoryRequest {
    pub fn new(filters: FailoverHistoryFilters) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_page_token(mut self, token: Option<String>) -> Self {
        self.next_page_token = token;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListFailoverHistoryResponse {
    pub failover_events: Vec<FailoverEvent>,
    pub next_page_token: Option<String>,
}

/// Header of one failover in a history listing
///
/// `cluster_failovers` is empty unless list hydration is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailoverEvent {
    pub id: String,
    pub created_time_ms: i64,
    pub failover_type: FailoverType,
    pub cluster_failovers: Vec<ClusterFailover>,
}

#[derive(Debug, Clone, Default)]
pub struct GetFailoverEventRequest {
    pub domain_id: String,
    pub failover_event_id: String,
    /// Creation time of the entry in milliseconds since the epoch
    pub created_time_ms: Option<i64>,
    pub context: RequestContext,
}

impl GetFailoverEventRequest {
    pub fn new(
        domain_id: impl Into<String>,
        failover_event_id: impl Into<String>,
        created_time_ms: i64,
    ) -> Self {
        Self {
            domain_id: domain_id.into(),
            failover_event_id: failover_event_id.into(),
            created_time_ms: Some(created_time_ms),
            context: RequestContext::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetFailoverEventResponse {
    pub cluster_failovers: Vec<ClusterFailover>,
}
