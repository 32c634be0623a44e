//! Classification of domain mutations for auditing.

use serde::{Deserialize, Serialize};

use crate::model::snapshot::ActiveClusters;

/// Kind of mutation an audit entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainOperationType {
    Create,
    Update,
    Failover,
    Delete,
}

impl DomainOperationType {
    /// Whether entries of this type show up in failover history
    pub fn is_failover(&self) -> bool {
        matches!(self, DomainOperationType::Failover)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DomainOperationType::Create => "create",
            DomainOperationType::Update => "update",
            DomainOperationType::Failover => "failover",
            DomainOperationType::Delete => "delete",
        }
    }
}

/// How a failover was carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailoverType {
    /// Ownership switched immediately
    Force,
    /// Ownership handed over after draining in-flight work
    Grace,
}

/// The ownership-relevant subset of an update request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateDomainRequest {
    pub name: String,
    pub active_cluster_name: Option<String>,
    pub active_clusters: Option<ActiveClusters>,
}

/// Classify an update: any change to ownership is a failover
pub fn determine_operation_type(request: &UpdateDomainRequest) -> DomainOperationType {
    if request.active_cluster_name.is_some() || request.active_clusters.is_some() {
        DomainOperationType::Failover
    } else {
        DomainOperationType::Update
    }
}
