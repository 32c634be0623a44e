use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Point-in-time view of a domain's configuration
///
/// One snapshot is captured before and one after every audited mutation.
/// Snapshots are never mutated once captured; the audit pipeline only reads
/// them, summarizes them, and hands them to the codec.
///
/// Nested maps are `BTreeMap` so that the serialized form of a snapshot is
/// stable for a given value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainSnapshot {
    pub info: Option<DomainInfo>,
    pub config: Option<DomainConfig>,
    pub replication_config: Option<ReplicationConfig>,
    pub is_global_domain: bool,
    pub config_version: i64,
    pub failover_version: i64,
    pub failover_notification_version: i64,
    pub previous_failover_version: i64,
    /// Unix millis at which a graceful failover expires, if one is in flight
    pub failover_end_time: Option<i64>,
    pub last_updated_time: i64,
    pub notification_version: i64,
}

impl DomainSnapshot {
    /// Minimal snapshot with identity and a default active cluster
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            info: Some(DomainInfo {
                id: id.into(),
                name: name.into(),
                ..DomainInfo::default()
            }),
            ..Self::default()
        }
    }

    pub fn with_replication_config(mut self, replication_config: ReplicationConfig) -> Self {
        self.replication_config = Some(replication_config);
        self
    }

    pub fn with_retention_days(mut self, retention_days: i32) -> Self {
        self.config
            .get_or_insert_with(DomainConfig::default)
            .retention_days = retention_days;
        self
    }

    pub fn domain_id(&self) -> Option<&str> {
        self.info.as_ref().map(|i| i.id.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainStatus {
    #[default]
    Registered,
    Deprecated,
    Deleted,
}

/// Identity and descriptive fields of a domain
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainInfo {
    pub id: String,
    pub name: String,
    pub status: DomainStatus,
    pub description: String,
    pub owner_email: String,
    pub data: BTreeMap<String, String>,
}

/// Retention and archival settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainConfig {
    pub retention_days: i32,
    pub emit_metric: bool,
    pub history_archival_uri: String,
    pub visibility_archival_uri: String,
}

/// A cluster participating in replication for the domain
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClusterReplicationConfig {
    pub cluster_name: String,
}

/// Which clusters own write-authority for the domain
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplicationConfig {
    /// Default active cluster, used when no attribute scope applies
    pub active_cluster_name: String,
    pub clusters: Vec<ClusterReplicationConfig>,
    /// Per-attribute ownership, absent for active-passive domains
    pub active_clusters: Option<ActiveClusters>,
}

impl ReplicationConfig {
    pub fn new(active_cluster_name: impl Into<String>) -> Self {
        Self {
            active_cluster_name: active_cluster_name.into(),
            ..Self::default()
        }
    }

    pub fn with_clusters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clusters = names
            .into_iter()
            .map(|n| ClusterReplicationConfig {
                cluster_name: n.into(),
            })
            .collect();
        self
    }

    /// Set the owner of one attribute, creating the scope if needed
    pub fn with_attribute(
        mut self,
        scope: impl Into<String>,
        name: impl Into<String>,
        info: ActiveClusterInfo,
    ) -> Self {
        self.active_clusters
            .get_or_insert_with(ActiveClusters::default)
            .attribute_scopes
            .entry(scope.into())
            .or_default()
            .cluster_attributes
            .insert(name.into(), info);
        self
    }

    /// Attribute scopes, if per-attribute ownership is configured
    pub fn attribute_scopes(&self) -> Option<&BTreeMap<String, ClusterAttributeScope>> {
        self.active_clusters.as_ref().map(|ac| &ac.attribute_scopes)
    }
}

/// Per-attribute ownership keyed by scope name (e.g. "region")
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveClusters {
    pub attribute_scopes: BTreeMap<String, ClusterAttributeScope>,
}

/// Ownership of every attribute value within one scope
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterAttributeScope {
    pub cluster_attributes: BTreeMap<String, ActiveClusterInfo>,
}

/// Owning cluster of an attribute, with the version assigned at takeover
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveClusterInfo {
    pub active_cluster_name: String,
    pub failover_version: i64,
}

impl ActiveClusterInfo {
    pub fn new(active_cluster_name: impl Into<String>, failover_version: i64) -> Self {
        Self {
            active_cluster_name: active_cluster_name.into(),
            failover_version,
        }
    }
}
