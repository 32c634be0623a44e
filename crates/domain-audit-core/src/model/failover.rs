use serde::{Deserialize, Serialize};

use crate::model::snapshot::ActiveClusterInfo;

/// Reference to one attribute within a scope, e.g. `region/us-east-1`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ClusterAttributeRef {
    pub scope: String,
    pub name: String,
}

impl ClusterAttributeRef {
    pub fn new(scope: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for ClusterAttributeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.scope, self.name)
    }
}

/// One ownership transition between two snapshots
///
/// `cluster_attribute` is `None` exactly when the transition is of the
/// default active cluster. Default transitions carry version 0 on both sides.
/// Recomputed on every read and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterFailover {
    pub from_cluster: ActiveClusterInfo,
    pub to_cluster: ActiveClusterInfo,
    pub cluster_attribute: Option<ClusterAttributeRef>,
    pub is_default_cluster: bool,
}

impl ClusterFailover {
    pub fn default_cluster(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from_cluster: ActiveClusterInfo::new(from, 0),
            to_cluster: ActiveClusterInfo::new(to, 0),
            cluster_attribute: None,
            is_default_cluster: true,
        }
    }

    pub fn attribute(
        attribute: ClusterAttributeRef,
        from: ActiveClusterInfo,
        to: ActiveClusterInfo,
    ) -> Self {
        Self {
            from_cluster: from,
            to_cluster: to,
            cluster_attribute: Some(attribute),
            is_default_cluster: false,
        }
    }

    /// Sort key used when callers need a stable order: default first, then (scope, name)
    pub fn sort_key(&self) -> (bool, Option<&ClusterAttributeRef>) {
        (!self.is_default_cluster, self.cluster_attribute.as_ref())
    }
}
