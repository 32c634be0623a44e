//! Read-time failover reconstruction.
//!
//! Unlike the write-time summary, this comparison is complete: it walks the
//! union of scopes and attribute names so that attributes added or removed
//! by a mutation are reported as transitions from or to the empty cluster.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{
    ActiveClusterInfo, ClusterAttributeRef, ClusterAttributeScope, ClusterFailover,
    DomainSnapshot,
};

type Scopes = BTreeMap<String, ClusterAttributeScope>;

/// Compute every ownership transition between two snapshots
///
/// A missing replication config on either side reads as an empty default
/// cluster with no attribute scopes. The default-cluster transition, if any,
/// comes first; attribute transitions follow in (scope, name) order.
pub fn compute_cluster_failovers(
    before: &DomainSnapshot,
    after: &DomainSnapshot,
) -> Vec<ClusterFailover> {
    let before_rc = before.replication_config.as_ref();
    let after_rc = after.replication_config.as_ref();

    if before_rc.is_none() && after_rc.is_none() {
        return Vec::new();
    }

    let mut failovers = Vec::new();

    let before_cluster = before_rc.map_or("", |rc| rc.active_cluster_name.as_str());
    let after_cluster = after_rc.map_or("", |rc| rc.active_cluster_name.as_str());
    if before_cluster != after_cluster {
        failovers.push(ClusterFailover::default_cluster(before_cluster, after_cluster));
    }

    failovers.extend(compute_cluster_attribute_changes(
        before_rc.and_then(|rc| rc.attribute_scopes()),
        after_rc.and_then(|rc| rc.attribute_scopes()),
    ));

    failovers
}

/// All attribute transitions, including additions and removals
fn compute_cluster_attribute_changes(
    before: Option<&Scopes>,
    after: Option<&Scopes>,
) -> Vec<ClusterFailover> {
    let mut failovers = Vec::new();

    for scope in key_union(before, after) {
        let before_scope = before.and_then(|s| s.get(scope)).map(|s| &s.cluster_attributes);
        let after_scope = after.and_then(|s| s.get(scope)).map(|s| &s.cluster_attributes);

        for name in key_union(before_scope, after_scope) {
            let from = resolve(before_scope, name);
            let to = resolve(after_scope, name);

            if from.active_cluster_name != to.active_cluster_name {
                failovers.push(ClusterFailover::attribute(
                    ClusterAttributeRef::new(scope.as_str(), name.as_str()),
                    from,
                    to,
                ));
            }
        }
    }

    failovers
}

/// Sorted union of the keys of two optional maps
fn key_union<'a, V>(
    a: Option<&'a BTreeMap<String, V>>,
    b: Option<&'a BTreeMap<String, V>>,
) -> BTreeSet<&'a String> {
    a.into_iter()
        .chain(b)
        .flat_map(|m| m.keys())
        .collect()
}

/// Owner of `name` on one side; absent reads as `("", 0)`
fn resolve(
    attributes: Option<&BTreeMap<String, ActiveClusterInfo>>,
    name: &str,
) -> ActiveClusterInfo {
    attributes
        .and_then(|a| a.get(name))
        .cloned()
        .unwrap_or_default()
}
