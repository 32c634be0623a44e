use domain_audit_core::model::{ActiveClusterInfo, DomainSnapshot, ReplicationConfig};

/// Snapshot of the shared test domain with the given default cluster
#[allow(dead_code)]
pub fn domain(active_cluster: &str) -> DomainSnapshot {
    DomainSnapshot::new("test-domain-id", "test-domain")
        .with_retention_days(7)
        .with_replication_config(
            ReplicationConfig::new(active_cluster)
                .with_clusters(["cluster1", "cluster2", "cluster3"]),
        )
}

/// Snapshot with a default cluster and `region` attributes `(name, cluster, version)`
#[allow(dead_code)]
pub fn domain_with_regions(active_cluster: &str, regions: &[(&str, &str, i64)]) -> DomainSnapshot {
    let rc = regions.iter().fold(
        ReplicationConfig::new(active_cluster),
        |rc, (name, cluster, version)| {
            rc.with_attribute("region", *name, ActiveClusterInfo::new(*cluster, *version))
        },
    );
    DomainSnapshot::new("test-domain-id", "test-domain")
        .with_retention_days(7)
        .with_replication_config(rc)
}
