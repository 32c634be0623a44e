pub mod failover;
pub mod operation;
pub mod snapshot;

pub use failover::{ClusterAttributeRef, ClusterFailover};
pub use operation::{
    determine_operation_type, DomainOperationType, FailoverType, UpdateDomainRequest,
};
pub use snapshot::{
    ActiveClusterInfo, ActiveClusters, ClusterAttributeScope, ClusterReplicationConfig,
    DomainConfig, DomainInfo, DomainSnapshot, DomainStatus, ReplicationConfig,
};
