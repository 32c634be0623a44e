//! Write-time change summary.
//!
//! The summary is stored as the audit entry's comment and scanned by list
//! queries instead of decompressing snapshots, so it records only what the
//! filters need.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::errors::{AuditError, Result};
use crate::model::{ClusterAttributeRef, ClusterAttributeScope, DomainSnapshot};

/// Changed-field name recorded when the default active cluster differs
pub const FIELD_ACTIVE_CLUSTER_NAME: &str = "ActiveClusterName";
/// Changed-field name recorded when any both-present attribute changed owner
pub const FIELD_ACTIVE_CLUSTERS: &str = "ActiveClusters";

/// Lightweight summary of what changed in a domain update
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub changed_fields: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub default_cluster_changed: bool,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub cluster_attributes_changed: Vec<ClusterAttributeRef>,
}

/// A JSON `null` field reads as the field's default
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ChangeSummary {
    pub fn is_empty(&self) -> bool {
        self.changed_fields.is_empty()
            && !self.default_cluster_changed
            && self.cluster_attributes_changed.is_empty()
    }

    /// Persisted text form
    ///
    /// # Errors
    ///
    /// - `Encode` — serialization failed (not expected for this shape)
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| AuditError::Encode {
            message: e.to_string(),
        })
    }

    /// Parse the persisted text form
    ///
    /// A bare `null` document, or a `null` field, reads as empty.
    ///
    /// # Errors
    ///
    /// - `FilterParse` — the text is not a JSON object of the summary shape
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str::<Option<Self>>(text)
            .map(Option::unwrap_or_default)
            .map_err(|e| AuditError::FilterParse {
                message: e.to_string(),
            })
    }
}

/// Compare two snapshots and produce the write-time summary
///
/// Returns an empty summary when either side has no replication config.
/// Attribute owners are compared only where the scope and the attribute name
/// exist on both sides.
pub fn compute_change_summary(before: &DomainSnapshot, after: &DomainSnapshot) -> ChangeSummary {
    let mut summary = ChangeSummary::default();

    let (Some(before_rc), Some(after_rc)) =
        (&before.replication_config, &after.replication_config)
    else {
        return summary;
    };

    if before_rc.active_cluster_name != after_rc.active_cluster_name {
        summary
            .changed_fields
            .push(FIELD_ACTIVE_CLUSTER_NAME.to_string());
        summary.default_cluster_changed = true;
    }

    let changed =
        compare_cluster_attributes(before_rc.attribute_scopes(), after_rc.attribute_scopes());
    if !changed.is_empty() {
        summary.changed_fields.push(FIELD_ACTIVE_CLUSTERS.to_string());
        summary.cluster_attributes_changed = changed;
    }

    summary
}

/// Attributes present on both sides whose owning cluster differs
fn compare_cluster_attributes(
    before: Option<&BTreeMap<String, ClusterAttributeScope>>,
    after: Option<&BTreeMap<String, ClusterAttributeScope>>,
) -> Vec<ClusterAttributeRef> {
    let (Some(before), Some(after)) = (before, after) else {
        return Vec::new();
    };

    let mut changed = Vec::new();
    for (scope, after_scope) in after {
        let Some(before_scope) = before.get(scope) else {
            continue;
        };
        for (name, after_info) in &after_scope.cluster_attributes {
            let Some(before_info) = before_scope.cluster_attributes.get(name) else {
                continue;
            };
            if before_info.active_cluster_name != after_info.active_cluster_name {
                changed.push(ClusterAttributeRef::new(scope.clone(), name.clone()));
            }
        }
    }
    changed
}
