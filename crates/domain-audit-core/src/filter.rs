//! List-time filter predicate over persisted change summaries.
//!
//! Filtering runs against the summary stored in each entry's comment so that
//! listing never pays for snapshot decompression.

use tracing::debug;

use crate::diff::ChangeSummary;
use crate::model::ClusterAttributeRef;

/// Filter criteria of a failover history query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailoverHistoryFilters {
    pub domain_id: String,
    /// Only events that moved the default active cluster
    pub default_active_cluster_only: bool,
    /// Only events that moved at least one of these attributes
    pub attributes: Vec<ClusterAttributeRef>,
}

impl FailoverHistoryFilters {
    pub fn for_domain(domain_id: impl Into<String>) -> Self {
        Self {
            domain_id: domain_id.into(),
            ..Self::default()
        }
    }

    pub fn default_cluster_only(mut self) -> Self {
        self.default_active_cluster_only = true;
        self
    }

    pub fn with_attribute(mut self, scope: impl Into<String>, name: impl Into<String>) -> Self {
        self.attributes.push(ClusterAttributeRef::new(scope, name));
        self
    }
}

/// Decide whether an audit event passes the filters
///
/// An unparsable summary includes the event: a corrupt index must not hide
/// audit events, so over-inclusion wins over loss.
pub fn should_include_event(summary_json: &str, filters: &FailoverHistoryFilters) -> bool {
    let summary = match ChangeSummary::from_json(summary_json) {
        Ok(summary) => summary,
        Err(err) => {
            debug!(
                domain_id = %filters.domain_id,
                error = %err,
                "change summary unparsable, including event"
            );
            return true;
        }
    };

    if filters.default_active_cluster_only && !summary.default_cluster_changed {
        return false;
    }

    if !filters.attributes.is_empty()
        && !matches_attribute_filter(&summary.cluster_attributes_changed, &filters.attributes)
    {
        return false;
    }

    true
}

/// True if any requested attribute is among the changed ones
fn matches_attribute_filter(
    changed: &[ClusterAttributeRef],
    requested: &[ClusterAttributeRef],
) -> bool {
    requested.iter().any(|req| changed.contains(req))
}
