//! Human-readable renderer for failover lists.

use crate::model::{ActiveClusterInfo, ClusterFailover};

/// Render a Markdown summary of a failover list
///
/// Intended for operators reviewing an audit event. Informational only.
pub fn render_failover_summary(failovers: &[ClusterFailover]) -> String {
    let mut out = String::from("## Cluster Failovers\n\n");

    if failovers.is_empty() {
        out.push_str("_No active-cluster changes detected._\n");
        return out;
    }

    let (defaults, attributes): (Vec<&ClusterFailover>, Vec<&ClusterFailover>) =
        failovers.iter().partition(|f| f.is_default_cluster);

    if let Some(f) = defaults.first() {
        out.push_str(&format!(
            "**Default active cluster**: {} → {}\n\n",
            cluster_label(&f.from_cluster),
            cluster_label(&f.to_cluster),
        ));
    }

    if !attributes.is_empty() {
        out.push_str(&format!(
            "### Attribute Failovers ({})\n\n",
            attributes.len()
        ));
        out.push_str("| Scope | Attribute | From | To |\n|---|---|---|---|\n");
        for f in attributes {
            let (scope, name) = f
                .cluster_attribute
                .as_ref()
                .map_or(("", ""), |a| (a.scope.as_str(), a.name.as_str()));
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                scope,
                name,
                versioned_label(&f.from_cluster),
                versioned_label(&f.to_cluster),
            ));
        }
    }

    out
}

fn cluster_label(info: &ActiveClusterInfo) -> String {
    if info.active_cluster_name.is_empty() {
        "_(none)_".to_string()
    } else {
        format!("`{}`", info.active_cluster_name)
    }
}

fn versioned_label(info: &ActiveClusterInfo) -> String {
    if info.active_cluster_name.is_empty() {
        cluster_label(info)
    } else {
        format!("{} (v{})", cluster_label(info), info.failover_version)
    }
}
