//! Hierarchy expansion.
//!
//! A consumer's grants name organisations directly; what the consumer may
//! actually see is each granted organisation plus every organisation below it
//! in the tree whose parent edge is active at the evaluation instant. The
//! expansion is computed here at query time and never stored.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};

use crate::model::{ConsumerAccessGrant, OrganisationNode};

/// Expands a consumer's direct grants into the full set of accessible
/// organisation codes.
///
/// For each grant, the granted organisation is the *anchor*; the result
/// includes the anchor itself plus every node whose path descends from the
/// anchor's path and whose parent edge is active at `now`. The anchor is
/// included by code equality, deliberately bypassing its own edge window: a
/// direct grant is an explicit entitlement, and a stale edge timestamp on the
/// anchor must not silently revoke it. Descent, by contrast, is inherited
/// access and is always window-checked.
///
/// A grant whose code matches no node is a dangling reference and contributes
/// nothing; the set is simply empty when no grants resolve. Codes reachable
/// through several anchors appear once.
pub fn expand_accessible_organisations(
    consumer_id: &str,
    grants: &[ConsumerAccessGrant],
    nodes: &[OrganisationNode],
    now: DateTime<Utc>,
) -> BTreeSet<String> {
    let granted_codes: BTreeSet<&str> = grants
        .iter()
        .filter(|grant| grant.consumer_id == consumer_id)
        .map(|grant| grant.organisation_code.as_str())
        .collect();

    let nodes_by_code: HashMap<&str, &OrganisationNode> = nodes
        .iter()
        .map(|node| (node.organisation_code.as_str(), node))
        .collect();

    let mut accessible = BTreeSet::new();
    let mut anchors = 0usize;

    for code in &granted_codes {
        let Some(anchor) = nodes_by_code.get(code) else {
            tracing::warn!(
                consumer_id,
                organisation_code = code,
                "grant references an unknown organisation; skipping"
            );
            continue;
        };
        anchors += 1;

        for node in nodes {
            let is_anchor = node.organisation_code == anchor.organisation_code;
            let is_active_descendant = node.hierarchy_path.is_descendant_of(&anchor.hierarchy_path)
                && node.parent_relationship_active_at(now);

            if is_anchor || is_active_descendant {
                accessible.insert(node.organisation_code.clone());
            }
        }
    }

    tracing::debug!(
        consumer_id,
        granted = granted_codes.len(),
        anchors,
        resolved = accessible.len(),
        "expanded organisation access"
    );

    accessible
}
