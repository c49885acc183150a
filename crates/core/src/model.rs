//! Reference-data snapshot rows.
//!
//! These are the value types the storage collaborator hands to the resolvers:
//! the organisation hierarchy, consumers' direct grants, and
//! patient—organisation links. Each is an immutable point-in-time row; the
//! resolvers filter them in memory and never write them back.
//!
//! Relationship validity is time-bounded. A hierarchy edge is active over the
//! half-open window `[start, end)`; a patient link becomes effective at its
//! effective-from instant (inclusive) and has no recorded end, termination
//! being the upstream feed's concern.

use chrono::{DateTime, Utc};
use gateway_types::HierarchyPath;
use serde::{Deserialize, Serialize};

/// One organisation in the hierarchy, with its time-bounded parent edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrganisationNode {
    /// Unique organisation code, e.g. an ODS code.
    pub organisation_code: String,

    /// Human-readable organisation name.
    pub organisation_name: String,

    /// Materialized position in the organisation tree. Assigned at creation
    /// and never mutated in place; tree edits produce new nodes.
    pub hierarchy_path: HierarchyPath,

    /// When the relationship with the parent organisation begins.
    /// `None` means valid from the beginning of time.
    pub relationship_with_parent_start: Option<DateTime<Utc>>,

    /// When the relationship with the parent organisation ends.
    /// `None` means valid indefinitely.
    pub relationship_with_parent_end: Option<DateTime<Utc>>,
}

impl OrganisationNode {
    /// Whether this node's parent edge is active at `now`.
    ///
    /// The window is half-open: a start equal to `now` is already active, an
    /// end equal to `now` is already expired.
    pub fn parent_relationship_active_at(&self, now: DateTime<Utc>) -> bool {
        let started = self
            .relationship_with_parent_start
            .is_none_or(|start| start <= now);
        let not_ended = self
            .relationship_with_parent_end
            .is_none_or(|end| end > now);
        started && not_ended
    }
}

/// A consumer's direct grant to one organisation.
///
/// Only the direct grant is stored; access to descendants is computed by the
/// hierarchy resolver at query time, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsumerAccessGrant {
    pub consumer_id: String,
    pub organisation_code: String,
}

/// A care relationship between a patient and an organisation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientOrganisationLink {
    /// Patient identifier; may be a pseudonymised token.
    pub nhs_number: String,

    /// Organisation holding the relationship.
    pub organisation_code: String,

    /// When the relationship takes effect. `None` means effective
    /// immediately; a future instant means not yet effective.
    pub effective_from: Option<DateTime<Utc>>,
}

impl PatientOrganisationLink {
    /// Whether the relationship is effective at `now` (effective-from is
    /// inclusive).
    pub fn effective_at(&self, now: DateTime<Utc>) -> bool {
        self.effective_from.is_none_or(|from| from <= now)
    }
}
